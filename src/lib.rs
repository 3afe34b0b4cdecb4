//! # endpoint_pool
//!
//! Thread-safe connection pool for HTTP clients, keyed by destination
//! endpoint, with keepalive-based expiration and lazy eviction.
//!
//! ## Features
//!
//! - Idle connections grouped per `(scheme, host, port)` endpoint
//! - Most-recently-released-first reuse, so the warmest connection wins
//! - Keepalive expiration checked lazily during the borrow scan — no
//!   background reaper thread
//! - Scoped use via `with_connection`: release on success, discard on
//!   any error, so a possibly-corrupt transport never re-enters the pool
//! - Teardown failures reported to an injected collaborator, never
//!   raised at callers
//! - Bulk shutdown with `close`
//!
//! ## Quick Start
//!
//! ```rust
//! use endpoint_pool::{
//!     Connection, ConnectionFactory, ConnectionPool, Endpoint, PoolConfiguration, PoolResult,
//! };
//!
//! struct Conn {
//!     live: bool,
//! }
//!
//! impl Connection for Conn {
//!     fn is_established(&self) -> bool {
//!         self.live
//!     }
//!     fn establish(&mut self) -> PoolResult<()> {
//!         self.live = true;
//!         Ok(())
//!     }
//!     fn teardown(&mut self) -> PoolResult<()> {
//!         self.live = false;
//!         Ok(())
//!     }
//! }
//!
//! struct Factory;
//!
//! impl ConnectionFactory for Factory {
//!     type Conn = Conn;
//!     fn create(&self, _endpoint: &Endpoint) -> PoolResult<Conn> {
//!         Ok(Conn { live: false })
//!     }
//! }
//!
//! let pool = ConnectionPool::new(PoolConfiguration::default());
//! let endpoint = Endpoint::https("api.example.com", 443);
//!
//! let reply: Result<String, endpoint_pool::ConnectionError> =
//!     pool.with_connection(&endpoint, &Factory, |_conn| Ok("ok".to_string()));
//! assert_eq!(reply.unwrap(), "ok");
//! assert_eq!(pool.idle_count(&endpoint), 1);
//! ```

mod config;
mod connection;
mod endpoint;
mod entry;
mod errors;
mod pool;
mod report;

pub use config::PoolConfiguration;
pub use connection::{Connection, ConnectionFactory};
pub use endpoint::Endpoint;
pub use errors::{ConnectionError, PoolResult};
pub use pool::ConnectionPool;
pub use report::{ErrorReporter, TracingReporter};
