//! Capabilities the pool requires from connections and their factory

use crate::endpoint::Endpoint;
use crate::errors::PoolResult;

/// The minimal surface the pool needs from a connection handle.
///
/// Concrete implementations (plain TCP, TLS sessions, test fakes) live
/// outside this crate; the pool only ever calls these three operations.
/// `establish` is called exactly once, on a freshly factory-created
/// handle — a connection taken back out of the idle store is assumed
/// still live and is never re-established.
pub trait Connection {
    /// Whether the handle has completed its handshake. Non-mutating.
    fn is_established(&self) -> bool;

    /// Perform the network handshake.
    fn establish(&mut self) -> PoolResult<()>;

    /// Release the underlying resources (socket, TLS session).
    ///
    /// May fail, e.g. when the peer already closed the socket; the pool
    /// reports such failures to its [`ErrorReporter`] and never
    /// propagates them to callers.
    ///
    /// [`ErrorReporter`]: crate::ErrorReporter
    fn teardown(&mut self) -> PoolResult<()>;
}

/// Produces new, not-yet-established connection handles.
///
/// The pool is responsible for calling [`Connection::establish`] on the
/// result before handing it to a caller; factories never establish.
pub trait ConnectionFactory {
    type Conn: Connection;

    /// Create a fresh handle for `endpoint`. A creation failure is
    /// surfaced to the borrow caller unchanged.
    fn create(&self, endpoint: &Endpoint) -> PoolResult<Self::Conn>;
}
