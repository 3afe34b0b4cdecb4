//! Core connection pool implementation

use crate::config::PoolConfiguration;
use crate::connection::{Connection, ConnectionFactory};
use crate::endpoint::Endpoint;
use crate::entry::PoolEntry;
use crate::errors::{ConnectionError, PoolResult};
use crate::report::{ErrorReporter, TracingReporter};

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Thread-safe pool of idle connections keyed by [`Endpoint`].
///
/// Each endpoint maps to an ordered sequence of idle entries, oldest
/// release at the front and newest at the back; borrowing always
/// consumes from the back so the warmest connection goes out first.
/// Expired entries are evicted lazily, during the borrow scan — there
/// is no background reaper.
///
/// A borrowed connection is owned exclusively by its caller; absence
/// from the map is the checked-out state, so two concurrent borrowers
/// can never receive the same handle.
///
/// # Examples
///
/// ```
/// use endpoint_pool::{
///     Connection, ConnectionFactory, ConnectionPool, Endpoint, PoolConfiguration, PoolResult,
/// };
///
/// struct Conn {
///     live: bool,
/// }
///
/// impl Connection for Conn {
///     fn is_established(&self) -> bool {
///         self.live
///     }
///     fn establish(&mut self) -> PoolResult<()> {
///         self.live = true;
///         Ok(())
///     }
///     fn teardown(&mut self) -> PoolResult<()> {
///         self.live = false;
///         Ok(())
///     }
/// }
///
/// struct Factory;
///
/// impl ConnectionFactory for Factory {
///     type Conn = Conn;
///     fn create(&self, _endpoint: &Endpoint) -> PoolResult<Conn> {
///         Ok(Conn { live: false })
///     }
/// }
///
/// let pool = ConnectionPool::new(PoolConfiguration::default());
/// let endpoint = Endpoint::https("api.example.com", 443);
///
/// let conn = pool.borrow(&endpoint, &Factory).unwrap();
/// assert!(conn.is_established());
///
/// pool.release(&endpoint, conn);
/// assert_eq!(pool.idle_count(&endpoint), 1);
/// ```
pub struct ConnectionPool<C> {
    idle: Mutex<HashMap<Endpoint, Vec<PoolEntry<C>>>>,
    keepalive: Duration,
    reporter: Arc<dyn ErrorReporter>,
}

impl<C: Connection> ConnectionPool<C> {
    /// Create a pool that reports teardown failures via `tracing`
    pub fn new(config: PoolConfiguration) -> Self {
        Self::with_reporter(config, Arc::new(TracingReporter))
    }

    /// Create a pool with a custom failure reporter
    pub fn with_reporter(config: PoolConfiguration, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            idle: Mutex::new(HashMap::new()),
            keepalive: config.keepalive_timeout,
            reporter,
        }
    }

    /// Obtain a connection to `endpoint`, reusing an idle one when a
    /// live entry exists and falling back to the factory otherwise.
    ///
    /// A reused connection is handed out as-is; `establish` is only
    /// ever called on a freshly created handle, exactly once. Expired
    /// entries encountered during the scan are torn down on the spot,
    /// with teardown failures reported rather than propagated.
    ///
    /// Fails only when the factory refuses to create a handle or the
    /// handshake on a fresh handle fails.
    pub fn borrow<F>(&self, endpoint: &Endpoint, factory: &F) -> PoolResult<C>
    where
        F: ConnectionFactory<Conn = C>,
    {
        loop {
            // Take one entry at a time so no I/O happens under the lock.
            let entry = self
                .idle
                .lock()
                .get_mut(endpoint)
                .and_then(|entries| entries.pop());
            let Some(entry) = entry else { break };

            if !entry.is_expired(Instant::now()) {
                return Ok(entry.into_connection());
            }

            let mut stale = entry.into_connection();
            if let Err(error) = stale.teardown() {
                self.reporter.report(
                    &format!("failed to close expired connection to {endpoint}"),
                    &error,
                );
            }
        }

        let mut connection = factory.create(endpoint)?;
        connection.establish()?;
        Ok(connection)
    }

    /// Return a connection to the idle store for future reuse.
    ///
    /// The entry is stamped `now + keepalive` and appended at the
    /// most-recently-released end. Release trusts its input: handing
    /// back a connection the caller already knows is broken is a
    /// documented gap, not validated here.
    pub fn release(&self, endpoint: &Endpoint, connection: C) {
        let entry = PoolEntry::new(connection, Instant::now() + self.keepalive);
        self.idle
            .lock()
            .entry(endpoint.clone())
            .or_default()
            .push(entry);
    }

    /// Borrow a connection, run `body` with it, and dispose of it
    /// correctly on every exit path.
    ///
    /// On success the connection goes back to the idle store. On *any*
    /// error out of `body` the connection is dropped instead — partial
    /// reads or writes may have left the transport in an indeterminate
    /// state, so the pool never tries to tell recoverable errors apart.
    /// The original error propagates unchanged; borrow failures convert
    /// into `E` via its `From<ConnectionError>` impl.
    ///
    /// A panic inside `body` takes the same discard path: the handle is
    /// owned by this scope and an unwind drops it without releasing.
    pub fn with_connection<F, B, T, E>(
        &self,
        endpoint: &Endpoint,
        factory: &F,
        body: B,
    ) -> Result<T, E>
    where
        F: ConnectionFactory<Conn = C>,
        B: FnOnce(&mut C) -> Result<T, E>,
        E: From<ConnectionError>,
    {
        let mut connection = self.borrow(endpoint, factory)?;
        match body(&mut connection) {
            Ok(value) => {
                self.release(endpoint, connection);
                Ok(value)
            }
            Err(error) => Err(error),
        }
    }

    /// Tear down every idle connection and empty the pool.
    ///
    /// Teardown failures are reported exactly as in the eviction path
    /// and never surface to the caller. Closing an already-empty pool
    /// performs no connection operations.
    pub fn close(&self) {
        let drained: Vec<(Endpoint, Vec<PoolEntry<C>>)> = self.idle.lock().drain().collect();

        for (endpoint, entries) in drained {
            for entry in entries {
                let mut connection = entry.into_connection();
                if let Err(error) = connection.teardown() {
                    self.reporter.report(
                        &format!("failed to close idle connection to {endpoint}"),
                        &error,
                    );
                }
            }
        }
    }

    /// Number of idle connections currently stored for `endpoint`.
    ///
    /// An endpoint that was never released to reads the same as one
    /// whose entries have all been borrowed back out: zero.
    pub fn idle_count(&self, endpoint: &Endpoint) -> usize {
        self.idle
            .lock()
            .get(endpoint)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    /// Snapshot of idle-entry counts for every known endpoint
    pub fn idle_counts(&self) -> HashMap<Endpoint, usize> {
        self.idle
            .lock()
            .iter()
            .map(|(endpoint, entries)| (endpoint.clone(), entries.len()))
            .collect()
    }
}

impl<C: Connection> Default for ConnectionPool<C> {
    fn default() -> Self {
        Self::new(PoolConfiguration::default())
    }
}
