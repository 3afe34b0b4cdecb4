//! Pool configuration options

use std::time::Duration;

/// Configuration for connection pool behavior
///
/// # Examples
///
/// ```
/// use endpoint_pool::PoolConfiguration;
/// use std::time::Duration;
///
/// let config = PoolConfiguration::new()
///     .with_keepalive_timeout(Duration::from_secs(90));
///
/// assert_eq!(config.keepalive_timeout, Duration::from_secs(90));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfiguration {
    /// How long a released connection stays eligible for reuse.
    ///
    /// A zero duration makes every released connection immediately
    /// stale, which forces the eviction path on the next borrow.
    pub keepalive_timeout: Duration,
}

impl Default for PoolConfiguration {
    fn default() -> Self {
        Self {
            keepalive_timeout: Duration::from_secs(60),
        }
    }
}

impl PoolConfiguration {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keepalive timeout
    pub fn with_keepalive_timeout(mut self, timeout: Duration) -> Self {
        self.keepalive_timeout = timeout;
        self
    }
}
