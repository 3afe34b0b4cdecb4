//! Idle-entry bookkeeping for pooled connections

use std::time::Instant;

/// One idle connection plus the deadline at which it goes stale.
///
/// Entries exist only while a connection is resident in the pool: they
/// are created at release time, stamped `now + keepalive`, and consumed
/// when the connection is borrowed back out or evicted.
#[derive(Debug)]
pub(crate) struct PoolEntry<C> {
    connection: C,
    expires_at: Instant,
}

impl<C> PoolEntry<C> {
    pub(crate) fn new(connection: C, expires_at: Instant) -> Self {
        Self {
            connection,
            expires_at,
        }
    }

    /// An entry is live only while its deadline is strictly in the
    /// future, so a zero keepalive expires entries at insertion time.
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }

    pub(crate) fn into_connection(self) -> C {
        self.connection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_entry_live_before_deadline() {
        let now = Instant::now();
        let entry = PoolEntry::new((), now + Duration::from_secs(60));
        assert!(!entry.is_expired(now));
    }

    #[test]
    fn test_entry_expired_at_and_after_deadline() {
        let now = Instant::now();

        // The deadline itself already counts as stale.
        let at_deadline = PoolEntry::new((), now);
        assert!(at_deadline.is_expired(now));

        let past = PoolEntry::new((), now);
        assert!(past.is_expired(now + Duration::from_millis(1)));
    }

    #[test]
    fn test_into_connection_extracts_handle() {
        let entry = PoolEntry::new(42u32, Instant::now());
        assert_eq!(entry.into_connection(), 42);
    }
}
