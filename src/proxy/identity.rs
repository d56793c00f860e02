//! Process-unique proxy identities.
//!
//! Every [`ProxyState`](super::ProxyState) draws its [`ProxyHash`] from a
//! single process-wide counter. The counter starts at 1 when the process
//! starts, is only ever incremented and is never reset, so a hash is never
//! handed out twice, even when proxies are constructed concurrently.
//!
//! The hash deliberately does not come from the mocked type's own hashing:
//! that call may itself be intercepted, and identity must not depend on it.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_PROXY_HASH: AtomicU64 = AtomicU64::new(1);

/// Unique identity of one mocked instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProxyHash(u64);

impl ProxyHash {
    /// Draws the next identity from the process-wide counter.
    pub(crate) fn next() -> Self {
        ProxyHash(NEXT_PROXY_HASH.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identity value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProxyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_next_is_monotonic() {
        let a = ProxyHash::next();
        let b = ProxyHash::next();
        assert!(b > a);
        assert_ne!(a.value(), 0);
    }

    #[test]
    fn test_unique_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| (0..500).map(|_| ProxyHash::next()).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for hash in handle.join().unwrap() {
                assert!(seen.insert(hash), "duplicate proxy hash {hash}");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }

    #[test]
    fn test_display() {
        let hash = ProxyHash(42);
        assert_eq!(hash.to_string(), "#42");
    }
}
