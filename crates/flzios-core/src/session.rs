//! Request-generation guard against stale responses
//!
//! A fetch superseded by a newer one must not overwrite the newer display
//! state. Each fetch begins with a token from a monotonically increasing
//! counter; a result is only accepted while its token is still the
//! latest.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one fetch generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonically increasing fetch generation counter
///
/// One guard per operation kind (search, detail fetch); beginning a new
/// fetch invalidates every token handed out before it.
#[derive(Debug, Default)]
pub struct GenerationGuard {
    current: AtomicU64,
}

impl GenerationGuard {
    /// Create a guard with no fetch outstanding
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new fetch, invalidating all earlier tokens
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` still belongs to the latest fetch
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }

    /// Pass `value` through only if its fetch is still the latest
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        self.is_current(token).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_current() {
        let guard = GenerationGuard::new();
        let token = guard.begin();
        assert!(guard.is_current(token));
    }

    #[test]
    fn test_newer_fetch_invalidates_older_token() {
        let guard = GenerationGuard::new();
        let stale = guard.begin();
        let fresh = guard.begin();

        assert!(!guard.is_current(stale));
        assert!(guard.is_current(fresh));
    }

    #[test]
    fn test_accept_drops_stale_value() {
        let guard = GenerationGuard::new();
        let stale = guard.begin();
        let fresh = guard.begin();

        assert_eq!(guard.accept(stale, "old results"), None);
        assert_eq!(guard.accept(fresh, "new results"), Some("new results"));
    }

    #[test]
    fn test_guards_are_independent() {
        let search = GenerationGuard::new();
        let details = GenerationGuard::new();

        let search_token = search.begin();
        details.begin();
        details.begin();

        assert!(search.is_current(search_token));
    }
}
