// src/services/mod.rs

pub mod reasoning;

pub use reasoning::{ReasoningClient, ReasoningError};

/// Request-generation guard. Reasoning lookups are fire-and-forget from
/// the renderer's perspective, so a slow response can arrive after the
/// user has already selected something else; such a response must be
/// discarded, never applied over newer state.
#[derive(Debug, Default)]
pub struct QueryGuard {
    generation: u64,
}

impl QueryGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a new lookup and returns its token. Any token
    /// from an earlier call is stale from this point on.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a completed lookup with this token may still be applied.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let mut guard = QueryGuard::new();
        let t1 = guard.begin();
        assert!(guard.is_current(t1));
    }

    #[test]
    fn test_superseded_token_is_stale() {
        let mut guard = QueryGuard::new();
        let t1 = guard.begin();
        let t2 = guard.begin();
        assert!(!guard.is_current(t1));
        assert!(guard.is_current(t2));
    }

    #[test]
    fn test_fresh_guard_rejects_everything() {
        let guard = QueryGuard::new();
        assert!(!guard.is_current(1));
    }
}
