//! Liveness token for async completions
//!
//! A view hands a clone of its token to every background fetch. Once the view
//! is torn down the token is revoked, and completions that arrive later must
//! be dropped instead of published.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag saying whether the owner of a fetch is still alive.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    alive: Arc<AtomicBool>,
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}

impl LivenessToken {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the owner as gone. Affects every clone.
    pub fn revoke(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoke_is_seen_by_clones() {
        let token = LivenessToken::new();
        let handed_out = token.clone();
        assert!(handed_out.is_alive());
        token.revoke();
        assert!(!handed_out.is_alive());
    }
}
