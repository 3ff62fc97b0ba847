//! Admin session lifecycle.
//!
//! The backend issues a bearer token valid for 24 hours. The session is an
//! explicit object: components that need it receive it as a prop, the expiry
//! is checked whenever the stored value is loaded, and logout clears the slot.

use serde::{Deserialize, Serialize};

/// localStorage key holding the serialized session
pub const STORAGE_KEY: &str = "femina-admin-session";

/// Token lifetime, matching the backend's 24-hour grant
pub const SESSION_TTL_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// An authenticated admin session.
///
/// `issued_at_ms` is a JS epoch timestamp taken when the token was granted.
/// A default (empty) session is never live, so a missing or corrupt storage
/// entry degrades to logged-out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub issued_at_ms: f64,
}

impl AdminSession {
    pub fn issue(token: String, now_ms: f64) -> Self {
        Self {
            token,
            issued_at_ms: now_ms,
        }
    }

    /// Whether the token can still be attached to privileged requests.
    pub fn is_live(&self, now_ms: f64) -> bool {
        !self.token.is_empty() && now_ms - self.issued_at_ms < SESSION_TTL_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_live() {
        let session = AdminSession::issue("tok".to_string(), 1_000.0);
        assert!(session.is_live(1_000.0));
        assert!(session.is_live(1_000.0 + SESSION_TTL_MS - 1.0));
    }

    #[test]
    fn session_expires_after_ttl() {
        let session = AdminSession::issue("tok".to_string(), 1_000.0);
        assert!(!session.is_live(1_000.0 + SESSION_TTL_MS));
        assert!(!session.is_live(1_000.0 + SESSION_TTL_MS + 1.0));
    }

    #[test]
    fn empty_token_is_never_live() {
        let session = AdminSession::default();
        assert!(!session.is_live(0.0));

        let issued_empty = AdminSession::issue(String::new(), 1_000.0);
        assert!(!issued_empty.is_live(1_000.0));
    }
}
