//! Admin gate for content updates
//!
//! Authentication itself lives outside this crate; handlers only ask whether
//! the caller is an administrator.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

pub trait AdminGate: Send + Sync {
    fn is_admin(&self, headers: &HeaderMap) -> bool;
}

/// Accepts `Authorization: Bearer <token>` matching the configured token.
/// Without a configured token nobody is an administrator.
#[derive(Debug, Clone, Default)]
pub struct BearerTokenGate {
    token: Option<String>,
}

impl BearerTokenGate {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

impl AdminGate for BearerTokenGate {
    fn is_admin(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = &self.token else {
            return false;
        };

        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .is_some_and(|presented| presented.trim() == expected)
    }
}
