// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential trait for authenticating against the hosted agent service.

use async_trait::async_trait;

use crate::error::KbdeskError;

/// A ready-to-send authorization header.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    /// Header name, e.g. `api-key` or `authorization`.
    pub name: &'static str,
    /// Header value.
    pub value: String,
}

impl AuthHeader {
    /// `Authorization: Bearer <token>`.
    pub fn bearer(token: &str) -> Self {
        Self {
            name: "authorization",
            value: format!("Bearer {token}"),
        }
    }

    /// `api-key: <key>`.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            name: "api-key",
            value: key.into(),
        }
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeader")
            .field("name", &self.name)
            .field("value", &"[redacted]")
            .finish()
    }
}

/// Source of authorization headers for outbound provider calls.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    /// Short name of the credential source, used in logs and errors.
    fn name(&self) -> &str;

    /// Produces an authorization header for the next request.
    async fn authorization(&self) -> Result<AuthHeader, KbdeskError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header() {
        let header = AuthHeader::bearer("tok");
        assert_eq!(header.name, "authorization");
        assert_eq!(header.value, "Bearer tok");
    }

    #[test]
    fn debug_redacts_value() {
        let header = AuthHeader::api_key("secret-key");
        let debug = format!("{header:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("[redacted]"));
    }
}
