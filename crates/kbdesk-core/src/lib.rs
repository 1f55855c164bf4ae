// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for kbdesk.
//!
//! This crate provides the error type, the domain types shared by the router,
//! the gateway and the provider client, and the traits at the seams where the
//! external collaborators plug in.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::KbdeskError;
pub use types::{
    Category, ChatAnswer, Citation, ContextDocument, Evidence, GroundingRecord, SourceReference,
    SpecialistReply,
};

pub use traits::{AuthHeader, ChatBackend, Specialist, TokenCredential};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kbdesk_error_has_all_variants() {
        let _config = KbdeskError::Config("test".into());
        let _provider = KbdeskError::Provider {
            message: "test".into(),
            source: None,
        };
        let _credential = KbdeskError::Credential("test".into());
        let _channel = KbdeskError::Channel {
            message: "test".into(),
            source: None,
        };
        let _internal = KbdeskError::Internal("test".into());
    }

    #[test]
    fn error_display_carries_message() {
        let err = KbdeskError::Provider {
            message: "API returned 503 Service Unavailable".into(),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "provider error: API returned 503 Service Unavailable"
        );
    }

    #[test]
    fn all_traits_are_object_safe() {
        fn _specialist(_: &dyn Specialist) {}
        fn _credential(_: &dyn TokenCredential) {}
        fn _backend(_: &dyn ChatBackend) {}
    }
}
