// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Traits at the seams where external collaborators plug in.
//!
//! All traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod backend;
pub mod credential;
pub mod specialist;

pub use backend::ChatBackend;
pub use credential::{AuthHeader, TokenCredential};
pub use specialist::Specialist;
