// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for the hosted, knowledge-base-grounded chat agents.
//!
//! - [`FoundryClient`]: chat completions with an optional search data source
//! - [`FoundrySpecialist`]: a [`Specialist`](kbdesk_core::Specialist) bound to
//!   one prompt and one knowledge base
//! - [`DefaultCredential`]: API key, then Azure CLI, then managed identity
//! - [`FoundryBackend`]: builds a fresh credential, client and orchestrator
//!   for every chat message

pub mod backend;
pub mod client;
pub mod credential;
pub mod specialist;
pub mod types;

pub use backend::{build_orchestrator, FoundryBackend};
pub use client::FoundryClient;
pub use credential::{
    ApiKeyCredential, AzureCliCredential, DefaultCredential, ManagedIdentityCredential,
};
pub use specialist::{FoundrySpecialist, SpecialistSet};
