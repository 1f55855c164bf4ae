// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for kbdesk integration tests.
//!
//! Provides mock collaborators for fast, deterministic tests without calls to
//! the hosted agent service.
//!
//! # Components
//!
//! - [`MockSpecialist`] - Specialist with pre-configured replies or a fixed failure
//! - [`MockBackend`] - Chat backend with a fixed answer or a fixed failure

pub mod mock_backend;
pub mod mock_specialist;

pub use mock_backend::MockBackend;
pub use mock_specialist::MockSpecialist;
