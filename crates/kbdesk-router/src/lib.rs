// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query routing and specialist dispatch for kbdesk.
//!
//! This crate provides:
//! - [`classify`]: ordered keyword rules mapping free text to a [`Category`](kbdesk_core::Category)
//! - [`Dispatcher`]: forwards a query to the specialist bound to a category and
//!   normalizes the reply's citation metadata
//! - [`Orchestrator`]: routing plus dispatch, optionally asking a router agent first

pub mod classifier;
pub mod dispatch;
pub mod instructions;
pub mod orchestrator;
pub mod sources;

pub use classifier::{classify, classify_with_reason, Classification, ROUTING_RULES};
pub use dispatch::{Dispatcher, SpecialistBinding, Specialists};
pub use orchestrator::Orchestrator;
