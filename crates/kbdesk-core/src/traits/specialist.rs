// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Specialist trait for hosted, knowledge-base-grounded agents.

use async_trait::async_trait;

use crate::error::KbdeskError;
use crate::types::SpecialistReply;

/// An external conversational agent pre-bound to one set of instructions
/// and, optionally, one knowledge source.
#[async_trait]
pub trait Specialist: Send + Sync + 'static {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Sends a single query and returns the agent's reply.
    async fn run(&self, query: &str) -> Result<SpecialistReply, KbdeskError>;
}
