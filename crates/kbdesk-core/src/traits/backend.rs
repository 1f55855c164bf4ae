// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat backend trait consumed by the HTTP gateway and the shell.

use async_trait::async_trait;

use crate::error::KbdeskError;
use crate::types::ChatAnswer;

/// Answers one chat message end to end: route, dispatch, normalize sources.
#[async_trait]
pub trait ChatBackend: Send + Sync + 'static {
    async fn chat(&self, message: &str) -> Result<ChatAnswer, KbdeskError>;
}
