// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat backend for gateway tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use kbdesk_core::{ChatAnswer, ChatBackend, KbdeskError};

/// A chat backend that always returns the same answer, or always fails.
pub struct MockBackend {
    outcome: Result<ChatAnswer, String>,
    messages: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn answering(answer: ChatAnswer) -> Self {
        Self {
            outcome: Ok(answer),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a provider error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Messages received so far.
    pub async fn messages(&self) -> Vec<String> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn chat(&self, message: &str) -> Result<ChatAnswer, KbdeskError> {
        self.messages.lock().await.push(message.to_string());
        match &self.outcome {
            Ok(answer) => Ok(answer.clone()),
            Err(message) => Err(KbdeskError::Provider {
                message: message.clone(),
                source: None,
            }),
        }
    }
}
