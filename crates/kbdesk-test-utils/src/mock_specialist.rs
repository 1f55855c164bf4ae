// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock specialist for deterministic testing.
//!
//! Replies are popped from a FIFO queue. When the queue is empty, a text-only
//! reply naming the specialist is returned. Every query is recorded.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use kbdesk_core::{KbdeskError, Specialist, SpecialistReply};

/// A specialist that returns pre-configured replies.
pub struct MockSpecialist {
    name: String,
    replies: Mutex<VecDeque<SpecialistReply>>,
    failure: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl MockSpecialist {
    /// A specialist with an empty reply queue.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            replies: Mutex::new(VecDeque::new()),
            failure: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A specialist pre-loaded with `replies`.
    pub fn with_replies(name: impl Into<String>, replies: Vec<SpecialistReply>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            ..Self::new(name)
        }
    }

    /// A specialist whose every call fails with a provider error carrying `message`.
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new(name)
        }
    }

    /// Queue another reply.
    pub async fn add_reply(&self, reply: SpecialistReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Queries received so far, oldest first.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl Specialist for MockSpecialist {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, query: &str) -> Result<SpecialistReply, KbdeskError> {
        self.queries.lock().await.push(query.to_string());

        if let Some(message) = &self.failure {
            return Err(KbdeskError::Provider {
                message: message.clone(),
                source: None,
            });
        }

        Ok(self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| SpecialistReply::text(format!("{} mock response", self.name))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_order_then_default() {
        let mock = MockSpecialist::with_replies(
            "hr",
            vec![SpecialistReply::text("first"), SpecialistReply::text("second")],
        );
        assert_eq!(mock.run("a").await.unwrap().text, "first");
        assert_eq!(mock.run("b").await.unwrap().text, "second");
        assert_eq!(mock.run("c").await.unwrap().text, "hr mock response");
        assert_eq!(mock.queries().await, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn failing_specialist_errors() {
        let mock = MockSpecialist::failing("products", "upstream exploded");
        let err = mock.run("q").await.unwrap_err();
        assert!(err.to_string().contains("upstream exploded"));
        assert_eq!(mock.queries().await, vec!["q"]);
    }
}
