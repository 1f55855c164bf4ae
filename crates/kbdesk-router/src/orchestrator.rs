// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing plus dispatch for a single query.
//!
//! Routing order: router agent (if configured) > keyword rules on the query.
//! Either way the final category comes from [`classify`], so the router
//! agent can only ever pick one of the known categories.

use std::sync::Arc;

use async_trait::async_trait;
use kbdesk_core::{Category, ChatAnswer, ChatBackend, KbdeskError, Specialist};
use tracing::info;

use crate::classifier::classify_with_reason;
use crate::dispatch::Dispatcher;

/// Routes queries to specialists and returns normalized answers.
pub struct Orchestrator {
    router_agent: Option<Arc<dyn Specialist>>,
    dispatcher: Dispatcher,
}

impl Orchestrator {
    /// Keyword routing on the query text.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            router_agent: None,
            dispatcher,
        }
    }

    /// Ask `router_agent` for a specialist name first, then normalize its
    /// reply with the keyword rules.
    pub fn with_router_agent(dispatcher: Dispatcher, router_agent: Arc<dyn Specialist>) -> Self {
        Self {
            router_agent: Some(router_agent),
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Decide which category handles `query`.
    pub async fn route(&self, query: &str) -> Result<Category, KbdeskError> {
        let routed_text = match &self.router_agent {
            Some(agent) => agent.run(query).await?.text,
            None => query.to_string(),
        };

        let classification = classify_with_reason(routed_text.trim());
        info!(
            category = %classification.category,
            matched = classification.matched.unwrap_or("<default>"),
            via_agent = self.router_agent.is_some(),
            "query routed"
        );
        Ok(classification.category)
    }

    /// Route `query`, ask the chosen specialist, return `(category, text, sources)`.
    pub async fn run_single_query(&self, query: &str) -> Result<ChatAnswer, KbdeskError> {
        let category = self.route(query).await?;
        self.dispatcher.answer(category, query).await
    }
}

#[async_trait]
impl ChatBackend for Orchestrator {
    async fn chat(&self, message: &str) -> Result<ChatAnswer, KbdeskError> {
        self.run_single_query(message).await
    }
}
