// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Production chat backend.

use std::sync::Arc;

use async_trait::async_trait;
use kbdesk_config::model::KbdeskConfig;
use kbdesk_core::{ChatAnswer, ChatBackend, KbdeskError, TokenCredential};
use kbdesk_router::Orchestrator;
use tracing::debug;

use crate::credential::DefaultCredential;
use crate::specialist::SpecialistSet;

/// Orchestrator over hosted specialists, wired per the routing mode in `config`.
pub fn build_orchestrator(
    config: &KbdeskConfig,
    credential: Arc<dyn TokenCredential>,
) -> Result<Orchestrator, KbdeskError> {
    Ok(SpecialistSet::from_config(config, credential)?.into_orchestrator(config.routing.mode))
}

/// Answers each message with a freshly built credential, client and
/// orchestrator. Nothing is shared between messages except the config.
#[derive(Debug, Clone)]
pub struct FoundryBackend {
    config: Arc<KbdeskConfig>,
}

impl FoundryBackend {
    pub fn new(config: KbdeskConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[async_trait]
impl ChatBackend for FoundryBackend {
    async fn chat(&self, message: &str) -> Result<ChatAnswer, KbdeskError> {
        let credential = Arc::new(DefaultCredential::from_config(&self.config.foundry)?);
        debug!(sources = ?credential.source_names(), "credential chain built");
        let orchestrator = build_orchestrator(&self.config, credential)?;
        orchestrator.run_single_query(message).await
    }
}
