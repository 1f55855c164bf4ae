// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hosted specialists and the set built from configuration.

use std::sync::Arc;

use async_trait::async_trait;
use kbdesk_config::model::{KbdeskConfig, RoutingMode};
use kbdesk_core::{Category, KbdeskError, Specialist, SpecialistReply, TokenCredential};
use kbdesk_router::{instructions, Dispatcher, Orchestrator, SpecialistBinding, Specialists};

use crate::client::FoundryClient;

/// A hosted agent: fixed instructions, optionally grounded on one knowledge base.
#[derive(Debug, Clone)]
pub struct FoundrySpecialist {
    name: String,
    instructions: &'static str,
    knowledge_base: Option<String>,
    client: Arc<FoundryClient>,
}

impl FoundrySpecialist {
    pub fn new(
        name: impl Into<String>,
        instructions: &'static str,
        knowledge_base: Option<String>,
        client: Arc<FoundryClient>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions,
            knowledge_base,
            client,
        }
    }

    pub fn knowledge_base(&self) -> Option<&str> {
        self.knowledge_base.as_deref()
    }
}

#[async_trait]
impl Specialist for FoundrySpecialist {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, query: &str) -> Result<SpecialistReply, KbdeskError> {
        self.client
            .complete(self.instructions, self.knowledge_base.as_deref(), query)
            .await
    }
}

/// The three knowledge-base specialists plus the router agent.
#[derive(Debug, Clone)]
pub struct SpecialistSet {
    pub hr: Arc<FoundrySpecialist>,
    pub marketing: Arc<FoundrySpecialist>,
    pub products: Arc<FoundrySpecialist>,
    pub router: Arc<FoundrySpecialist>,
}

impl SpecialistSet {
    /// Builds every specialist on one shared client.
    pub fn from_config(
        config: &KbdeskConfig,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Self, KbdeskError> {
        let client = Arc::new(FoundryClient::new(&config.foundry, credential)?);
        Ok(Self::with_client(config, client))
    }

    /// Builds every specialist on an existing client.
    pub fn with_client(config: &KbdeskConfig, client: Arc<FoundryClient>) -> Self {
        let specialist = |category: Category| {
            Arc::new(FoundrySpecialist::new(
                category.agent_id(),
                instructions::for_category(category),
                Some(config.knowledge.for_category(category).to_string()),
                client.clone(),
            ))
        };

        Self {
            hr: specialist(Category::Hr),
            marketing: specialist(Category::Marketing),
            products: specialist(Category::Products),
            router: Arc::new(FoundrySpecialist::new(
                "orchestrator",
                instructions::ROUTER_INSTRUCTIONS,
                None,
                client.clone(),
            )),
        }
    }

    /// Orchestrator for `mode`. The router agent is only wired in agent mode.
    pub fn into_orchestrator(self, mode: RoutingMode) -> Orchestrator {
        let bind = |s: Arc<FoundrySpecialist>| {
            let kb = s.knowledge_base().unwrap_or_default().to_string();
            SpecialistBinding::new(s, kb)
        };
        let dispatcher = Dispatcher::new(Specialists {
            hr: bind(self.hr),
            marketing: bind(self.marketing),
            products: bind(self.products),
        });

        match mode {
            RoutingMode::Keyword => Orchestrator::new(dispatcher),
            RoutingMode::Agent => Orchestrator::with_router_agent(dispatcher, self.router),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::ApiKeyCredential;

    fn set() -> SpecialistSet {
        let mut config = KbdeskConfig::default();
        config.knowledge.products = "kb-products-eu".into();
        SpecialistSet::from_config(&config, Arc::new(ApiKeyCredential::new("k"))).unwrap()
    }

    #[test]
    fn specialists_bind_configured_knowledge_bases() {
        let set = set();
        assert_eq!(set.hr.name(), "hr-agent");
        assert_eq!(set.hr.knowledge_base(), Some("kb1-hr"));
        assert_eq!(set.marketing.knowledge_base(), Some("kb2-marketing"));
        assert_eq!(set.products.knowledge_base(), Some("kb-products-eu"));
    }

    #[test]
    fn router_has_no_knowledge_base() {
        let set = set();
        assert_eq!(set.router.name(), "orchestrator");
        assert!(set.router.knowledge_base().is_none());
    }

    #[test]
    fn orchestrator_keeps_bindings() {
        let orchestrator = set().into_orchestrator(RoutingMode::Keyword);
        let specialists = orchestrator.dispatcher().specialists();
        assert_eq!(specialists.products.knowledge_base, "kb-products-eu");
        assert_eq!(specialists.hr.specialist.name(), "hr-agent");
    }
}
