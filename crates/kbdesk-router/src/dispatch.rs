// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dispatch of a categorized query to its bound specialist.

use std::sync::Arc;

use kbdesk_core::{Category, ChatAnswer, KbdeskError, Specialist};
use tracing::{debug, info};

use crate::sources;

/// A specialist together with the knowledge base it is grounded on.
#[derive(Clone)]
pub struct SpecialistBinding {
    pub specialist: Arc<dyn Specialist>,
    pub knowledge_base: String,
}

impl SpecialistBinding {
    pub fn new(specialist: Arc<dyn Specialist>, knowledge_base: impl Into<String>) -> Self {
        Self {
            specialist,
            knowledge_base: knowledge_base.into(),
        }
    }
}

impl std::fmt::Debug for SpecialistBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialistBinding")
            .field("specialist", &self.specialist.name())
            .field("knowledge_base", &self.knowledge_base)
            .finish()
    }
}

/// One binding per category, fixed at construction.
#[derive(Debug, Clone)]
pub struct Specialists {
    pub hr: SpecialistBinding,
    pub marketing: SpecialistBinding,
    pub products: SpecialistBinding,
}

impl Specialists {
    /// The binding for `category`.
    pub fn get(&self, category: Category) -> &SpecialistBinding {
        match category {
            Category::Hr => &self.hr,
            Category::Marketing => &self.marketing,
            Category::Products => &self.products,
        }
    }
}

/// Forwards queries to specialists and normalizes their citation metadata.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    specialists: Specialists,
}

impl Dispatcher {
    pub fn new(specialists: Specialists) -> Self {
        Self { specialists }
    }

    pub fn specialists(&self) -> &Specialists {
        &self.specialists
    }

    /// Ask the specialist bound to `category` and build the answer.
    ///
    /// Errors from the specialist are returned unchanged.
    pub async fn answer(&self, category: Category, query: &str) -> Result<ChatAnswer, KbdeskError> {
        let binding = self.specialists.get(category);
        debug!(
            %category,
            specialist = binding.specialist.name(),
            kb = binding.knowledge_base.as_str(),
            "dispatching query"
        );

        let reply = binding.specialist.run(query).await?;
        let sources = sources::collect_sources(category, &binding.knowledge_base, &reply.evidence);

        info!(
            %category,
            sources = sources.len(),
            answer_len = reply.text.len(),
            "specialist answered"
        );

        Ok(ChatAnswer {
            category,
            text: reply.text,
            sources,
        })
    }
}
