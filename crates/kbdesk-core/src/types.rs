// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across kbdesk crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Specialist domain a query is routed to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// HR policies, PTO, benefits, employee handbook.
    #[default]
    Hr,
    /// Campaigns, brand guidelines, marketing strategy.
    Marketing,
    /// Product catalog, specifications, pricing.
    Products,
}

impl Category {
    /// Every category, in routing order.
    pub const ALL: [Category; 3] = [Category::Hr, Category::Marketing, Category::Products];

    /// Knowledge base bound to this category unless configuration overrides it.
    pub fn default_knowledge_base(self) -> &'static str {
        match self {
            Category::Hr => "kb1-hr",
            Category::Marketing => "kb2-marketing",
            Category::Products => "kb3-products",
        }
    }

    /// Agent identifier reported to HTTP clients, e.g. `hr-agent`.
    pub fn agent_id(self) -> String {
        format!("{self}-agent")
    }
}

/// A cited document, normalized from whatever shape the hosted agent returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReference {
    /// Category whose specialist produced the answer.
    pub category: Category,
    /// Knowledge base the document belongs to.
    pub kb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
}

impl SourceReference {
    /// Creates a reference with no document fields set.
    pub fn new(category: Category, kb: impl Into<String>) -> Self {
        Self {
            category,
            kb: kb.into(),
            title: None,
            filepath: None,
            url: None,
            chunk_id: None,
        }
    }

    /// Returns true when at least one document field carries a value.
    pub fn has_document_fields(&self) -> bool {
        [&self.title, &self.filepath, &self.url, &self.chunk_id]
            .iter()
            .any(|field| field.is_some())
    }
}

/// A citation entry as returned by the hosted agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub chunk_id: Option<String>,
}

/// A retrieved context document; `source` is the document path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// A grounding record attached to the answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
}

/// The closed set of metadata shapes a specialist reply may carry.
///
/// The dispatcher consults them in the order `Citations`, `Context`,
/// `GroundingData` regardless of the order they appear in a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Citations(Vec<Citation>),
    Context(Vec<ContextDocument>),
    GroundingData(Vec<GroundingRecord>),
}

impl Evidence {
    /// Lookup rank; lower is consulted first.
    pub fn priority(&self) -> u8 {
        match self {
            Evidence::Citations(_) => 0,
            Evidence::Context(_) => 1,
            Evidence::GroundingData(_) => 2,
        }
    }
}

/// What a specialist returned for a single query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialistReply {
    /// Answer text.
    pub text: String,
    /// Citation-like metadata in whatever shapes the provider produced.
    pub evidence: Vec<Evidence>,
}

impl SpecialistReply {
    /// A reply with answer text and no metadata.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            evidence: Vec::new(),
        }
    }
}

/// Final answer for one chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    pub category: Category,
    pub text: String,
    pub sources: Vec<SourceReference>,
}
