// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for kbdesk.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use kbdesk_core::Category;
use serde::{Deserialize, Serialize};

/// Top-level kbdesk configuration.
///
/// Read once at startup and passed explicitly to everything that needs it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KbdeskConfig {
    /// Process-level settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Hosted agent service and search endpoints.
    #[serde(default)]
    pub foundry: FoundryConfig,

    /// Query routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Knowledge base bound to each category.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// Process-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the frontend build. Served only if it exists.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// Hosted agent service configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FoundryConfig {
    /// AI project endpoint (`AZURE_AI_PROJECT_ENDPOINT`).
    #[serde(default = "default_project_endpoint")]
    pub project_endpoint: String,

    /// Search service endpoint backing the knowledge bases (`AZURE_SEARCH_ENDPOINT`).
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    /// Model deployment name (`AZURE_OPENAI_DEPLOYMENT`).
    #[serde(default = "default_model_deployment")]
    pub model_deployment: String,

    /// REST API version query parameter.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Static API key. `None` falls back to Azure CLI, then managed identity.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Resource the bearer token is requested for.
    #[serde(default = "default_token_resource")]
    pub token_resource: String,
}

impl Default for FoundryConfig {
    fn default() -> Self {
        Self {
            project_endpoint: default_project_endpoint(),
            search_endpoint: default_search_endpoint(),
            model_deployment: default_model_deployment(),
            api_version: default_api_version(),
            api_key: None,
            token_resource: default_token_resource(),
        }
    }
}

impl std::fmt::Debug for FoundryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoundryConfig")
            .field("project_endpoint", &self.project_endpoint)
            .field("search_endpoint", &self.search_endpoint)
            .field("model_deployment", &self.model_deployment)
            .field("api_version", &self.api_version)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("token_resource", &self.token_resource)
            .finish()
    }
}

fn default_project_endpoint() -> String {
    "https://foundry-fiq-maf-demo.services.ai.azure.com/api/projects/proj1-fiq-maf-demo"
        .to_string()
}

fn default_search_endpoint() -> String {
    "https://srch-fiq-maf-demo.search.windows.net".to_string()
}

fn default_model_deployment() -> String {
    "gpt-4.1".to_string()
}

fn default_api_version() -> String {
    "2024-10-21".to_string()
}

fn default_token_resource() -> String {
    "https://cognitiveservices.azure.com".to_string()
}

/// How a query's category is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// Keyword rules applied to the query text.
    #[default]
    Keyword,
    /// A router agent names the specialist; keyword rules normalize its reply.
    Agent,
}

/// Query routing configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    #[serde(default)]
    pub mode: RoutingMode,
}

/// Knowledge base (search index) name bound to each category.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    #[serde(default = "default_hr_kb")]
    pub hr: String,
    #[serde(default = "default_marketing_kb")]
    pub marketing: String,
    #[serde(default = "default_products_kb")]
    pub products: String,
}

impl KnowledgeConfig {
    /// Knowledge base bound to `category`.
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Hr => &self.hr,
            Category::Marketing => &self.marketing,
            Category::Products => &self.products,
        }
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            hr: default_hr_kb(),
            marketing: default_marketing_kb(),
            products: default_products_kb(),
        }
    }
}

fn default_hr_kb() -> String {
    Category::Hr.default_knowledge_base().to_string()
}

fn default_marketing_kb() -> String {
    Category::Marketing.default_knowledge_base().to_string()
}

fn default_products_kb() -> String {
    Category::Products.default_knowledge_base().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hosted_demo() {
        let config = KbdeskConfig::default();
        assert_eq!(config.foundry.model_deployment, "gpt-4.1");
        assert!(config.foundry.search_endpoint.starts_with("https://"));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.routing.mode, RoutingMode::Keyword);
    }

    #[test]
    fn knowledge_lookup_is_one_to_one() {
        let knowledge = KnowledgeConfig::default();
        assert_eq!(knowledge.for_category(Category::Hr), "kb1-hr");
        assert_eq!(knowledge.for_category(Category::Marketing), "kb2-marketing");
        assert_eq!(knowledge.for_category(Category::Products), "kb3-products");
    }

    #[test]
    fn foundry_debug_redacts_api_key() {
        let config = FoundryConfig {
            api_key: Some("very-secret".into()),
            ..FoundryConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn routing_mode_parses_lowercase() {
        let routing: RoutingConfig = serde_json::from_str(r#"{"mode": "agent"}"#).unwrap();
        assert_eq!(routing.mode, RoutingMode::Agent);
    }
}
