// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the kbdesk configuration system.

use kbdesk_config::diagnostic::ConfigError;
use kbdesk_config::model::RoutingMode;
use kbdesk_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with every section deserializes.
#[test]
fn full_toml_deserializes() {
    let toml = r#"
[agent]
log_level = "debug"

[server]
host = "127.0.0.1"
port = 9000
static_dir = "frontend/dist"

[foundry]
project_endpoint = "https://example.services.ai.azure.com/api/projects/p1"
search_endpoint = "https://example.search.windows.net"
model_deployment = "gpt-4o"
api_version = "2024-10-21"
api_key = "abc123"

[routing]
mode = "agent"

[knowledge]
hr = "people-kb"
marketing = "brand-kb"
products = "catalog-kb"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.static_dir, "frontend/dist");
    assert_eq!(config.foundry.model_deployment, "gpt-4o");
    assert_eq!(config.foundry.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.routing.mode, RoutingMode::Agent);
    assert_eq!(config.knowledge.products, "catalog-kb");
}

/// An empty file yields the documented defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert_eq!(
        config.foundry.search_endpoint,
        "https://srch-fiq-maf-demo.search.windows.net"
    );
    assert_eq!(
        config.foundry.project_endpoint,
        "https://foundry-fiq-maf-demo.services.ai.azure.com/api/projects/proj1-fiq-maf-demo"
    );
    assert_eq!(config.foundry.model_deployment, "gpt-4.1");
    assert!(config.foundry.api_key.is_none());
    assert_eq!(config.routing.mode, RoutingMode::Keyword);
    assert_eq!(config.knowledge.hr, "kb1-hr");
}

/// Unknown keys are rejected with a suggestion.
#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
[foundry]
search_endpiont = "https://example.search.windows.net"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "search_endpiont");
            assert_eq!(suggestion.as_deref(), Some("search_endpoint"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Wrong value types are reported as InvalidType.
#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[server]
port = "eight thousand"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject string port");
    assert!(
        matches!(&errors[0], ConfigError::InvalidType { key, .. } if key.contains("port")),
        "got {errors:?}"
    );
}

/// Unknown routing modes are rejected.
#[test]
fn unknown_routing_mode_rejected() {
    let toml = r#"
[routing]
mode = "llm"
"#;
    assert!(load_and_validate_str(toml).is_err());
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_through_load() {
    let toml = r#"
[foundry]
project_endpoint = "ftp://example.com"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject non-http endpoint");
    assert!(matches!(&errors[0], ConfigError::Validation { message } if message.contains("project_endpoint")));
}

/// A dumped default config is a valid config file.
#[test]
fn serialized_defaults_load_back() {
    let dumped = toml::to_string(&kbdesk_config::KbdeskConfig::default()).unwrap();
    assert!(dumped.contains("[knowledge]"));
    assert!(!dumped.contains("api_key"));

    let config = load_and_validate_str(&dumped).expect("dumped defaults should validate");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.knowledge.products, "kb3-products");
    assert_eq!(config.routing.mode, RoutingMode::Keyword);
}
