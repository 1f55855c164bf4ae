// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end routing against a mocked agent service.

use std::sync::Arc;

use kbdesk_config::model::{KbdeskConfig, RoutingMode};
use kbdesk_core::{Category, ChatBackend};
use kbdesk_foundry::{build_orchestrator, ApiKeyCredential, FoundryBackend};
use kbdesk_router::sources::default_sources;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/openai/deployments/gpt-4.1/chat/completions";

fn config_for(server: &MockServer, mode: RoutingMode) -> KbdeskConfig {
    let mut config = KbdeskConfig::default();
    config.foundry.project_endpoint = server.uri();
    config.foundry.api_key = Some("integration-key".into());
    config.routing.mode = mode;
    config
}

fn text_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": text}}]
    }))
}

#[tokio::test]
async fn keyword_mode_queries_only_the_matching_knowledge_base() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_string_contains("kb2-marketing"))
        .respond_with(text_reply("Our palette is teal and coral."))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, RoutingMode::Keyword);
    let orchestrator =
        build_orchestrator(&config, Arc::new(ApiKeyCredential::new("integration-key"))).unwrap();

    let answer = orchestrator
        .run_single_query("What are our brand colors?")
        .await
        .unwrap();

    assert_eq!(answer.category, Category::Marketing);
    assert_eq!(answer.text, "Our palette is teal and coral.");
    assert_eq!(
        answer.sources,
        default_sources(Category::Marketing, "kb2-marketing")
    );
}

#[tokio::test]
async fn agent_mode_asks_router_then_specialist() {
    let server = MockServer::start().await;
    // Mounted first so it wins over the catch-all router mock.
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_string_contains("kb3-products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": {
                    "content": "The mug holds 16 oz.",
                    "context": {"citations": [{"title": "Specifications.pdf", "filepath": "products/Specifications.pdf", "chunk_id": "2"}]}
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(text_reply("products"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, RoutingMode::Agent);
    let orchestrator =
        build_orchestrator(&config, Arc::new(ApiKeyCredential::new("integration-key"))).unwrap();

    let answer = orchestrator
        .run_single_query("How big is the travel mug?")
        .await
        .unwrap();

    assert_eq!(answer.category, Category::Products);
    assert_eq!(answer.sources.len(), 1);
    assert_eq!(answer.sources[0].kb, "kb3-products");
    assert_eq!(answer.sources[0].chunk_id.as_deref(), Some("2"));
}

#[tokio::test]
async fn backend_uses_configured_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("api-key", "integration-key"))
        .respond_with(text_reply("Twenty days per year."))
        .expect(1)
        .mount(&server)
        .await;

    let backend = FoundryBackend::new(config_for(&server, RoutingMode::Keyword));
    let answer = backend.chat("How many PTO days do I get?").await.unwrap();

    assert_eq!(answer.category, Category::Hr);
    assert_eq!(answer.text, "Twenty days per year.");
}

#[tokio::test]
async fn backend_surfaces_service_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": "PermissionDenied", "message": "Principal does not have access."}
        })))
        .mount(&server)
        .await;

    let backend = FoundryBackend::new(config_for(&server, RoutingMode::Keyword));
    let err = backend.chat("product catalog").await.unwrap_err();
    assert!(err.to_string().contains("Principal does not have access."));
}
