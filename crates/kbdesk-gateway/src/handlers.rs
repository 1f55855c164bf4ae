// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.
//!
//! Handles GET /health, POST /chat, GET /agents.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use kbdesk_core::{Category, SourceReference};

use crate::server::GatewayState;

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User query.
    pub message: String,
    /// Accepted for client compatibility. Not used for routing.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Accepted for client compatibility. Not used for routing.
    #[serde(default)]
    pub agent: Option<String>,
}

/// Response body for POST /chat.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Answer text from the specialist.
    pub message: String,
    /// Specialist that answered, e.g. `products-agent`.
    pub agent: String,
    /// Documents backing the answer.
    pub sources: Vec<SourceReference>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// One entry of GET /agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb: Option<String>,
}

/// Response body for GET /agents.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentListResponse {
    pub agents: Vec<AgentInfo>,
}

/// The orchestrator followed by one entry per category, with `kb` naming
/// the knowledge base each specialist is bound to.
pub fn agent_catalog(knowledge_base: impl Fn(Category) -> String) -> Vec<AgentInfo> {
    let mut agents = vec![AgentInfo {
        id: "orchestrator".into(),
        name: "Orchestrator".into(),
        description: "Routes requests to specialized agents based on query content".into(),
        color: "#6366F1".into(),
        kb: None,
    }];

    agents.extend(Category::ALL.into_iter().map(|category| {
        let (name, description, color) = match category {
            Category::Hr => (
                "HR Agent",
                "Handles HR policies, PTO, benefits, and employee handbook queries",
                "#8B5CF6",
            ),
            Category::Marketing => (
                "Marketing Agent",
                "Handles marketing campaigns, brand, and competitor analysis",
                "#EC4899",
            ),
            Category::Products => (
                "Products Agent",
                "Handles product catalog, features, and specifications",
                "#10B981",
            ),
        };
        AgentInfo {
            id: category.to_string(),
            name: name.into(),
            description: description.into(),
            color: color.into(),
            kb: Some(knowledge_base(category)),
        }
    }));

    agents
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /chat
///
/// Runs the query through the chat backend. Any failure becomes a 500 with
/// the error text in `detail`.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Response {
    let request_id = uuid::Uuid::new_v4();
    debug!(%request_id, message_len = body.message.len(), "chat request received");

    match state.backend.chat(&body.message).await {
        Ok(answer) => {
            info!(
                %request_id,
                category = %answer.category,
                sources = answer.sources.len(),
                "chat answered"
            );
            Json(ChatResponse {
                message: answer.text,
                agent: answer.category.agent_id(),
                sources: answer.sources,
            })
            .into_response()
        }
        Err(e) => {
            error!(%request_id, error = %e, "chat failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /agents
pub async fn get_agents(State(state): State<GatewayState>) -> Json<AgentListResponse> {
    Json(AgentListResponse {
        agents: state.agents.as_ref().clone(),
    })
}
