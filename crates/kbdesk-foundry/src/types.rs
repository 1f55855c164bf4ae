// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the chat completions API with knowledge-base data sources.

use kbdesk_core::{Citation, ContextDocument, Evidence, GroundingRecord, SpecialistReply};
use serde::{Deserialize, Serialize};

/// Request body for `POST .../chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_sources: Vec<DataSource>,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// A grounding data source attached to a request.
#[derive(Debug, Clone, Serialize)]
pub struct DataSource {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub parameters: SearchParameters,
}

impl DataSource {
    /// Search index `index_name` at `endpoint`, authenticated with the
    /// service's system-assigned managed identity.
    pub fn search(endpoint: &str, index_name: &str) -> Self {
        Self {
            type_: "azure_search",
            parameters: SearchParameters {
                endpoint: endpoint.to_string(),
                index_name: index_name.to_string(),
                authentication: SearchAuthentication {
                    type_: "system_assigned_managed_identity",
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchParameters {
    pub endpoint: String,
    pub index_name: String,
    pub authentication: SearchAuthentication,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchAuthentication {
    #[serde(rename = "type")]
    pub type_: &'static str,
}

/// Response body for a completion.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// Assistant message, with grounding metadata when a data source was used.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub context: Option<MessageContext>,
}

/// Metadata shapes the service may attach under `message.context`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageContext {
    #[serde(default)]
    pub citations: Option<Vec<Citation>>,
    #[serde(default)]
    pub context: Option<Vec<ContextDocument>>,
    #[serde(default)]
    pub grounding_data: Option<Vec<GroundingRecord>>,
}

impl ResponseMessage {
    /// Convert into a [`SpecialistReply`], keeping every non-empty metadata list.
    pub fn into_reply(self) -> SpecialistReply {
        let context = self.context.unwrap_or_default();
        let evidence = [
            context.citations.map(Evidence::Citations),
            context.context.map(Evidence::Context),
            context.grounding_data.map(Evidence::GroundingData),
        ]
        .into_iter()
        .flatten()
        .filter(|e| !is_empty(e))
        .collect();

        SpecialistReply {
            text: self.content.unwrap_or_default(),
            evidence,
        }
    }
}

fn is_empty(evidence: &Evidence) -> bool {
    match evidence {
        Evidence::Citations(items) => items.is_empty(),
        Evidence::Context(items) => items.is_empty(),
        Evidence::GroundingData(items) => items.is_empty(),
    }
}

/// Error body returned on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_empty_data_sources() {
        let request = CompletionRequest {
            messages: vec![ChatMessage::system("route"), ChatMessage::user("hi")],
            data_sources: vec![],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("data_sources").is_none());
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn search_data_source_shape() {
        let source = DataSource::search("https://srch.example.net", "kb1-hr");
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "azure_search",
                "parameters": {
                    "endpoint": "https://srch.example.net",
                    "index_name": "kb1-hr",
                    "authentication": {"type": "system_assigned_managed_identity"}
                }
            })
        );
    }

    #[test]
    fn citations_parse_and_ignore_extra_fields() {
        let body = serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "Twenty days [doc1].",
                    "context": {
                        "intent": "[\"pto days\"]",
                        "citations": [{
                            "content": "Employees accrue...",
                            "title": "PTO_Policy_2024.docx",
                            "url": null,
                            "filepath": "hr-policies/PTO_Policy_2024.docx",
                            "chunk_id": "0"
                        }]
                    }
                }
            }]
        });
        let response: CompletionResponse = serde_json::from_value(body).unwrap();
        let reply = response.choices.into_iter().next().unwrap().message.into_reply();
        assert_eq!(reply.text, "Twenty days [doc1].");
        assert_eq!(reply.evidence.len(), 1);
        match &reply.evidence[0] {
            Evidence::Citations(items) => {
                assert_eq!(items[0].chunk_id.as_deref(), Some("0"));
                assert!(items[0].url.is_none());
            }
            other => panic!("expected citations, got {other:?}"),
        }
    }

    #[test]
    fn missing_context_yields_no_evidence() {
        let message: ResponseMessage =
            serde_json::from_value(serde_json::json!({"content": "hr"})).unwrap();
        let reply = message.into_reply();
        assert_eq!(reply.text, "hr");
        assert!(reply.evidence.is_empty());
    }

    #[test]
    fn empty_lists_are_dropped() {
        let message: ResponseMessage = serde_json::from_value(serde_json::json!({
            "content": "ok",
            "context": {
                "citations": [],
                "grounding_data": [{"title": "Specifications.pdf"}]
            }
        }))
        .unwrap();
        let reply = message.into_reply();
        assert_eq!(reply.evidence.len(), 1);
        assert!(matches!(reply.evidence[0], Evidence::GroundingData(_)));
    }
}
