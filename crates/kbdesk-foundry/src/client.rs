// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the hosted chat completions API.
//!
//! Provides [`FoundryClient`] which handles request construction, per-request
//! authorization and mapping of grounding metadata into [`Evidence`](kbdesk_core::Evidence).

use std::sync::Arc;

use kbdesk_config::model::FoundryConfig;
use kbdesk_core::{KbdeskError, SpecialistReply, TokenCredential};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{
    ApiErrorResponse, ChatMessage, CompletionRequest, CompletionResponse, DataSource,
};

/// HTTP client for one model deployment.
///
/// Requests are sent once. Failures surface as [`KbdeskError::Provider`].
#[derive(Clone)]
pub struct FoundryClient {
    client: reqwest::Client,
    credential: Arc<dyn TokenCredential>,
    completions_url: String,
    api_version: String,
    search_endpoint: String,
}

impl FoundryClient {
    /// Creates a client for the deployment named in `config`.
    pub fn new(
        config: &FoundryConfig,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Self, KbdeskError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| KbdeskError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            credential,
            completions_url: completions_url(&config.project_endpoint, &config.model_deployment),
            api_version: config.api_version.clone(),
            search_endpoint: config.search_endpoint.clone(),
        })
    }

    /// Overrides the project endpoint (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: &str, deployment: &str) -> Self {
        self.completions_url = completions_url(url, deployment);
        self
    }

    /// Builds the request body for `query` under `instructions`.
    ///
    /// With a knowledge base, the search index of that name is attached as
    /// the grounding data source.
    pub fn build_request(
        &self,
        instructions: &str,
        knowledge_base: Option<&str>,
        query: &str,
    ) -> CompletionRequest {
        CompletionRequest {
            messages: vec![ChatMessage::system(instructions), ChatMessage::user(query)],
            data_sources: knowledge_base
                .map(|kb| vec![DataSource::search(&self.search_endpoint, kb)])
                .unwrap_or_default(),
        }
    }

    /// Sends one completion request and returns the first choice.
    pub async fn complete(
        &self,
        instructions: &str,
        knowledge_base: Option<&str>,
        query: &str,
    ) -> Result<SpecialistReply, KbdeskError> {
        let request = self.build_request(instructions, knowledge_base, query);
        let auth = self.credential.authorization().await?;

        let response = self
            .client
            .post(&self.completions_url)
            .query(&[("api-version", self.api_version.as_str())])
            .header(auth.name, auth.value)
            .json(&request)
            .send()
            .await
            .map_err(|e| KbdeskError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, knowledge_base, "completion response received");

        let body = response.text().await.map_err(|e| KbdeskError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "agent service error ({}): {}",
                    api_err.error.code.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("agent service returned {status}: {body}"),
            };
            return Err(KbdeskError::Provider {
                message,
                source: None,
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| KbdeskError::Provider {
                message: format!("failed to parse completion response: {e}"),
                source: Some(Box::new(e)),
            })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| KbdeskError::Provider {
                message: "completion response contained no choices".into(),
                source: None,
            })?;

        Ok(choice.message.into_reply())
    }
}

impl std::fmt::Debug for FoundryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoundryClient")
            .field("completions_url", &self.completions_url)
            .field("api_version", &self.api_version)
            .field("credential", &self.credential.name())
            .finish()
    }
}

fn completions_url(endpoint: &str, deployment: &str) -> String {
    format!(
        "{}/openai/deployments/{deployment}/chat/completions",
        endpoint.trim_end_matches('/')
    )
}
