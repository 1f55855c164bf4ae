// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential sources for the agent service.
//!
//! [`DefaultCredential`] chains the concrete sources: a static API key when
//! configured, then the Azure CLI login, then the managed identity endpoint.

use std::time::Duration;

use async_trait::async_trait;
use kbdesk_config::model::FoundryConfig;
use kbdesk_core::{AuthHeader, KbdeskError, TokenCredential};
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

/// Instance metadata token endpoint for managed identities.
pub const IMDS_TOKEN_ENDPOINT: &str = "http://169.254.169.254/metadata/identity/oauth2/token";

const IMDS_API_VERSION: &str = "2018-02-01";

/// Static API key sent as the `api-key` header.
pub struct ApiKeyCredential {
    key: String,
}

impl ApiKeyCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait]
impl TokenCredential for ApiKeyCredential {
    fn name(&self) -> &str {
        "api-key"
    }

    async fn authorization(&self) -> Result<AuthHeader, KbdeskError> {
        if self.key.trim().is_empty() {
            return Err(KbdeskError::Credential("API key is empty".into()));
        }
        Ok(AuthHeader::api_key(self.key.clone()))
    }
}

/// Bearer token from the signed-in Azure CLI user.
pub struct AzureCliCredential {
    program: String,
    resource: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CliToken {
    access_token: String,
}

impl AzureCliCredential {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            program: "az".into(),
            resource: resource.into(),
        }
    }

    /// Use a different executable in place of `az`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl TokenCredential for AzureCliCredential {
    fn name(&self) -> &str {
        "azure-cli"
    }

    async fn authorization(&self) -> Result<AuthHeader, KbdeskError> {
        let output = Command::new(&self.program)
            .args([
                "account",
                "get-access-token",
                "--resource",
                self.resource.as_str(),
                "--output",
                "json",
            ])
            .output()
            .await
            .map_err(|e| KbdeskError::Credential(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KbdeskError::Credential(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let token: CliToken = serde_json::from_slice(&output.stdout).map_err(|e| {
            KbdeskError::Credential(format!("unexpected {} output: {e}", self.program))
        })?;
        Ok(AuthHeader::bearer(&token.access_token))
    }
}

/// Bearer token from the instance metadata service.
pub struct ManagedIdentityCredential {
    client: reqwest::Client,
    endpoint: String,
    resource: String,
}

#[derive(Deserialize)]
struct ImdsToken {
    access_token: String,
}

impl ManagedIdentityCredential {
    pub fn new(resource: impl Into<String>) -> Result<Self, KbdeskError> {
        // Off-cloud hosts never answer on the link-local address.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| KbdeskError::Credential(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: IMDS_TOKEN_ENDPOINT.to_string(),
            resource: resource.into(),
        })
    }

    /// Overrides the token endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TokenCredential for ManagedIdentityCredential {
    fn name(&self) -> &str {
        "managed-identity"
    }

    async fn authorization(&self) -> Result<AuthHeader, KbdeskError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("api-version", IMDS_API_VERSION),
                ("resource", self.resource.as_str()),
            ])
            .header("Metadata", "true")
            .send()
            .await
            .map_err(|e| KbdeskError::Credential(format!("token endpoint unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KbdeskError::Credential(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: ImdsToken = response
            .json()
            .await
            .map_err(|e| KbdeskError::Credential(format!("unexpected token response: {e}")))?;
        Ok(AuthHeader::bearer(&token.access_token))
    }
}

/// Tries each source in order and returns the first header obtained.
pub struct DefaultCredential {
    sources: Vec<Box<dyn TokenCredential>>,
}

impl DefaultCredential {
    /// Chain built from explicit sources.
    pub fn new(sources: Vec<Box<dyn TokenCredential>>) -> Self {
        Self { sources }
    }

    /// API key (when configured), Azure CLI, managed identity.
    pub fn from_config(config: &FoundryConfig) -> Result<Self, KbdeskError> {
        let mut sources: Vec<Box<dyn TokenCredential>> = Vec::new();
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            sources.push(Box::new(ApiKeyCredential::new(key)));
        }
        sources.push(Box::new(AzureCliCredential::new(&config.token_resource)));
        sources.push(Box::new(ManagedIdentityCredential::new(
            &config.token_resource,
        )?));
        Ok(Self { sources })
    }

    /// Names of the chained sources, in order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

#[async_trait]
impl TokenCredential for DefaultCredential {
    fn name(&self) -> &str {
        "default"
    }

    async fn authorization(&self) -> Result<AuthHeader, KbdeskError> {
        let mut failures = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            match source.authorization().await {
                Ok(header) => {
                    debug!(source = source.name(), "credential acquired");
                    return Ok(header);
                }
                Err(e) => {
                    debug!(source = source.name(), error = %e, "credential source failed");
                    failures.push(format!("{}: {e}", source.name()));
                }
            }
        }
        Err(KbdeskError::Credential(format!(
            "no credential source succeeded ({})",
            failures.join("; ")
        )))
    }
}
