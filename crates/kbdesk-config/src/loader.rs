// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./kbdesk.toml` > `~/.config/kbdesk/kbdesk.toml` > `/etc/kbdesk/kbdesk.toml`
//! with environment variable overrides via the `KBDESK_` prefix and the
//! `AZURE_*` names used by the hosted agent tooling.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::KbdeskConfig;

const SYSTEM_CONFIG: &str = "/etc/kbdesk/kbdesk.toml";
const LOCAL_CONFIG: &str = "kbdesk.toml";

/// Config files in merge order (earlier is overridden by later).
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("kbdesk").join(LOCAL_CONFIG));
    }
    paths.push(
        std::env::current_dir()
            .map(|d| d.join(LOCAL_CONFIG))
            .unwrap_or_else(|_| PathBuf::from(LOCAL_CONFIG)),
    );
    paths
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/kbdesk/kbdesk.toml`
/// 3. `~/.config/kbdesk/kbdesk.toml`
/// 4. `./kbdesk.toml`
/// 5. `KBDESK_*` environment variables
/// 6. `AZURE_SEARCH_ENDPOINT`, `AZURE_AI_PROJECT_ENDPOINT`,
///    `AZURE_OPENAI_DEPLOYMENT`, `AZURE_OPENAI_API_KEY`
pub fn load_config() -> Result<KbdeskConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from an inline TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<KbdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KbdeskConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    config_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(KbdeskConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
        .merge(azure_env_provider())
}

/// `KBDESK_*` variables, mapped section-by-section with `Env::map()`.
///
/// `Env::split("_")` would turn `KBDESK_FOUNDRY_MODEL_DEPLOYMENT` into
/// `foundry.model.deployment`; only the first underscore separates the section.
/// The closure sees the stripped key in its original case.
fn env_provider() -> Env {
    Env::prefixed("KBDESK_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("agent_", "agent.", 1)
            .replacen("server_", "server.", 1)
            .replacen("foundry_", "foundry.", 1)
            .replacen("routing_", "routing.", 1)
            .replacen("knowledge_", "knowledge.", 1);
        mapped.into()
    })
}

/// The unprefixed variable names the hosted agent tooling documents.
fn azure_env_provider() -> Env {
    Env::raw().filter_map(|key| {
        let mapped = match key.as_str().to_ascii_lowercase().as_str() {
            "azure_search_endpoint" => "foundry.search_endpoint",
            "azure_ai_project_endpoint" => "foundry.project_endpoint",
            "azure_openai_deployment" => "foundry.model_deployment",
            "azure_openai_api_key" => "foundry.api_key",
            _ => return None,
        };
        Some(mapped.into())
    })
}
