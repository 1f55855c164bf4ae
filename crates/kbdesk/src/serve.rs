// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `kbdesk serve` command implementation.
//!
//! Wires the hosted-agent chat backend into the HTTP gateway and serves until
//! the process is stopped.

use std::path::PathBuf;
use std::sync::Arc;

use kbdesk_config::model::KbdeskConfig;
use kbdesk_core::KbdeskError;
use kbdesk_foundry::FoundryBackend;
use kbdesk_gateway::{agent_catalog, start_server, GatewayState, ServerConfig};
use tracing::info;

/// Runs the `kbdesk serve` command.
pub async fn run_serve(config: KbdeskConfig) -> Result<(), KbdeskError> {
    init_tracing(&config.agent.log_level);

    info!(
        project_endpoint = %config.foundry.project_endpoint,
        search_endpoint = %config.foundry.search_endpoint,
        deployment = %config.foundry.model_deployment,
        routing = ?config.routing.mode,
        "starting kbdesk serve"
    );

    let server_config = server_config(&config);
    let knowledge = config.knowledge.clone();
    let agents = agent_catalog(|category| knowledge.for_category(category).to_string());
    let state = GatewayState::new(Arc::new(FoundryBackend::new(config)), agents);

    start_server(&server_config, state).await?;

    info!("kbdesk serve shutdown complete");
    Ok(())
}

fn server_config(config: &KbdeskConfig) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        static_dir: Some(PathBuf::from(&config.server.static_dir)),
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` overrides `log_level`.
pub(crate) fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kbdesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_from_defaults() {
        let config = KbdeskConfig::default();
        let server = server_config(&config);
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8000);
        assert_eq!(server.static_dir, Some(PathBuf::from("static")));
    }
}
