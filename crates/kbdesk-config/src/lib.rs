// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for kbdesk.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides (including the
//! `AZURE_*` names the hosted agent tooling uses), and miette diagnostics with
//! typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use kbdesk_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("model deployment: {}", config.foundry.model_deployment);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_str};
pub use model::KbdeskConfig;

/// Load configuration from the XDG hierarchy and environment, then validate it.
///
/// Figment extraction errors are converted into miette diagnostics that point
/// at the offending TOML key where possible.
pub fn load_and_validate() -> Result<KbdeskConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from an inline TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<KbdeskConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = [("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read every config file that exists so diagnostics can show source spans.
fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_paths()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some((path.display().to_string(), content))
        })
        .collect()
}
