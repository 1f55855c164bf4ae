// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde attributes cannot express: endpoint URLs,
//! bind host syntax, knowledge base uniqueness.

use std::collections::HashSet;

use kbdesk_core::Category;

use crate::diagnostic::ConfigError;
use crate::model::KbdeskConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &KbdeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    check_endpoint(
        "foundry.project_endpoint",
        &config.foundry.project_endpoint,
        &mut errors,
    );
    check_endpoint(
        "foundry.search_endpoint",
        &config.foundry.search_endpoint,
        &mut errors,
    );

    if config.foundry.model_deployment.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "foundry.model_deployment must not be empty".to_string(),
        });
    }

    if config.foundry.api_version.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "foundry.api_version must not be empty".to_string(),
        });
    }

    // Each category needs its own knowledge base.
    let mut seen = HashSet::new();
    for category in Category::ALL {
        let kb = config.knowledge.for_category(category);
        if kb.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("knowledge.{category} must not be empty"),
            });
        } else if !seen.insert(kb) {
            errors.push(ConfigError::Validation {
                message: format!("knowledge.{category} reuses knowledge base `{kb}`"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_endpoint(key: &str, value: &str, errors: &mut Vec<ConfigError>) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(ConfigError::Validation {
            message: format!("{key} must not be empty"),
        });
    } else if !(value.starts_with("https://") || value.starts_with("http://")) {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{value}` must be an http(s) URL"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&KbdeskConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = KbdeskConfig::default();
        config.server.host = String::new();
        config.foundry.search_endpoint = "srch-demo.search.windows.net".into();
        config.foundry.model_deployment = "  ".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_invalid_host() {
        let mut config = KbdeskConfig::default();
        config.server.host = "not a host!".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("server.host"));
    }

    #[test]
    fn rejects_shared_knowledge_base() {
        let mut config = KbdeskConfig::default();
        config.knowledge.products = config.knowledge.marketing.clone();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("knowledge.products"));
    }
}
