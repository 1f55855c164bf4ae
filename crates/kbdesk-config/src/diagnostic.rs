// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with "did you mean?" suggestions.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a key to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(kbdesk::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(kbdesk::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(kbdesk::config::missing_key),
        help("add `{key} = <value>` to your kbdesk.toml")
    )]
    MissingKey { key: String },

    /// A value parsed but failed a semantic check.
    #[error("validation error: {message}")]
    #[diagnostic(code(kbdesk::config::validation))]
    Validation { message: String },

    /// Anything else figment reports.
    #[error("configuration error: {0}")]
    #[diagnostic(code(kbdesk::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` (possibly holding several errors) into diagnostics.
///
/// `toml_sources` pairs file paths with their contents so unknown keys can be
/// underlined in place.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => {
                let (span, src) = locate_key(&error, field, toml_sources)
                    .map_or((None, None), |(span, src)| (Some(span), Some(src)));
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion: suggest_key(field, expected),
                    valid_keys: expected.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.to_string(),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.to_string(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// Find the file an error came from and the key's span within it.
fn locate_key(
    error: &figment::error::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let path = match error.metadata.as_ref()?.source.as_ref()? {
        figment::Source::File(path) => path.display().to_string(),
        _ => return None,
    };
    let (name, content) = toml_sources.iter().find(|(p, _)| *p == path)?;
    let offset = find_key_offset(content, &error.path, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(name, content.clone()),
    ))
}

/// Byte offset of `field` in TOML `content`, searched after the `[section]`
/// header named by the first element of `path` (or from the start).
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(after) = trimmed.strip_prefix(field)
            && after.trim_start().starts_with('=')
        {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }
    None
}

/// Closest valid key by Jaro-Winkler similarity, if any clears the threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Render diagnostics to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        if handler.render_report(&mut buf, error as &dyn Diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
