// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `kbdesk route` command implementation.

use colored::Colorize;
use kbdesk_router::{classify_with_reason, Classification};

/// Prints the category for `text` on stdout and the deciding keyword on stderr.
pub fn run_route(text: &str) {
    let classification = classify_with_reason(text);
    println!("{}", classification.category);
    eprintln!("{}", describe(&classification).dimmed());
}

fn describe(classification: &Classification) -> String {
    match classification.matched {
        Some(keyword) => format!(
            "{} (matched \"{keyword}\")",
            classification.category.agent_id()
        ),
        None => format!(
            "{} (no keyword matched, default)",
            classification.category.agent_id()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_matched_keyword() {
        let c = classify_with_reason("Tell me about our brand campaign");
        assert_eq!(describe(&c), "marketing-agent (matched \"brand\")");
    }

    #[test]
    fn describes_default() {
        let c = classify_with_reason("");
        assert_eq!(describe(&c), "hr-agent (no keyword matched, default)");
    }
}
