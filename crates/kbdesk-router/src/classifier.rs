// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword classification of free-text queries.
//!
//! Lower-cases the text and walks [`ROUTING_RULES`] top to bottom; the first
//! rule with a keyword contained in the text wins. No network, no latency,
//! never fails.

use kbdesk_core::Category;

/// Ordered routing rules. Order is significant: a query mentioning both
/// "brand" and "product" is marketing because marketing is checked first.
pub const ROUTING_RULES: &[(Category, &[&str])] = &[
    (Category::Hr, &["hr"]),
    (Category::Marketing, &["marketing", "brand", "campaign"]),
    (Category::Products, &["product"]),
];

/// Result of classifying a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The selected category.
    pub category: Category,
    /// Keyword that matched, or `None` when the default was used.
    pub matched: Option<&'static str>,
}

/// Classify `text` into a category, falling back to [`Category::default`].
pub fn classify(text: &str) -> Category {
    classify_with_reason(text).category
}

/// Like [`classify`], also reporting which keyword decided it.
pub fn classify_with_reason(text: &str) -> Classification {
    let lower = text.to_lowercase();
    ROUTING_RULES
        .iter()
        .find_map(|(category, keywords)| {
            keywords
                .iter()
                .find(|keyword| lower.contains(*keyword))
                .map(|keyword| Classification {
                    category: *category,
                    matched: Some(*keyword),
                })
        })
        .unwrap_or(Classification {
            category: Category::default(),
            matched: None,
        })
}
