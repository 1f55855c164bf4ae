// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Normalization of specialist citation metadata into [`SourceReference`]s.

use kbdesk_core::{Category, Evidence, SourceReference};

/// Placeholder documents reported when a reply carries no usable metadata.
const HR_DOCUMENTS: &[(&str, &str)] = &[
    ("Employee_Handbook.pdf", "hr-policies/Employee_Handbook.pdf"),
    ("PTO_Policy_2024.docx", "hr-policies/PTO_Policy_2024.docx"),
    ("Benefits_Guide.pdf", "hr-policies/Benefits_Guide.pdf"),
];

const MARKETING_DOCUMENTS: &[(&str, &str)] = &[
    ("Brand_Guidelines.pdf", "marketing/Brand_Guidelines.pdf"),
    ("Campaign_Playbook.pptx", "marketing/Campaign_Playbook.pptx"),
];

const PRODUCTS_DOCUMENTS: &[(&str, &str)] = &[
    ("Product_Catalog_2024.xlsx", "products/Product_Catalog_2024.xlsx"),
    ("Specifications.pdf", "products/Specifications.pdf"),
];

/// Title/filepath pairs of the placeholder documents for `category`.
pub fn default_documents(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Hr => HR_DOCUMENTS,
        Category::Marketing => MARKETING_DOCUMENTS,
        Category::Products => PRODUCTS_DOCUMENTS,
    }
}

/// The placeholder source list for `category`.
pub fn default_sources(category: Category, kb: &str) -> Vec<SourceReference> {
    default_documents(category)
        .iter()
        .map(|(title, filepath)| SourceReference {
            title: Some((*title).to_string()),
            filepath: Some((*filepath).to_string()),
            ..SourceReference::new(category, kb)
        })
        .collect()
}

/// References from the highest-priority evidence kind that yields any.
///
/// Kinds are consulted as Citations, Context, GroundingData. Items with no
/// non-empty field are dropped. Returns an empty list when nothing qualifies.
pub fn extract_sources(
    category: Category,
    kb: &str,
    evidence: &[Evidence],
) -> Vec<SourceReference> {
    let mut ordered: Vec<&Evidence> = evidence.iter().collect();
    ordered.sort_by_key(|e| e.priority());

    ordered
        .into_iter()
        .map(|e| normalize(category, kb, e))
        .find(|sources| !sources.is_empty())
        .unwrap_or_default()
}

/// Extracted references, or the category's placeholders when there are none.
pub fn collect_sources(
    category: Category,
    kb: &str,
    evidence: &[Evidence],
) -> Vec<SourceReference> {
    let sources = extract_sources(category, kb, evidence);
    if sources.is_empty() {
        tracing::debug!(%category, kb, "no citation metadata in reply, using default sources");
        default_sources(category, kb)
    } else {
        sources
    }
}

fn normalize(category: Category, kb: &str, evidence: &Evidence) -> Vec<SourceReference> {
    let base = SourceReference::new(category, kb);
    let references: Vec<SourceReference> = match evidence {
        Evidence::Citations(items) => items
            .iter()
            .map(|c| SourceReference {
                title: present(&c.title),
                filepath: present(&c.filepath),
                url: present(&c.url),
                chunk_id: present(&c.chunk_id),
                ..base.clone()
            })
            .collect(),
        Evidence::Context(items) => items
            .iter()
            .map(|c| SourceReference {
                title: present(&c.title),
                filepath: present(&c.source),
                ..base.clone()
            })
            .collect(),
        Evidence::GroundingData(items) => items
            .iter()
            .map(|g| SourceReference {
                title: present(&g.title),
                filepath: present(&g.filepath),
                ..base.clone()
            })
            .collect(),
    };

    references
        .into_iter()
        .filter(SourceReference::has_document_fields)
        .collect()
}

fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
