use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Facet values used to populate filter controls. Independent of any query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub resolution_labels: Vec<String>,
    pub total_images: u64,
}

/// Terminal summary of one search execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    /// Catalog size at the time of the search.
    pub total: u64,
    /// Records emitted for this query.
    pub matched: u64,
}

impl SearchSummary {
    pub fn new(total: u64, matched: u64) -> Self {
        Self { total, matched }
    }
}
