use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thumbinator_model::{AspectRatio, ColorMode, SortOption};

/// Parsed filter and sort criteria for one search request.
///
/// The default value is fully neutral: it matches every record and sorts
/// newest first. Empty `categories`/`tags` mean "no constraint".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageQuery {
    /// Case-insensitive substring searched in name, description, category,
    /// location and tags.
    pub free_text: Option<String>,
    pub color_mode: ColorMode,
    /// Index into `ResolutionTier::THRESHOLDS`.
    pub min_resolution_tier: usize,
    /// Inclusive lower bound in megabytes.
    pub min_size_mb: Option<f64>,
    /// Inclusive upper bound in megabytes.
    pub max_size_mb: Option<f64>,
    /// Inclusive bound on the date part of `date_created`.
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub aspect_ratio: AspectRatio,
    pub categories: HashSet<String>,
    /// Matched case-insensitively with OR semantics.
    pub tags: HashSet<String>,
    pub sort: SortOption,
}

impl ImageQuery {
    /// True when no predicate would reject anything.
    pub fn is_unconstrained(&self) -> bool {
        self.free_text
            .as_deref()
            .is_none_or(|text| text.trim().is_empty())
            && self.color_mode == ColorMode::Any
            && thumbinator_model::ResolutionTier::threshold(
                self.min_resolution_tier,
            )
            .is_none()
            && self.min_size_mb.is_none()
            && self.max_size_mb.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.aspect_ratio == AspectRatio::Any
            && self.categories.is_empty()
            && self.tags.is_empty()
    }
}
