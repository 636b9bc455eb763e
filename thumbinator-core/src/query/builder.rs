use super::types::ImageQuery;
use chrono::NaiveDate;
use thumbinator_model::{AspectRatio, ColorMode, SortOption};

/// Fluent API for building image queries
#[derive(Debug, Clone, Default)]
pub struct ImageQueryBuilder {
    query: ImageQuery,
}

impl ImageQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    /// Add free-text search. Blank text is ignored.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        self.query.free_text =
            (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.query.color_mode = mode;
        self
    }

    /// Only colour images
    pub fn color_only(self) -> Self {
        self.color_mode(ColorMode::Color)
    }

    /// Only black and white images
    pub fn monochrome_only(self) -> Self {
        self.color_mode(ColorMode::Monochrome)
    }

    /// Minimum resolution tier (0 = any)
    pub fn min_resolution_tier(mut self, tier: usize) -> Self {
        self.query.min_resolution_tier = tier;
        self
    }

    pub fn min_size_mb(mut self, min: f64) -> Self {
        self.query.min_size_mb = Some(min);
        self
    }

    pub fn max_size_mb(mut self, max: f64) -> Self {
        self.query.max_size_mb = Some(max);
        self
    }

    /// Inclusive file size range in megabytes
    pub fn size_range_mb(self, min: f64, max: f64) -> Self {
        self.min_size_mb(min).max_size_mb(max)
    }

    pub fn created_from(mut self, date: NaiveDate) -> Self {
        self.query.date_from = Some(date);
        self
    }

    pub fn created_to(mut self, date: NaiveDate) -> Self {
        self.query.date_to = Some(date);
        self
    }

    pub fn aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.query.aspect_ratio = ratio;
        self
    }

    /// Filter by category (exact, case-sensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.query.categories.insert(category.into());
        self
    }

    /// Filter by multiple categories
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query
            .categories
            .extend(categories.into_iter().map(Into::into));
        self
    }

    /// Filter by tag (case-insensitive)
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.query.tags.insert(tag.into().to_lowercase());
        self
    }

    /// Filter by multiple tags, any of which may match
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query
            .tags
            .extend(tags.into_iter().map(|tag| tag.into().to_lowercase()));
        self
    }

    // === Sort methods ===

    pub fn sort_by(mut self, sort: SortOption) -> Self {
        self.query.sort = sort;
        self
    }

    // === Build method ===

    /// Build the final query
    pub fn build(self) -> ImageQuery {
        self.query
    }
}

// === Convenience constructors ===

impl ImageQuery {
    pub fn builder() -> ImageQueryBuilder {
        ImageQueryBuilder::new()
    }

    /// Create a simple search query
    pub fn search(text: impl Into<String>) -> Self {
        ImageQueryBuilder::new().search(text).build()
    }
}
