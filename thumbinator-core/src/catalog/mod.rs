//! Immutable in-memory image catalog.
//!
//! A [`Catalog`] is assembled once through [`CatalogBuilder`] and never
//! mutated afterwards. Concurrent searches share it through
//! [`SharedCatalog`] without any locking.

use std::collections::BTreeSet;
use std::sync::Arc;

use thumbinator_model::{
    FilterOptions, ImageId, ImageRecord, NewImage, ResolutionTier,
};

/// Read-only handle shared by every concurrent search.
pub type SharedCatalog = Arc<Catalog>;

/// Records in id order plus the facets derived from them.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ImageRecord>,
    categories: BTreeSet<String>,
    tags: BTreeSet<String>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Records in insertion order, the order used before any sort.
    pub fn all(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Total record count.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category values, case preserved.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Distinct tag values, lower-cased.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageRecord> {
        // Ids are assigned in push order, so the vector is sorted by id.
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .map(|index| &self.records[index])
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            categories: self.categories.clone(),
            tags: self.tags.clone(),
            resolution_labels: ResolutionTier::labels(),
            total_images: self.size() as u64,
        }
    }

    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(self)
    }
}

/// Assigns ids and collects facets while a catalog is being assembled.
#[derive(Debug)]
pub struct CatalogBuilder {
    records: Vec<ImageRecord>,
    next_id: u64,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            next_id: 1,
        }
    }

    pub fn push(&mut self, image: NewImage) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        self.records.push(image.with_id(id));
        id
    }

    pub fn extend(&mut self, images: impl IntoIterator<Item = NewImage>) {
        for image in images {
            self.push(image);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn build(self) -> Catalog {
        let categories = self
            .records
            .iter()
            .map(|record| record.category.clone())
            .collect();
        let tags = self
            .records
            .iter()
            .flat_map(|record| record.tags.iter())
            .map(|tag| tag.to_lowercase())
            .collect();

        Catalog {
            records: self.records,
            categories,
            tags,
        }
    }
}

impl FromIterator<NewImage> for Catalog {
    fn from_iter<I: IntoIterator<Item = NewImage>>(iter: I) -> Self {
        let mut builder = CatalogBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}
