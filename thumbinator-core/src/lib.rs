//! # Thumbinator Core
//!
//! In-memory image catalog and the search pipeline that runs over it.
//!
//! ## Overview
//!
//! - **Catalog**: an immutable, shareable set of image records plus derived
//!   facets (categories, tags)
//! - **Query System**: typed filter and sort criteria, compiled into a
//!   per-record matcher and evaluated as filter, barrier, stable sort, emit
//! - **Streaming**: an async driver that pushes matches into a transport
//!   sink with backpressure and per-request cancellation
//! - **Generator**: seeded synthetic photo metadata for demo catalogs
//!
//! ## Examples
//!
//! ```
//! use thumbinator_core::{
//!     generator::{GeneratorOptions, build_catalog},
//!     query::{ImageQuery, QueryPipeline},
//! };
//! use thumbinator_model::SortOption;
//!
//! let catalog = build_catalog(&GeneratorOptions::default().with_seed(7));
//! let query = ImageQuery::builder()
//!     .search("paris")
//!     .sort_by(SortOption::NameAsc)
//!     .build();
//!
//! let mut emission = QueryPipeline::new(&catalog).execute(&query);
//! for image in emission.by_ref() {
//!     assert_eq!(image.location, "Paris, France");
//! }
//! let summary = emission.finish().unwrap();
//! assert!(summary.matched <= summary.total);
//! ```

#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod generator;
pub mod query;
pub mod stream;

pub use catalog::{Catalog, CatalogBuilder, SharedCatalog};
pub use error::{CatalogError, Result};
pub use query::{
    Emission, ImageQuery, ImageQueryBuilder, MatchSet, QueryMatcher,
    QueryPipeline,
};
pub use stream::{ImageSink, SearchOptions, run_search, run_search_with};
