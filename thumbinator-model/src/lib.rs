//! Core data model definitions shared across Thumbinator crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod events;
pub mod filter_types;
pub mod ids;
pub mod image;
pub mod prelude;
pub mod summary;

pub use events::{ImageSseEventType, ParseImageSseEventTypeError};
pub use filter_types::{AspectRatio, ColorMode, ResolutionTier, SortOption};
pub use ids::ImageId;
pub use image::{ImageRecord, NewImage};
pub use summary::{FilterOptions, SearchSummary};
