pub mod builder;
pub mod filtering;
pub mod pipeline;
pub mod sorting;
pub mod types;


pub use builder::ImageQueryBuilder;
pub use filtering::QueryMatcher;
pub use pipeline::{Emission, MatchSet, QueryPipeline};
pub use sorting::{compare_images, sort_indices};
pub use types::*;
