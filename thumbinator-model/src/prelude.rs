pub use crate::{
    AspectRatio, ColorMode, FilterOptions, ImageId, ImageRecord,
    ImageSseEventType, NewImage, ResolutionTier, SearchSummary, SortOption,
};
