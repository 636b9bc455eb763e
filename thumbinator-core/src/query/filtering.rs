//! Per-record predicate evaluation.
//!
//! [`QueryMatcher`] compiles an [`ImageQuery`] once (lower-cased search term,
//! folded tag set, resolved pixel floor) so that matching a record does no
//! per-query work. A record matches only if every configured dimension
//! accepts it; neutral values impose no constraint.

use std::collections::HashSet;

use chrono::NaiveDate;
use thumbinator_model::{
    AspectRatio, ColorMode, ImageRecord, ResolutionTier,
};

use super::types::ImageQuery;

#[derive(Debug, Clone)]
pub struct QueryMatcher<'q> {
    search_term: Option<String>,
    color_mode: ColorMode,
    min_pixels: Option<u64>,
    min_size_mb: Option<f64>,
    max_size_mb: Option<f64>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    aspect_ratio: AspectRatio,
    categories: &'q HashSet<String>,
    tags: HashSet<String>,
}

impl<'q> QueryMatcher<'q> {
    pub fn new(query: &'q ImageQuery) -> Self {
        let search_term = query
            .free_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(str::to_lowercase);

        Self {
            search_term,
            color_mode: query.color_mode,
            min_pixels: ResolutionTier::threshold(query.min_resolution_tier),
            min_size_mb: query.min_size_mb,
            max_size_mb: query.max_size_mb,
            date_from: query.date_from,
            date_to: query.date_to,
            aspect_ratio: query.aspect_ratio,
            categories: &query.categories,
            tags: query.tags.iter().map(|tag| tag.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, image: &ImageRecord) -> bool {
        self.matches_search(image)
            && self.color_mode.matches(image.is_color)
            && self.matches_resolution(image)
            && self.matches_size(image)
            && self.matches_category(image)
            && self.matches_tags(image)
            && self.matches_date(image)
            && self.aspect_ratio.matches(image.width, image.height)
    }

    fn matches_search(&self, image: &ImageRecord) -> bool {
        let Some(term) = self.search_term.as_deref() else {
            return true;
        };
        let contains = |field: &str| field.to_lowercase().contains(term);

        contains(image.name.as_str())
            || contains(image.description.as_str())
            || contains(image.category.as_str())
            || contains(image.location.as_str())
            || image.tags.iter().any(|tag| contains(tag.as_str()))
    }

    fn matches_resolution(&self, image: &ImageRecord) -> bool {
        self.min_pixels
            .is_none_or(|floor| image.pixel_count() >= floor)
    }

    fn matches_size(&self, image: &ImageRecord) -> bool {
        self.min_size_mb.is_none_or(|min| image.file_size >= min)
            && self.max_size_mb.is_none_or(|max| image.file_size <= max)
    }

    fn matches_category(&self, image: &ImageRecord) -> bool {
        self.categories.is_empty() || self.categories.contains(&image.category)
    }

    fn matches_tags(&self, image: &ImageRecord) -> bool {
        self.tags.is_empty()
            || image
                .tags
                .iter()
                .any(|tag| self.tags.contains(&tag.to_lowercase()))
    }

    fn matches_date(&self, image: &ImageRecord) -> bool {
        let created = image.date_created.date();
        self.date_from.is_none_or(|from| created >= from)
            && self.date_to.is_none_or(|to| created <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{day, image};
    use crate::query::ImageQueryBuilder;
    use thumbinator_model::ImageId;

    fn record(build: impl FnOnce(&mut thumbinator_model::NewImage)) -> ImageRecord {
        let mut new_image = image("IMG_0001_landscape.jpg");
        build(&mut new_image);
        new_image.with_id(ImageId(1))
    }

    #[test]
    fn search_covers_every_text_field() {
        let query = ImageQuery::search("PARIS");
        let matcher = QueryMatcher::new(&query);

        assert!(matcher.matches(&record(|i| i.location = "Paris, France".into())));
        assert!(matcher.matches(&record(|i| i.name = "paris_001.jpg".into())));
        assert!(matcher.matches(&record(|i| i.description = "Shot in paris".into())));
        assert!(matcher.matches(&record(|i| i.tags = vec!["ParisTrip".into()])));
        assert!(!matcher.matches(&record(|_| {})));
    }

    #[test]
    fn search_ignores_camera_and_exif_fields() {
        let query = ImageQuery::search("leica");
        let matcher = QueryMatcher::new(&query);
        assert!(!matcher.matches(&record(|i| i.camera = "Leica Q3".into())));
    }

    #[test]
    fn size_bounds_are_inclusive_and_independent() {
        let at_ten = record(|i| i.file_size = 10.0);

        let min_only = ImageQueryBuilder::new().min_size_mb(10.0).build();
        assert!(QueryMatcher::new(&min_only).matches(&at_ten));

        let max_only = ImageQueryBuilder::new().max_size_mb(10.0).build();
        assert!(QueryMatcher::new(&max_only).matches(&at_ten));

        let above = ImageQueryBuilder::new().min_size_mb(10.5).build();
        assert!(!QueryMatcher::new(&above).matches(&at_ten));

        let inverted = ImageQueryBuilder::new().size_range_mb(20.0, 5.0).build();
        assert!(!QueryMatcher::new(&inverted).matches(&at_ten));
    }

    #[test]
    fn date_bounds_compare_the_date_component() {
        let late_evening = record(|i| {
            i.date_created = day(2024, 5, 10)
                .date()
                .and_hms_opt(23, 59, 59)
                .expect("valid time")
        });
        let on_day = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");
        let next_day = NaiveDate::from_ymd_opt(2024, 5, 11).expect("valid date");

        let same_day = ImageQueryBuilder::new()
            .created_from(on_day)
            .created_to(on_day)
            .build();
        assert!(QueryMatcher::new(&same_day).matches(&late_evening));

        let from_next = ImageQueryBuilder::new().created_from(next_day).build();
        assert!(!QueryMatcher::new(&from_next).matches(&late_evening));
    }

    #[test]
    fn out_of_range_resolution_tier_is_unconstrained() {
        let tiny = record(|i| {
            i.width = 640;
            i.height = 480;
        });
        let tier_nine = ImageQueryBuilder::new().min_resolution_tier(9).build();
        assert!(QueryMatcher::new(&tier_nine).matches(&tiny));

        let tier_one = ImageQueryBuilder::new().min_resolution_tier(1).build();
        assert!(!QueryMatcher::new(&tier_one).matches(&tiny));
    }

    #[test]
    fn directly_built_query_tags_are_folded() {
        let mut query = ImageQuery::default();
        query.tags.insert("Sunset".into());
        let tagged = record(|i| i.tags = vec!["SUNSET".into()]);
        assert!(QueryMatcher::new(&query).matches(&tagged));
    }

    #[test]
    fn categories_match_exactly() {
        let query = ImageQueryBuilder::new().category("urban").build();
        let urban = record(|i| i.category = "Urban".into());
        assert!(!QueryMatcher::new(&query).matches(&urban));
    }
}
