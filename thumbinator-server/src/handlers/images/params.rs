//! Raw `/api/images/stream` query parameters and their conversion into an
//! [`ImageQuery`].
//!
//! Every field is taken as text so that malformed numbers and dates surface
//! as a JSON 400 from this module rather than an extractor rejection.
//! Enum-like fields never fail: unknown values fall back to their neutral
//! variant.

use chrono::NaiveDate;
use serde::Deserialize;
use thumbinator_core::query::{ImageQuery, ImageQueryBuilder};
use thumbinator_model::{AspectRatio, ColorMode, SortOption};

use crate::infra::errors::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStreamParams {
    pub search: Option<String>,
    pub color_mode: Option<String>,
    pub min_resolution: Option<String>,
    pub min_size: Option<String>,
    pub max_size: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub aspect_ratio: Option<String>,
    pub categories: Option<String>,
    pub tags: Option<String>,
    pub sort: Option<String>,
}

impl ImageStreamParams {
    pub fn into_query(self) -> Result<ImageQuery, AppError> {
        let mut builder = ImageQueryBuilder::new()
            .color_mode(ColorMode::from_param(self.color_mode.as_deref()))
            .aspect_ratio(AspectRatio::from_param(self.aspect_ratio.as_deref()))
            .sort_by(SortOption::from_param(self.sort.as_deref()));

        if let Some(search) = self.search {
            builder = builder.search(search);
        }
        if let Some(tier) = parse_tier(self.min_resolution.as_deref())? {
            builder = builder.min_resolution_tier(tier);
        }
        if let Some(min) = parse_size("minSize", self.min_size.as_deref())? {
            builder = builder.min_size_mb(min);
        }
        if let Some(max) = parse_size("maxSize", self.max_size.as_deref())? {
            builder = builder.max_size_mb(max);
        }
        if let Some(from) = parse_date("dateFrom", self.date_from.as_deref())? {
            builder = builder.created_from(from);
        }
        if let Some(to) = parse_date("dateTo", self.date_to.as_deref())? {
            builder = builder.created_to(to);
        }
        if let Some(raw) = self.categories.as_deref() {
            builder = builder.categories(split_csv(raw));
        }
        if let Some(raw) = self.tags.as_deref() {
            builder = builder.tags(split_csv(raw));
        }

        Ok(builder.build())
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Negative tiers mean "any", the same as an out-of-range index.
fn parse_tier(raw: Option<&str>) -> Result<Option<usize>, AppError> {
    let Some(value) = non_blank(raw) else {
        return Ok(None);
    };
    let tier: i64 = value.parse().map_err(|_| {
        AppError::bad_request(format!(
            "Invalid minResolution '{value}': expected an integer tier"
        ))
    })?;
    Ok(Some(usize::try_from(tier).unwrap_or(0)))
}

fn parse_size(name: &str, raw: Option<&str>) -> Result<Option<f64>, AppError> {
    let Some(value) = non_blank(raw) else {
        return Ok(None);
    };
    match value.parse::<f64>() {
        Ok(size) if size.is_finite() => Ok(Some(size)),
        _ => Err(AppError::bad_request(format!(
            "Invalid {name} '{value}': expected a size in megabytes"
        ))),
    }
}

fn parse_date(
    name: &str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, AppError> {
    let Some(value) = non_blank(raw) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            AppError::bad_request(format!(
                "Invalid {name} '{value}': expected YYYY-MM-DD"
            ))
        })
}

fn split_csv(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn params(build: impl FnOnce(&mut ImageStreamParams)) -> ImageStreamParams {
        let mut params = ImageStreamParams::default();
        build(&mut params);
        params
    }

    #[test]
    fn empty_params_give_neutral_query() {
        let query = ImageStreamParams::default()
            .into_query()
            .expect("valid params");
        assert!(query.is_unconstrained());
        assert_eq!(query.sort, SortOption::Newest);
    }

    #[test]
    fn parses_every_field() {
        let query = params(|p| {
            p.search = Some(" Paris ".into());
            p.color_mode = Some("bw".into());
            p.min_resolution = Some("2".into());
            p.min_size = Some("1.5".into());
            p.max_size = Some("20".into());
            p.date_from = Some("2024-01-01".into());
            p.date_to = Some("2024-12-31".into());
            p.aspect_ratio = Some("16:9".into());
            p.categories = Some("Urban, Macro,,".into());
            p.tags = Some("Beach,SUNSET".into());
            p.sort = Some("name-desc".into());
        })
        .into_query()
        .expect("valid params");

        assert_eq!(query.free_text.as_deref(), Some("Paris"));
        assert_eq!(query.color_mode, ColorMode::Monochrome);
        assert_eq!(query.min_resolution_tier, 2);
        assert_eq!(query.min_size_mb, Some(1.5));
        assert_eq!(query.max_size_mb, Some(20.0));
        assert_eq!(query.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(query.date_to, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(query.aspect_ratio, AspectRatio::Widescreen);
        assert_eq!(query.categories.len(), 2);
        assert!(query.categories.contains("Urban"));
        assert!(query.categories.contains("Macro"));
        assert!(query.tags.contains("beach"));
        assert!(query.tags.contains("sunset"));
        assert_eq!(query.sort, SortOption::NameDesc);
    }

    #[test]
    fn unknown_enum_values_fall_back() {
        let query = params(|p| {
            p.color_mode = Some("sepia".into());
            p.aspect_ratio = Some("2:1".into());
            p.sort = Some("random".into());
        })
        .into_query()
        .expect("enums never fail");

        assert_eq!(query.color_mode, ColorMode::Any);
        assert_eq!(query.aspect_ratio, AspectRatio::Any);
        assert_eq!(query.sort, SortOption::Newest);
    }

    #[test]
    fn malformed_dates_and_numbers_are_bad_requests() {
        let cases: [fn(&mut ImageStreamParams); 5] = [
            |p| p.date_from = Some("01/02/2024".into()),
            |p| p.date_to = Some("2024-02-30".into()),
            |p| p.min_size = Some("big".into()),
            |p| p.max_size = Some("NaN".into()),
            |p| p.min_resolution = Some("4k".into()),
        ];
        for build in cases {
            let err = params(build).into_query().expect_err("rejected");
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn negative_or_large_tiers_do_not_fail() {
        let negative = params(|p| p.min_resolution = Some("-1".into()))
            .into_query()
            .expect("negative tier");
        assert_eq!(negative.min_resolution_tier, 0);

        let large = params(|p| p.min_resolution = Some("12".into()))
            .into_query()
            .expect("large tier");
        assert!(large.is_unconstrained());
    }

    #[test]
    fn inverted_size_range_is_accepted() {
        let query = params(|p| {
            p.min_size = Some("30".into());
            p.max_size = Some("5".into());
        })
        .into_query()
        .expect("min > max is not an error");
        assert_eq!(query.min_size_mb, Some(30.0));
        assert_eq!(query.max_size_mb, Some(5.0));
    }

    #[test]
    fn blank_values_are_ignored() {
        let query = params(|p| {
            p.search = Some("   ".into());
            p.min_size = Some("".into());
            p.date_from = Some(" ".into());
            p.tags = Some(" , ".into());
        })
        .into_query()
        .expect("blank values");
        assert!(query.is_unconstrained());
    }
}
