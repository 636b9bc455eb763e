//! Synthetic catalog data.
//!
//! Produces plausible photo metadata (camera, EXIF-style fields, tags,
//! locations) so the service has something to search without an image
//! store behind it. Seeded runs are fully deterministic for a given `now`.

pub mod config;

pub use config::{DEFAULT_CATALOG_SIZE, GeneratorOptions};

use chrono::{Local, NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use thumbinator_model::NewImage;
use thumbinator_model::image::format_file_size;
use tracing::info;

use crate::catalog::{Catalog, CatalogBuilder};

pub const CATEGORIES: [&str; 7] = [
    "Landscape",
    "Portrait",
    "Architecture",
    "Nature",
    "Travel",
    "Urban",
    "Macro",
];

pub const TAGS: [&str; 12] = [
    "sunset",
    "travel",
    "city",
    "mountain",
    "beach",
    "night",
    "portrait",
    "forest",
    "sky",
    "minimal",
    "architecture",
    "macro",
];

const CAMERAS: [&str; 5] = [
    "Canon EOS R5",
    "Nikon Z7 II",
    "Sony A7 IV",
    "Fujifilm X-T5",
    "Leica Q3",
];

const LOCATIONS: [&str; 6] = [
    "Paris, France",
    "New York, USA",
    "Tokyo, Japan",
    "Reykjavik, Iceland",
    "Banff, Canada",
    "Sydney, Australia",
];

/// (label, width, height)
const RESOLUTIONS: [(&str, u32, u32); 6] = [
    ("HD", 1280, 720),
    ("FHD", 1920, 1080),
    ("2K", 2560, 1440),
    ("4K", 3840, 2160),
    ("6K", 6016, 3384),
    ("8K", 7680, 4320),
];

const ISO_VALUES: [u32; 6] = [100, 200, 400, 800, 1600, 3200];

const EXPOSURES: [&str; 6] =
    ["1/30s", "1/60s", "1/125s", "1/250s", "1/500s", "1/1000s"];

const COLOR_RATIO: f64 = 0.8;
const MIN_TAGS: usize = 2;
const MAX_TAGS: usize = 5;

/// Generate `options.count` images dated relative to the current local time.
pub fn generate(options: &GeneratorOptions) -> Vec<NewImage> {
    generate_at(options, Local::now().naive_local())
}

/// Generate and index a catalog in one step.
pub fn build_catalog(options: &GeneratorOptions) -> Catalog {
    let images = generate(options);
    let mut builder = CatalogBuilder::with_capacity(images.len());
    builder.extend(images);
    builder.build()
}

/// Generate images with creation dates counted back from `now`.
pub fn generate_at(
    options: &GeneratorOptions,
    now: NaiveDateTime,
) -> Vec<NewImage> {
    let seed = options.seed.unwrap_or_else(rand::random);
    info!(count = options.count, seed, "Generating synthetic image catalog");

    let mut rng = StdRng::seed_from_u64(seed);
    (1..=options.count)
        .map(|sequence| generate_image(&mut rng, sequence, now))
        .collect()
}

fn generate_image(
    rng: &mut StdRng,
    sequence: usize,
    now: NaiveDateTime,
) -> NewImage {
    let category = pick(rng, &CATEGORIES);
    let (resolution_label, width, height) = *pick(rng, &RESOLUTIONS);
    let camera = pick(rng, &CAMERAS);
    let location = pick(rng, &LOCATIONS);

    let tag_count = rng.random_range(MIN_TAGS..=MAX_TAGS);
    let tags = TAGS
        .choose_multiple(rng, tag_count)
        .map(|tag| tag.to_string())
        .collect();

    // One decimal place so the numeric value agrees with its label.
    let file_size = ((rng.random::<f64>() * 50.0 + 1.0) * 10.0).round() / 10.0;

    let days_ago = rng.random_range(0..365_i64);
    let date_created = now - TimeDelta::days(days_ago);
    let modified_ago = (days_ago - rng.random_range(0..30_i64)).max(0);
    let date_modified = now - TimeDelta::days(modified_ago);

    let category_slug = category.to_lowercase();

    NewImage {
        name: format!("IMG_{sequence:04}_{category_slug}.jpg"),
        thumbnail_url: format!("https://picsum.photos/seed/{sequence}/640/360"),
        full_image_url: format!(
            "https://picsum.photos/seed/{sequence}/{width}/{height}"
        ),
        width,
        height,
        resolution_label: resolution_label.to_string(),
        file_size,
        file_size_formatted: format_file_size(file_size),
        date_created,
        date_modified,
        category: category.to_string(),
        tags,
        is_color: rng.random::<f64>() < COLOR_RATIO,
        camera: camera.to_string(),
        aperture: format!("f/{:.1}", rng.random::<f64>() * 14.0 + 1.4),
        iso: *pick(rng, &ISO_VALUES),
        exposure_time: pick(rng, &EXPOSURES).to_string(),
        focal_length: format!("{}mm", rng.random_range(20..200_u32)),
        location: location.to_string(),
        description: format!(
            "Beautiful {category_slug} photograph captured with {camera} in {location}."
        ),
    }
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    // Every table is a non-empty const.
    items.choose(rng).unwrap_or(&items[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let options = GeneratorOptions::default().with_seed(42);
        let first = generate_at(&options, fixed_now());
        let second = generate_at(&options, fixed_now());
        assert_eq!(first, second);
        assert_eq!(first.len(), DEFAULT_CATALOG_SIZE);

        let other = generate_at(&options.clone().with_seed(43), fixed_now());
        assert_ne!(first, other);
    }

    #[test]
    fn generated_fields_stay_within_their_domains() {
        let now = fixed_now();
        let images =
            generate_at(&GeneratorOptions::default().with_count(300).with_seed(7), now);

        for (index, image) in images.iter().enumerate() {
            assert!(CATEGORIES.contains(&image.category.as_str()));
            assert!(LOCATIONS.contains(&image.location.as_str()));
            assert!(CAMERAS.contains(&image.camera.as_str()));
            assert!(
                RESOLUTIONS
                    .iter()
                    .any(|&(label, w, h)| label == image.resolution_label
                        && w == image.width
                        && h == image.height)
            );

            let distinct: HashSet<_> = image.tags.iter().collect();
            assert_eq!(distinct.len(), image.tags.len());
            assert!((MIN_TAGS..=MAX_TAGS).contains(&image.tags.len()));
            assert!(image.tags.iter().all(|tag| TAGS.contains(&tag.as_str())));

            assert!((1.0..=51.0).contains(&image.file_size));
            assert_eq!(
                image.file_size_formatted,
                format!("{:.1} MB", image.file_size)
            );

            assert!(image.date_created <= now);
            assert!(now - image.date_created < TimeDelta::days(365));
            assert!(image.date_modified >= image.date_created);
            assert!(image.date_modified <= now);

            let expected_prefix = format!("IMG_{:04}_", index + 1);
            assert!(image.name.starts_with(&expected_prefix));
            assert!(image.name.ends_with(".jpg"));
            assert!(image.description.contains(&image.location));
        }

        let monochrome = images.iter().filter(|image| !image.is_color).count();
        assert!(monochrome > 0 && monochrome < images.len() / 2);
    }

    #[test]
    fn build_catalog_assigns_ids_matching_picsum_seeds() {
        let catalog =
            build_catalog(&GeneratorOptions::default().with_count(5).with_seed(1));
        assert_eq!(catalog.size(), 5);
        for record in catalog.all() {
            assert_eq!(
                record.thumbnail_url,
                format!("https://picsum.photos/seed/{}/640/360", record.id)
            );
        }
        assert!(!catalog.categories().is_empty());
        assert!(!catalog.tags().is_empty());
    }

    #[test]
    fn zero_count_yields_empty_catalog() {
        let catalog =
            build_catalog(&GeneratorOptions::default().with_count(0).with_seed(1));
        assert!(catalog.is_empty());
    }
}
