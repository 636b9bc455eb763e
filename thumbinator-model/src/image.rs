use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ids::ImageId;

/// Metadata for a single catalog image.
///
/// Records are immutable once the catalog has been built; the catalog owns
/// them and only hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: ImageId,
    pub name: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(rename = "fullImage")]
    pub full_image_url: String,
    pub width: u32,
    pub height: u32,
    pub resolution_label: String,
    /// File size in megabytes.
    pub file_size: f64,
    pub file_size_formatted: String,
    pub date_created: NaiveDateTime,
    pub date_modified: NaiveDateTime,
    pub category: String,
    pub tags: Vec<String>,
    pub is_color: bool,
    pub camera: String,
    pub aperture: String,
    pub iso: u32,
    pub exposure_time: String,
    pub focal_length: String,
    pub location: String,
    pub description: String,
}

impl ImageRecord {
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Width over height, or `None` for a degenerate zero-height record.
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height != 0).then(|| f64::from(self.width) / f64::from(self.height))
    }
}

/// An image that has not been assigned an id yet.
///
/// Produced by data factories and turned into an [`ImageRecord`] by the
/// catalog builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImage {
    pub name: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(rename = "fullImage")]
    pub full_image_url: String,
    pub width: u32,
    pub height: u32,
    pub resolution_label: String,
    pub file_size: f64,
    pub file_size_formatted: String,
    pub date_created: NaiveDateTime,
    pub date_modified: NaiveDateTime,
    pub category: String,
    pub tags: Vec<String>,
    pub is_color: bool,
    pub camera: String,
    pub aperture: String,
    pub iso: u32,
    pub exposure_time: String,
    pub focal_length: String,
    pub location: String,
    pub description: String,
}

impl NewImage {
    pub fn with_id(self, id: ImageId) -> ImageRecord {
        let NewImage {
            name,
            thumbnail_url,
            full_image_url,
            width,
            height,
            resolution_label,
            file_size,
            file_size_formatted,
            date_created,
            date_modified,
            category,
            tags,
            is_color,
            camera,
            aperture,
            iso,
            exposure_time,
            focal_length,
            location,
            description,
        } = self;

        ImageRecord {
            id,
            name,
            thumbnail_url,
            full_image_url,
            width,
            height,
            resolution_label,
            file_size,
            file_size_formatted,
            date_created,
            date_modified,
            category,
            tags,
            is_color,
            camera,
            aperture,
            iso,
            exposure_time,
            focal_length,
            location,
            description,
        }
    }
}

/// Human readable size label, e.g. `12.3 MB`.
pub fn format_file_size(megabytes: f64) -> String {
    format!("{megabytes:.1} MB")
}
