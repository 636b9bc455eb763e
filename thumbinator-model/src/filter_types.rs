//! Closed filter and sort vocabularies exposed to clients.
//!
//! Every type here parses permissively: an absent, blank or unknown value
//! falls back to the neutral variant instead of failing. Clients depend on
//! that fallback, so [`ColorMode::from_param`] and friends never return an
//! error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour constraint on `ImageRecord::is_color`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    #[serde(alias = "all")]
    Any,
    Color,
    #[serde(alias = "bw")]
    Monochrome,
}

impl ColorMode {
    pub fn all() -> &'static [ColorMode] {
        &[ColorMode::Any, ColorMode::Color, ColorMode::Monochrome]
    }

    pub fn from_param(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };
        match raw.to_ascii_lowercase().as_str() {
            "color" | "colour" => ColorMode::Color,
            "monochrome" | "mono" | "bw" => ColorMode::Monochrome,
            _ => ColorMode::Any,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            ColorMode::Any => "all",
            ColorMode::Color => "color",
            ColorMode::Monochrome => "bw",
        }
    }

    pub fn matches(&self, is_color: bool) -> bool {
        match self {
            ColorMode::Any => true,
            ColorMode::Color => is_color,
            ColorMode::Monochrome => !is_color,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Width/height buckets, matched with an absolute tolerance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "all")]
    Any,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:2")]
    Classic,
    #[serde(rename = "21:9")]
    UltraWide,
}

impl AspectRatio {
    /// Maximum absolute distance between a record's ratio and the target.
    /// Not scale-invariant: wide targets get proportionally tighter bands.
    pub const TOLERANCE: f64 = 0.1;

    pub fn all() -> &'static [AspectRatio] {
        use AspectRatio::*;
        &[Any, Widescreen, Standard, Square, Classic, UltraWide]
    }

    pub fn from_param(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };
        match raw {
            "16:9" => AspectRatio::Widescreen,
            "4:3" => AspectRatio::Standard,
            "1:1" => AspectRatio::Square,
            "3:2" => AspectRatio::Classic,
            "21:9" => AspectRatio::UltraWide,
            _ => AspectRatio::Any,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            AspectRatio::Any => "all",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Standard => "4:3",
            AspectRatio::Square => "1:1",
            AspectRatio::Classic => "3:2",
            AspectRatio::UltraWide => "21:9",
        }
    }

    pub fn target(&self) -> Option<f64> {
        match self {
            AspectRatio::Any => None,
            AspectRatio::Widescreen => Some(16.0 / 9.0),
            AspectRatio::Standard => Some(4.0 / 3.0),
            AspectRatio::Square => Some(1.0),
            AspectRatio::Classic => Some(3.0 / 2.0),
            AspectRatio::UltraWide => Some(21.0 / 9.0),
        }
    }

    pub fn matches(&self, width: u32, height: u32) -> bool {
        let Some(target) = self.target() else {
            return true;
        };
        if height == 0 {
            return false;
        }
        let ratio = f64::from(width) / f64::from(height);
        (ratio - target).abs() < Self::TOLERANCE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Result ordering. Ties always keep catalog order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    Largest,
    Smallest,
    NameAsc,
    NameDesc,
    Resolution,
}

impl SortOption {
    pub fn all() -> &'static [SortOption] {
        use SortOption::*;
        &[
            Newest, Oldest, Largest, Smallest, NameAsc, NameDesc, Resolution,
        ]
    }

    /// Accepts `NAME_ASC`, `name-asc`, `Name_Asc`, ...
    pub fn from_param(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };
        match raw.to_ascii_uppercase().replace('-', "_").as_str() {
            "NEWEST" => SortOption::Newest,
            "OLDEST" => SortOption::Oldest,
            "LARGEST" => SortOption::Largest,
            "SMALLEST" => SortOption::Smallest,
            "NAME_ASC" => SortOption::NameAsc,
            "NAME_DESC" => SortOption::NameDesc,
            "RESOLUTION" => SortOption::Resolution,
            _ => SortOption::Newest,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::Largest => "largest",
            SortOption::Smallest => "smallest",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::Resolution => "resolution",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Minimum-resolution buckets, indexed by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTier;

impl ResolutionTier {
    pub const THRESHOLDS: [u64; 5] =
        [0, 1280 * 720, 1920 * 1080, 3840 * 2160, 7680 * 4320];

    pub const LABELS: [&'static str; 5] = ["Any", "HD+", "FHD+", "4K+", "8K+"];

    /// Pixel-count floor for `tier`. Tier 0 and out-of-range tiers impose no
    /// constraint and return `None`.
    pub fn threshold(tier: usize) -> Option<u64> {
        if tier == 0 {
            return None;
        }
        Self::THRESHOLDS.get(tier).copied()
    }

    pub fn labels() -> Vec<String> {
        Self::LABELS.iter().map(|label| label.to_string()).collect()
    }
}
