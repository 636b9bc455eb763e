use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Event names used on the image search SSE stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSseEventType {
    /// One matched record.
    Image,
    /// Terminal [`SearchSummary`](crate::SearchSummary).
    Complete,
    /// Terminal failure; replaces `Complete`.
    Error,
}

impl ImageSseEventType {
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ImageSseEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseImageSseEventTypeError {
    invalid_value: String,
}

impl ParseImageSseEventTypeError {
    pub fn new(value: &str) -> Self {
        Self {
            invalid_value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseImageSseEventTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid image SSE event type: {}", self.invalid_value)
    }
}

impl std::error::Error for ParseImageSseEventTypeError {}

impl FromStr for ImageSseEventType {
    type Err = ParseImageSseEventTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "image" => Ok(Self::Image),
            "complete" => Ok(Self::Complete),
            "error" => Ok(Self::Error),
            other => Err(ParseImageSseEventTypeError::new(other)),
        }
    }
}
