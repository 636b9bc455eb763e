#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use thumbinator_core::{Catalog, CatalogBuilder};
use thumbinator_model::{NewImage, image::format_file_size};
use thumbinator_server::{
    AppState, create_app,
    infra::config::{Config, StreamConfig},
};

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid fixture date")
}

pub struct Fixture {
    pub name: &'static str,
    pub size: (u32, u32),
    pub file_size: f64,
    pub created: NaiveDateTime,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub is_color: bool,
    pub location: &'static str,
}

impl Fixture {
    fn into_image(self) -> NewImage {
        NewImage {
            name: self.name.to_string(),
            thumbnail_url: format!("https://img.test/{}/thumb", self.name),
            full_image_url: format!("https://img.test/{}/full", self.name),
            width: self.size.0,
            height: self.size.1,
            resolution_label: format!("{}x{}", self.size.0, self.size.1),
            file_size: self.file_size,
            file_size_formatted: format_file_size(self.file_size),
            date_created: self.created,
            date_modified: self.created,
            category: self.category.to_string(),
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            is_color: self.is_color,
            camera: "Leica Q3".to_string(),
            aperture: "f/2.8".to_string(),
            iso: 200,
            exposure_time: "1/250s".to_string(),
            focal_length: "28mm".to_string(),
            location: self.location.to_string(),
            description: format!("Photo taken in {}.", self.location),
        }
    }
}

/// Five records with distinct dates, ids 1..=5 in this order.
pub fn gallery() -> Catalog {
    let fixtures = [
        Fixture {
            name: "IMG_0001_urban.jpg",
            size: (1920, 1080),
            file_size: 8.5,
            created: at(2024, 3, 10),
            category: "Urban",
            tags: &["city", "night"],
            is_color: true,
            location: "Paris, France",
        },
        Fixture {
            name: "IMG_0002_landscape.jpg",
            size: (7680, 4320),
            file_size: 42.0,
            created: at(2024, 5, 1),
            category: "Landscape",
            tags: &["mountain", "SUNSET"],
            is_color: true,
            location: "Banff, Canada",
        },
        Fixture {
            name: "IMG_0003_portrait.jpg",
            size: (1000, 1000),
            file_size: 3.2,
            created: at(2023, 12, 24),
            category: "Portrait",
            tags: &["portrait", "minimal"],
            is_color: false,
            location: "Tokyo, Japan",
        },
        Fixture {
            name: "IMG_0004_travel.jpg",
            size: (3840, 2160),
            file_size: 19.9,
            created: at(2024, 1, 15),
            category: "Travel",
            tags: &["beach", "travel"],
            is_color: true,
            location: "Sydney, Australia",
        },
        Fixture {
            name: "IMG_0005_macro.jpg",
            size: (1280, 720),
            file_size: 1.1,
            created: at(2024, 7, 4),
            category: "Macro",
            tags: &["macro"],
            is_color: false,
            location: "Reykjavik, Iceland",
        },
    ];

    let mut builder = CatalogBuilder::with_capacity(fixtures.len());
    builder.extend(fixtures.into_iter().map(Fixture::into_image));
    builder.build()
}

pub fn server_with(catalog: Catalog, config: Config) -> TestServer {
    let state = AppState::new(catalog.into_shared(), config);
    TestServer::new(create_app(state)).expect("test server")
}

pub fn server() -> TestServer {
    let config = Config {
        stream: StreamConfig {
            channel_capacity: 2,
            ..StreamConfig::default()
        },
        ..Config::default()
    };
    server_with(gallery(), config)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SseEvent {
    pub event: String,
    pub data: Value,
}

/// Parse a complete `text/event-stream` body, skipping comments.
pub fn parse_sse(body: &str) -> Vec<SseEvent> {
    body.split("\n\n")
        .filter_map(|block| {
            let mut event = None;
            let mut data = String::new();
            for line in block.lines() {
                if let Some(name) = line.strip_prefix("event:") {
                    event = Some(name.trim().to_string());
                } else if let Some(chunk) = line.strip_prefix("data:") {
                    data.push_str(chunk.trim_start());
                }
            }
            let event = event?;
            let data = serde_json::from_str(&data).expect("event data is json");
            Some(SseEvent { event, data })
        })
        .collect()
}

pub fn image_names(events: &[SseEvent]) -> Vec<String> {
    events
        .iter()
        .filter(|event| event.event == "image")
        .map(|event| {
            event.data["name"]
                .as_str()
                .expect("image name")
                .to_string()
        })
        .collect()
}
