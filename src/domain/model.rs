use serde::{Deserialize, Serialize};

/// One color as an immutable RGB triple. Lives for the duration of a single
/// request; there is no identity and nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Wire format of the color endpoint. All three fields are always present
/// and always strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorResponse {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

/// Wire format of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
