//! Saved tile sample record.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - `width`/`height` are expressed in `units`; `area_ft2` is always square feet.

use crate::repo::record_store::Record;
use serde::{Deserialize, Serialize};

/// Storage namespace for the tile sample collection.
pub const TILE_SAMPLE_NAMESPACE: &str = "tile_samples";
/// Key holding the serialized tile list inside [`TILE_SAMPLE_NAMESPACE`].
pub const TILE_SAMPLE_STORAGE_KEY: &str = "tile_samples";
/// Unit label written by the tile measuring flow.
pub const TILE_UNITS_INCHES: &str = "inches";

/// Single tile measured to seed the tile calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSample {
    pub id: String,
    pub display_name: String,
    pub width: f32,
    pub height: f32,
    pub area_ft2: f32,
    /// Unit label for `width` and `height`, e.g. `inches`.
    pub units: String,
    /// Unix epoch milliseconds at save time.
    pub timestamp: i64,
    #[serde(default)]
    pub preview_image_uri: Option<String>,
}

impl Record for TileSample {
    const NAMESPACE: &'static str = TILE_SAMPLE_NAMESPACE;
    const STORAGE_KEY: &'static str = TILE_SAMPLE_STORAGE_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}
