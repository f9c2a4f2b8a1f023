//! Human-readable labels for saved records.
//!
//! Timezone is always explicit; `*_local` helpers use the device timezone.

use crate::model::tile_sample::TileSample;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

const DISPLAY_NAME_FORMAT: &str = "%b %d, %Y %H:%M";
const TIMESTAMP_FORMAT: &str = "%b %d, %Y %-I:%M %p";

/// Formats `"<prefix> - MMM dd, yyyy HH:mm"`, e.g. `Tile - Mar 04, 2024 09:30`.
///
/// Timestamps outside chrono's range fall back to the raw millisecond value.
pub fn format_display_name<Tz>(prefix: &str, timestamp_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match to_zoned(timestamp_ms, tz) {
        Some(at) => format!("{prefix} - {}", at.format(DISPLAY_NAME_FORMAT)),
        None => format!("{prefix} - {timestamp_ms}"),
    }
}

/// Formats `"MMM dd, yyyy h:mm AM"`, e.g. `Mar 04, 2024 9:30 AM`.
pub fn format_timestamp<Tz>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match to_zoned(timestamp_ms, tz) {
        Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
        None => timestamp_ms.to_string(),
    }
}

pub fn format_display_name_local(prefix: &str, timestamp_ms: i64) -> String {
    format_display_name(prefix, timestamp_ms, &Local)
}

pub fn format_timestamp_local(timestamp_ms: i64) -> String {
    format_timestamp(timestamp_ms, &Local)
}

/// Formats an area as `"12.34 ft²"`.
pub fn format_area_ft2(area_ft2: f32) -> String {
    format!("{area_ft2:.2} ft²")
}

/// Formats a tile as `"<w> x <h> (<area> ft²)"`, two decimals each.
pub fn format_tile_summary(tile: &TileSample) -> String {
    format!(
        "{:.2} x {:.2} ({})",
        tile.width,
        tile.height,
        format_area_ft2(tile.area_ft2)
    )
}

fn to_zoned<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(tz))
}
