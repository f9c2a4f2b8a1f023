//! Record construction for the save flow.
//!
//! # Responsibility
//! - Assign fresh ids and save timestamps to new records.
//! - Derive display names and tile dimensions from raw measurements.
//!
//! # Invariants
//! - Every record built here gets a new id from the injected generator.
//! - Tile area is always reported in square feet.

use crate::model::geometry::Point3;
use crate::model::project::ProjectMeasurement;
use crate::model::tile_sample::{TileSample, TILE_UNITS_INCHES};
use crate::service::labels::format_display_name;
use chrono::{Local, TimeZone};
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub const PROJECT_NAME_PREFIX: &str = "Project";
pub const TILE_NAME_PREFIX: &str = "Tile";

const INCHES_PER_METER: f32 = 39.37;
const SQUARE_INCHES_PER_SQUARE_FOOT: f32 = 144.0;
/// Single-span tile measurement assumes a 2:1 tile.
const TILE_HEIGHT_TO_WIDTH: f32 = 0.5;

/// Source of the current time in Unix epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock. Reports `0` if the system clock is before the epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
            })
    }
}

/// Source of globally unique record ids.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Tile size derived from a measurement, in inches and square feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDimensions {
    pub width_in: f32,
    pub height_in: f32,
    pub area_ft2: f32,
}

impl TileDimensions {
    pub fn from_inches(width_in: f32, height_in: f32) -> Self {
        Self {
            width_in,
            height_in,
            area_ft2: tile_area_ft2(width_in, height_in),
        }
    }

    /// Derives a tile from one measured span in meters.
    ///
    /// The span is taken as the width; height follows the 2:1 tile assumption.
    pub fn from_span(distance_m: f32) -> Self {
        let width_in = distance_m * INCHES_PER_METER;
        Self::from_inches(width_in, width_in * TILE_HEIGHT_TO_WIDTH)
    }
}

/// Area in square feet of a `width_in` x `height_in` tile.
pub fn tile_area_ft2(width_in: f32, height_in: f32) -> f32 {
    width_in * height_in / SQUARE_INCHES_PER_SQUARE_FOOT
}

/// Builds new records with fresh ids, timestamps and display names.
#[derive(Debug, Clone)]
pub struct SaveFlow<C: Clock, G: IdGenerator, Tz: TimeZone = Local> {
    clock: C,
    ids: G,
    tz: Tz,
}

impl<C: Clock, G: IdGenerator> SaveFlow<C, G, Local> {
    /// Creates a save flow naming records in the device timezone.
    pub fn new(clock: C, ids: G) -> Self {
        Self::with_timezone(clock, ids, Local)
    }
}

impl<C, G, Tz> SaveFlow<C, G, Tz>
where
    C: Clock,
    G: IdGenerator,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_timezone(clock: C, ids: G, tz: Tz) -> Self {
        Self { clock, ids, tz }
    }

    /// Creates a project record named `Project - <date>`.
    pub fn new_project(
        &self,
        area_ft2: f32,
        polygon_points: Vec<Point3>,
        preview_image_uri: Option<String>,
    ) -> ProjectMeasurement {
        let timestamp = self.clock.now_millis();
        ProjectMeasurement {
            id: self.ids.next_id(),
            display_name: format_display_name(PROJECT_NAME_PREFIX, timestamp, &self.tz),
            area_ft2,
            timestamp,
            preview_image_uri,
            polygon_points,
        }
    }

    /// Creates a tile sample record named `Tile - <date>`, measured in inches.
    pub fn new_tile_sample(
        &self,
        dimensions: TileDimensions,
        preview_image_uri: Option<String>,
    ) -> TileSample {
        let timestamp = self.clock.now_millis();
        TileSample {
            id: self.ids.next_id(),
            display_name: format_display_name(TILE_NAME_PREFIX, timestamp, &self.tz),
            width: dimensions.width_in,
            height: dimensions.height_in,
            area_ft2: dimensions.area_ft2,
            units: TILE_UNITS_INCHES.to_string(),
            timestamp,
            preview_image_uri,
        }
    }
}
