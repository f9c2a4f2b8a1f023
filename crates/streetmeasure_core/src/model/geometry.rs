//! Opaque 3D geometry carried by project records.

use serde::{Deserialize, Serialize};

/// World-space point captured by the AR layer, in meters.
///
/// Core only stores and returns these values; it never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
