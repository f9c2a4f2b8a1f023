//! Saved area measurement ("project") record.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - Wire field names stay camelCase so existing saved blobs keep loading.

use crate::model::geometry::Point3;
use crate::repo::record_store::Record;
use serde::{Deserialize, Serialize};

/// Storage namespace for the project collection.
pub const PROJECT_NAMESPACE: &str = "project_measurements";
/// Key holding the serialized project list inside [`PROJECT_NAMESPACE`].
pub const PROJECT_STORAGE_KEY: &str = "projects";

/// Area measurement saved by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeasurement {
    pub id: String,
    pub display_name: String,
    /// Measured area in square feet.
    pub area_ft2: f32,
    /// Unix epoch milliseconds at save time.
    pub timestamp: i64,
    #[serde(default)]
    pub preview_image_uri: Option<String>,
    /// Polygon outline as captured by the AR layer.
    #[serde(default)]
    pub polygon_points: Vec<Point3>,
}

impl ProjectMeasurement {
    /// Creates a project without preview or outline.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        area_ft2: f32,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            area_ft2,
            timestamp,
            preview_image_uri: None,
            polygon_points: Vec::new(),
        }
    }
}

impl Record for ProjectMeasurement {
    const NAMESPACE: &'static str = PROJECT_NAMESPACE;
    const STORAGE_KEY: &'static str = PROJECT_STORAGE_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}
