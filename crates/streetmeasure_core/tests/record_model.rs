use streetmeasure_core::{Point3, ProjectMeasurement, Record, TileSample};

#[test]
fn project_serialization_uses_camel_case_wire_fields() {
    let mut project = ProjectMeasurement::new("p-1", "Kitchen", 96.25, 1_709_543_100_000);
    project.preview_image_uri = Some("/data/screenshots/p-1.jpg".to_string());
    project.polygon_points = vec![Point3::new(0.5, 0.0, -1.25)];

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "p-1");
    assert_eq!(json["displayName"], "Kitchen");
    assert_eq!(json["areaFt2"], 96.25);
    assert_eq!(json["timestamp"], 1_709_543_100_000_i64);
    assert_eq!(json["previewImageUri"], "/data/screenshots/p-1.jpg");
    assert_eq!(
        json["polygonPoints"],
        serde_json::json!([{"x": 0.5, "y": 0.0, "z": -1.25}])
    );

    let decoded: ProjectMeasurement = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn tile_sample_serialization_uses_camel_case_wire_fields() {
    let tile = TileSample {
        id: "t-1".to_string(),
        display_name: "Tile".to_string(),
        width: 12.0,
        height: 24.0,
        area_ft2: 2.0,
        units: "inches".to_string(),
        timestamp: 42,
        preview_image_uri: None,
    };

    let json = serde_json::to_value(&tile).unwrap();
    assert_eq!(json["displayName"], "Tile");
    assert_eq!(json["areaFt2"], 2.0);
    assert_eq!(json["units"], "inches");
    assert!(json["previewImageUri"].is_null());
}

#[test]
fn record_kinds_use_separate_storage_slots() {
    assert_eq!(ProjectMeasurement::NAMESPACE, "project_measurements");
    assert_eq!(ProjectMeasurement::STORAGE_KEY, "projects");
    assert_eq!(TileSample::NAMESPACE, "tile_samples");
    assert_eq!(TileSample::STORAGE_KEY, "tile_samples");

    let project = ProjectMeasurement::new("abc", "x", 1.0, 0);
    assert_eq!(Record::id(&project), "abc");
}
