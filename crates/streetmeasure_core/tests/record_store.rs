use std::cell::Cell;
use streetmeasure_core::db::{open_db, open_db_in_memory};
use streetmeasure_core::{
    KeyValueStore, KvError, KvResult, MeasurementCatalog, MemoryKeyValueStore, Point3,
    ProjectMeasurement, RecordStore, SqliteKeyValueStore, TileSample,
};

fn project(id: &str, area_ft2: f32) -> ProjectMeasurement {
    let mut project =
        ProjectMeasurement::new(id, format!("Project {id}"), area_ft2, 1_700_000_000_000);
    project.preview_image_uri = Some(format!("/screenshots/{id}.jpg"));
    project.polygon_points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.5, 0.0, 0.0),
        Point3::new(1.5, 0.0, 2.0),
    ];
    project
}

fn tile(id: &str) -> TileSample {
    TileSample {
        id: id.to_string(),
        display_name: format!("Tile {id}"),
        width: 12.0,
        height: 24.0,
        area_ft2: 2.0,
        units: "inches".to_string(),
        timestamp: 1_700_000_000_000,
        preview_image_uri: None,
    }
}

/// Provider whose reads work but whose writes always fail.
struct ReadOnlyStore {
    inner: MemoryKeyValueStore,
    failed_writes: Cell<u32>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        self.inner.get(key)
    }

    fn put(&self, _key: &str, _value: &str) -> KvResult<()> {
        self.failed_writes.set(self.failed_writes.get() + 1);
        Err(KvError::Unavailable("read-only".to_string()))
    }
}

#[test]
fn add_then_get_returns_equal_record() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<ProjectMeasurement, _>::init(&kv);

    let record = project("p-1", 120.5);
    let returned = store.add(record.clone());
    assert_eq!(returned, record);

    let loaded = store.get_by_id("p-1").unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn list_preserves_insertion_order() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<ProjectMeasurement, _>::init(&kv);
    store.add(project("c", 3.0));
    store.add(project("a", 1.0));
    store.add(project("b", 2.0));

    let ids: Vec<String> = store.list().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn list_returns_a_detached_snapshot() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<ProjectMeasurement, _>::init(&kv);
    store.add(project("a", 1.0));

    let mut snapshot = store.list();
    snapshot.clear();
    assert_eq!(store.len(), 1);
}

#[test]
fn get_by_unknown_id_is_none() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<TileSample, _>::init(&kv);
    store.add(tile("t-1"));

    assert!(store.get_by_id("t-2").is_none());
}

#[test]
fn delete_existing_removes_exactly_one() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<TileSample, _>::init(&kv);
    store.add(tile("t-1"));
    store.add(tile("t-2"));

    assert!(store.delete("t-1"));
    assert!(store.get_by_id("t-1").is_none());
    assert_eq!(store.list().len(), 1);

    let reloaded = RecordStore::<TileSample, _>::init(&kv);
    assert_eq!(reloaded.list(), vec![tile("t-2")]);
}

#[test]
fn delete_missing_returns_false_and_keeps_list() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<TileSample, _>::init(&kv);
    store.add(tile("t-1"));
    let before = store.list();

    assert!(!store.delete("nope"));
    assert_eq!(store.list(), before);
}

#[test]
fn delete_missing_does_not_write() {
    let provider = ReadOnlyStore {
        inner: MemoryKeyValueStore::new(),
        failed_writes: Cell::new(0),
    };
    let mut store = RecordStore::<TileSample, _>::init(&provider);

    assert!(!store.delete("nope"));
    assert_eq!(provider.failed_writes.get(), 0);
}

#[test]
fn fresh_init_sees_persisted_records() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<ProjectMeasurement, _>::init(&kv);
    store.add(project("a", 1.0));
    store.add(project("b", 2.0));
    let before = store.list();

    let reloaded = RecordStore::<ProjectMeasurement, _>::init(&kv);
    assert_eq!(reloaded.list(), before);
}

#[test]
fn clear_empties_memory_and_storage() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<ProjectMeasurement, _>::init(&kv);
    store.add(project("a", 1.0));

    store.clear();
    assert!(store.list().is_empty());
    assert_eq!(kv.get("projects").unwrap().as_deref(), Some("[]"));

    let reloaded = RecordStore::<ProjectMeasurement, _>::init(&kv);
    assert!(reloaded.list().is_empty());
}

#[test]
fn clear_on_empty_store_still_persists() {
    let kv = MemoryKeyValueStore::new();
    let mut store = RecordStore::<ProjectMeasurement, _>::init(&kv);
    assert!(kv.is_empty());

    store.clear();
    assert_eq!(kv.get("projects").unwrap().as_deref(), Some("[]"));
}

#[test]
fn corrupt_snapshot_loads_as_empty() {
    let kv = MemoryKeyValueStore::new();
    kv.put("projects", "{not json").unwrap();

    let mut store = RecordStore::<ProjectMeasurement, _>::init(&kv);
    assert!(store.is_empty());

    store.add(project("a", 1.0));
    let reloaded = RecordStore::<ProjectMeasurement, _>::init(&kv);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn write_failures_do_not_fail_operations() {
    let provider = ReadOnlyStore {
        inner: MemoryKeyValueStore::new(),
        failed_writes: Cell::new(0),
    };
    let mut store = RecordStore::<ProjectMeasurement, _>::init(&provider);

    let record = store.add(project("a", 1.0));
    assert_eq!(record.id, "a");
    assert_eq!(store.len(), 1);
    assert!(store.delete("a"));
    store.clear();
    assert_eq!(provider.failed_writes.get(), 3);

    store.add(project("b", 1.0));
    store.reload();
    assert!(store.is_empty());
}

#[test]
fn existing_camel_case_snapshot_loads() {
    let kv = MemoryKeyValueStore::new();
    kv.put(
        "projects",
        r#"[{"id":"legacy","displayName":"Project - Mar 04, 2024 09:05","areaFt2":42.5,"timestamp":1709543100000,"previewImageUri":null,"polygonPoints":[{"x":0.0,"y":0.0,"z":0.0},{"x":1.0,"y":0.0,"z":1.0}]},{"id":"minimal","displayName":"Old","areaFt2":1.0,"timestamp":1}]"#,
    )
    .unwrap();
    kv.put(
        "tile_samples",
        r#"[{"id":"t","displayName":"Tile","width":12.0,"height":24.0,"areaFt2":2.0,"units":"inches","timestamp":5}]"#,
    )
    .unwrap();

    let projects = RecordStore::<ProjectMeasurement, _>::init(&kv);
    let legacy = projects.get_by_id("legacy").unwrap();
    assert_eq!(legacy.area_ft2, 42.5);
    assert_eq!(legacy.polygon_points.len(), 2);
    let minimal = projects.get_by_id("minimal").unwrap();
    assert_eq!(minimal.preview_image_uri, None);
    assert!(minimal.polygon_points.is_empty());

    let tiles = RecordStore::<TileSample, _>::init(&kv);
    assert_eq!(tiles.get_by_id("t").unwrap().units, "inches");
}

#[test]
fn sqlite_store_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("streetmeasure.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let provider = SqliteKeyValueStore::new(&conn, "project_measurements");
        let mut store = RecordStore::<ProjectMeasurement, _>::init(provider);
        store.add(project("a", 1.0));
        store.add(project("b", 2.0));
        assert!(store.delete("a"));
    }

    let conn = open_db(&path).unwrap();
    let provider = SqliteKeyValueStore::new(&conn, "project_measurements");
    let store = RecordStore::<ProjectMeasurement, _>::init(provider);
    assert_eq!(store.list(), vec![project("b", 2.0)]);
}

#[test]
fn sqlite_namespaces_are_isolated() {
    let conn = open_db_in_memory().unwrap();
    let first = SqliteKeyValueStore::new(&conn, "first");
    let second = SqliteKeyValueStore::new(&conn, "second");

    first.put("k", "one").unwrap();
    assert_eq!(second.get("k").unwrap(), None);

    second.put("k", "two").unwrap();
    first.put("k", "uno").unwrap();
    assert_eq!(first.get("k").unwrap().as_deref(), Some("uno"));
    assert_eq!(second.get("k").unwrap().as_deref(), Some("two"));
    assert_eq!(first.namespace(), "first");
}

#[test]
fn catalog_keeps_collections_independent() {
    let conn = open_db_in_memory().unwrap();
    let mut catalog = MeasurementCatalog::open_sqlite(&conn);

    catalog.projects_mut().add(project("shared-id", 10.0));
    catalog.tile_samples_mut().add(tile("shared-id"));
    assert!(catalog.projects_mut().delete("shared-id"));

    assert!(catalog.projects().is_empty());
    assert_eq!(catalog.tile_samples().len(), 1);

    catalog.reload();
    assert!(catalog.projects().is_empty());
    assert_eq!(catalog.tile_samples().list(), vec![tile("shared-id")]);

    let reopened = MeasurementCatalog::open_sqlite(&conn);
    assert_eq!(reopened.tile_samples().len(), 1);
}
