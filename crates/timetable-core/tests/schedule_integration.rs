//! Integration tests driving the store, layout, and statistics together,
//! the way the CLI does.

use timetable_core::{
    stats, ClassEntryDraft, DisplayWindow, FileStore, MemoryStore, PersistenceAdapter,
    ScheduleError, ScheduleStore, Weekday,
};

fn draft(name: &str, day: Weekday, start: &str, end: &str) -> ClassEntryDraft {
    ClassEntryDraft {
        name: name.into(),
        day,
        start_time: start.into(),
        end_time: end.into(),
        ..Default::default()
    }
}

#[test]
fn back_to_back_monday_classes_then_overlap_rejected() {
    let mut store = ScheduleStore::load(MemoryStore::new()).unwrap();

    store
        .upsert(draft("Algebra", Weekday::Monday, "09:00", "10:00"))
        .unwrap();
    store
        .upsert(draft("Physics", Weekday::Monday, "10:00", "11:00"))
        .unwrap();

    let err = store
        .upsert(draft("Chemistry", Weekday::Monday, "09:30", "10:30"))
        .unwrap_err();
    assert!(matches!(err, ScheduleError::TimeConflict { .. }));
    assert_eq!(store.len(), 2);
}

#[test]
fn two_one_hour_classes_give_two_weekly_hours() {
    let mut store = ScheduleStore::load(MemoryStore::new()).unwrap();
    store
        .upsert(draft("Algebra", Weekday::Monday, "09:00", "10:00"))
        .unwrap();
    store
        .upsert(draft("History", Weekday::Tuesday, "14:00", "15:00"))
        .unwrap();

    let entries = store.all();
    assert_eq!(stats::total_classes(&entries), 2);
    assert!((stats::weekly_hours(&entries) - 2.0).abs() < f64::EPSILON);
}

#[test]
fn next_class_walks_through_a_monday() {
    let mut store = ScheduleStore::load(MemoryStore::new()).unwrap();
    store
        .upsert(draft("Algebra", Weekday::Monday, "09:00", "10:00"))
        .unwrap();
    store
        .upsert(draft("Physics", Weekday::Monday, "11:00", "12:00"))
        .unwrap();
    store
        .upsert(draft("History", Weekday::Tuesday, "09:00", "10:00"))
        .unwrap();

    let entries = store.all();
    let monday = Weekday::Monday;
    assert_eq!(
        stats::next_class(&entries, monday, 8 * 60 + 30).as_deref(),
        Some("09:00")
    );
    assert_eq!(
        stats::next_class(&entries, monday, 9 * 60 + 30).as_deref(),
        Some("11:00")
    );
    // After both: None even though Tuesday has a class.
    assert_eq!(stats::next_class(&entries, monday, 12 * 60), None);
}

#[test]
fn day_view_layout_from_store_query() {
    let mut store = ScheduleStore::load(MemoryStore::new()).unwrap();
    store
        .upsert(draft("Physics", Weekday::Wednesday, "13:00", "14:30"))
        .unwrap();
    store
        .upsert(draft("Algebra", Weekday::Wednesday, "09:00", "10:00"))
        .unwrap();

    let window = DisplayWindow::default();
    let blocks = window
        .day_layout(&store.find_by_day(Weekday::Wednesday))
        .unwrap();

    assert_eq!(blocks.len(), 2);
    // Chronological order regardless of insertion order.
    assert_eq!(blocks[0].top, 60);
    assert_eq!(blocks[0].height, 60);
    assert_eq!(blocks[1].top, 300);
    assert_eq!(blocks[1].height, 90);
}

#[test]
fn schedule_survives_a_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classes.json");

    {
        let mut store = ScheduleStore::load(FileStore::at_path(path.clone())).unwrap();
        store
            .upsert(draft("Algebra", Weekday::Monday, "09:00", "10:00"))
            .unwrap();
        let removed = store
            .upsert(draft("Physics", Weekday::Friday, "14:00", "15:00"))
            .unwrap();
        store.delete_by_id(&removed.id).unwrap();
    }

    let reloaded = ScheduleStore::load(FileStore::at_path(path)).unwrap();
    assert_eq!(reloaded.len(), 1);
    let entry = &reloaded.find_by_day(Weekday::Monday)[0];
    assert_eq!(entry.name, "Algebra");
}

#[test]
fn persisted_blob_uses_stable_field_names() {
    let adapter = std::rc::Rc::new(MemoryStore::new());
    let mut store = ScheduleStore::load(adapter.clone()).unwrap();
    store
        .upsert(draft("Algebra", Weekday::Monday, "09:00", "10:00"))
        .unwrap();

    let blob = adapter.load().unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let first = &json.as_array().unwrap()[0];
    assert_eq!(first["startTime"], "09:00");
    assert_eq!(first["endTime"], "10:00");
    assert_eq!(first["day"], "monday");
    assert!(first["id"].is_string());
}
