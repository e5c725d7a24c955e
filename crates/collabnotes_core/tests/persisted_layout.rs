use collabnotes_core::{Category, NoteRecord, NoteStore};
use serde_json::{json, Value};
use uuid::Uuid;

#[test]
fn record_serializes_with_host_field_names() {
    let id = Uuid::nil();
    let mut record = NoteRecord::new(id, "Cube", "T", "D", Category::High);
    record.edit_flag = true;

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "object_id": "00000000-0000-0000-0000-000000000000",
            "object_reference": "Cube",
            "note_title": "T",
            "note_description": "D",
            "category": "High",
            "is_edit_mode": true,
        })
    );
}

#[test]
fn no_category_serializes_with_a_space() {
    let record = NoteRecord::new(Uuid::nil(), "Cube", "T", "D", Category::NoCategory);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["category"], Value::from("No Category"));
}

#[test]
fn record_roundtrips_through_the_document_format() {
    let record = NoteRecord::new(Uuid::new_v4(), "Lamp", "T", "D", Category::Medium);
    let text = serde_json::to_string(&record).unwrap();
    let parsed: NoteRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn missing_edit_flag_defaults_to_false_on_load() {
    let value = json!({
        "object_id": Uuid::new_v4().to_string(),
        "object_reference": "Cube",
        "note_title": "T",
        "note_description": "D",
        "category": "Low",
    });
    let parsed: NoteRecord = serde_json::from_value(value).unwrap();
    assert!(!parsed.edit_flag);
}

#[test]
fn store_serializes_transparently_as_a_record_sequence() {
    let mut store = NoteStore::new();
    store.add(NoteRecord::new(Uuid::nil(), "Cube", "a", "1", Category::Low));
    store.add(NoteRecord::new(Uuid::nil(), "Lamp", "b", "2", Category::High));

    let value = serde_json::to_value(&store).unwrap();
    let items = value.as_array().expect("store should serialize as an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["note_title"], Value::from("a"));
    assert_eq!(items[1]["object_reference"], Value::from("Lamp"));

    let reloaded: NoteStore = serde_json::from_value(value).unwrap();
    assert_eq!(reloaded, store);
}
