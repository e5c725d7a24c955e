use collabnotes_core::{Category, CategoryFilter, NoteRecord, NoteStore, StoreError};
use uuid::Uuid;

fn record(title: &str, category: Category) -> NoteRecord {
    NoteRecord::new(Uuid::new_v4(), "Cube", title, "body", category)
}

#[test]
fn unfiltered_view_preserves_insertion_order() {
    let mut store = NoteStore::new();
    for title in ["first", "second", "third"] {
        store.add(record(title, Category::Medium));
    }

    let titles: Vec<&str> = store
        .filtered_view(CategoryFilter::All)
        .map(|(_, note)| note.title.as_str())
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn filtered_view_keeps_original_indices_and_relative_order() {
    let mut store = NoteStore::new();
    store.add(record("a", Category::High));
    store.add(record("b", Category::Low));
    store.add(record("c", Category::High));
    store.add(record("d", Category::NoCategory));

    let highs: Vec<(usize, &str)> = store
        .filtered_view(CategoryFilter::High)
        .map(|(index, note)| (index, note.title.as_str()))
        .collect();
    assert_eq!(highs, vec![(0, "a"), (2, "c")]);

    let uncategorized: Vec<usize> = store
        .filtered_view(CategoryFilter::NoCategory)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(uncategorized, vec![3]);
}

#[test]
fn remove_shifts_subsequent_records_down() {
    let mut store = NoteStore::new();
    store.add(record("a", Category::Low));
    store.add(record("b", Category::Low));
    store.add(record("c", Category::Low));

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.title, "b");
    assert_eq!(store.get(1).unwrap().title, "c");
    assert_eq!(store.len(), 2);
}

#[test]
fn out_of_range_access_fails_fast() {
    let mut store = NoteStore::new();
    assert_eq!(
        store.remove(0),
        Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
    );

    store.add(record("only", Category::High));
    assert_eq!(
        store.get(1).unwrap_err(),
        StoreError::IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(
        store.remove(5),
        Err(StoreError::IndexOutOfRange { index: 5, len: 1 })
    );
}

#[test]
fn add_after_remove_reuses_positions() {
    let mut store = NoteStore::new();
    store.add(record("a", Category::Low));
    store.add(record("b", Category::Low));
    store.remove(0).unwrap();

    let index = store.add(record("c", Category::Low));
    assert_eq!(index, 1);
    assert_eq!(store.get(0).unwrap().title, "b");
}
