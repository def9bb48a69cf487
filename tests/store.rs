use sentilog::store::{PredictionLog, PredictionStore};
use sentilog::Sentiment;
use tempfile::TempDir;

fn temp_store() -> (PredictionStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = PredictionStore::with_path(dir.path().join("predictions.json"));
    (store, dir)
}

#[test]
fn load_all_on_absent_file_is_empty() {
    let (store, _dir) = temp_store();
    assert!(store.load_all().is_empty());
    assert!(store.records().is_empty());
}

#[test]
fn first_append_assigns_id_one_and_writes_expected_json() {
    let (store, _dir) = temp_store();

    let record = store.append("I love this", Sentiment::Positive).unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.text, "I love this");
    assert_eq!(record.sentiment, Sentiment::Positive);

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!({ "1": ["I love this", "Positive"] })
    );
}

#[test]
fn appends_assign_contiguous_ids_in_order() {
    let (store, _dir) = temp_store();

    for (i, text) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        let record = store.append(text, Sentiment::Neutral).unwrap();
        assert_eq!(record.id, i as u64 + 1);
    }

    let log = store.load_all();
    assert_eq!(log.len(), 5);
    assert_eq!(log.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn append_is_visible_to_load_all() {
    let (store, _dir) = temp_store();

    let record = store.append("nice weather", Sentiment::Neutral).unwrap();

    let log = store.load_all();
    let (text, sentiment) = log.get(&record.id).unwrap();
    assert_eq!(text, "nice weather");
    assert_eq!(*sentiment, Sentiment::Neutral);
}

#[test]
fn append_extends_existing_log_without_touching_prior_entries() {
    let (store, _dir) = temp_store();
    std::fs::write(
        store.path(),
        r#"{"1": ["a", "Positive"], "2": ["b", "Negative"]}"#,
    )
    .unwrap();

    let record = store.append("c", Sentiment::Neutral).unwrap();
    assert_eq!(record.id, 3);

    let log = store.load_all();
    assert_eq!(log.len(), 3);
    assert_eq!(log.get(&1).unwrap(), &("a".to_string(), Sentiment::Positive));
    assert_eq!(log.get(&2).unwrap(), &("b".to_string(), Sentiment::Negative));
    assert_eq!(log.get(&3).unwrap(), &("c".to_string(), Sentiment::Neutral));
}

#[test]
fn log_round_trips_through_disk() {
    let (store, _dir) = temp_store();

    store.append("first", Sentiment::Positive).unwrap();
    store.append("second", Sentiment::Negative).unwrap();
    let written = store.load_all();

    let reread: PredictionLog =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(written, reread);
}

#[test]
fn malformed_file_is_treated_as_empty_and_ids_restart_at_one() {
    let (store, _dir) = temp_store();
    std::fs::write(store.path(), "not json {{{").unwrap();

    assert!(store.load_all().is_empty());

    let record = store.append("fresh start", Sentiment::Positive).unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(store.load_all().len(), 1);
}

#[test]
fn append_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let store = PredictionStore::with_path(dir.path().join("nested").join("predictions.json"));

    let record = store.append("hello", Sentiment::Positive).unwrap();
    assert_eq!(record.id, 1);
    assert!(store.path().exists());
}

#[test]
fn unwritable_path_surfaces_persistence_error() {
    let dir = TempDir::new().unwrap();
    // The backing path is a directory, so the write must fail.
    let store = PredictionStore::with_path(dir.path());

    let err = store.append("hello", Sentiment::Positive).unwrap_err();
    assert!(matches!(err, sentilog::error::AppError::Persistence(_)));
}

#[test]
fn records_are_ordered_by_id() {
    let (store, _dir) = temp_store();

    store.append("x", Sentiment::Negative).unwrap();
    store.append("y", Sentiment::Neutral).unwrap();
    store.append("z", Sentiment::Positive).unwrap();

    let records = store.records();
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(records[2].text, "z");
}
