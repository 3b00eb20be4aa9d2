use melostore::Store;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    label: String,
    value: i64,
}

fn record(label: &str, value: i64) -> Record {
    Record {
        label: label.to_string(),
        value,
    }
}

/// Crée un store temporaire pour les tests
fn create_test_store() -> (TempDir, Store<Record>) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = Store::open(&db_path, "records").unwrap();
    (temp_dir, store)
}

#[test]
fn test_open() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("nested").join("test.db");

    // Le répertoire parent est créé à l'ouverture
    let store: Result<Store<Record>, _> = Store::open(&db_path, "records");
    assert!(store.is_ok());
    assert!(db_path.exists());
}

#[test]
fn test_insert_and_get() {
    let (_temp_dir, store) = create_test_store();

    let result = store.insert("key-1", &record("hello", 42));
    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    let entry = store.get("key-1").unwrap();
    assert_eq!(entry, Some(record("hello", 42)));
}

#[test]
fn test_get_missing() {
    let (_temp_dir, store) = create_test_store();

    assert_eq!(store.get("absent").unwrap(), None);
}

#[test]
fn test_insert_returns_previous() {
    let (_temp_dir, store) = create_test_store();

    store.insert("key-1", &record("first", 1)).unwrap();

    // Remplacer la valeur : l'ancienne est retournée
    let previous = store.insert("key-1", &record("second", 2)).unwrap();
    assert_eq!(previous, Some(record("first", 1)));

    let entry = store.get("key-1").unwrap();
    assert_eq!(entry, Some(record("second", 2)));
}

#[test]
fn test_remove() {
    let (_temp_dir, store) = create_test_store();

    store.insert("key-1", &record("hello", 42)).unwrap();

    let removed = store.remove("key-1").unwrap();
    assert_eq!(removed, Some(record("hello", 42)));

    // La clé n'existe plus
    assert_eq!(store.get("key-1").unwrap(), None);

    // Supprimer une clé absente n'est pas une erreur
    assert_eq!(store.remove("key-1").unwrap(), None);
}

#[test]
fn test_values_in_key_order() {
    let (_temp_dir, store) = create_test_store();

    // Insérer dans le désordre
    store.insert("charlie", &record("c", 3)).unwrap();
    store.insert("alpha", &record("a", 1)).unwrap();
    store.insert("bravo", &record("b", 2)).unwrap();

    // L'itération suit l'ordre lexicographique des clés
    let values = store.values().unwrap();
    let labels: Vec<&str> = values.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
}

#[test]
fn test_count() {
    let (_temp_dir, store) = create_test_store();

    assert_eq!(store.count().unwrap(), 0);

    store.insert("key-1", &record("a", 1)).unwrap();
    store.insert("key-2", &record("b", 2)).unwrap();
    assert_eq!(store.count().unwrap(), 2);

    store.remove("key-1").unwrap();
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_persistence_across_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("test.db");

    {
        let store: Store<Record> = Store::open(&db_path, "records").unwrap();
        store.insert("key-1", &record("persisted", 7)).unwrap();
    }

    // Rouvrir le même fichier : les enregistrements sont toujours là
    let store: Store<Record> = Store::open(&db_path, "records").unwrap();
    assert_eq!(store.get("key-1").unwrap(), Some(record("persisted", 7)));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_independent_tables() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("test.db");

    // Deux collections sur le même fichier, chacune sa table
    let first: Store<Record> = Store::open(&db_path, "first").unwrap();
    let second: Store<Record> = Store::open(&db_path, "second").unwrap();

    first.insert("key-1", &record("a", 1)).unwrap();

    assert_eq!(second.get("key-1").unwrap(), None);
    assert_eq!(second.count().unwrap(), 0);
}
