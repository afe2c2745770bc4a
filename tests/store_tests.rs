//! Store Tests
//!
//! Tests for typed access, key enumeration, deletion, and the
//! modification counter.

use std::collections::BTreeMap;

use flatkv::{Store, Value};

// =============================================================================
// Typed Access Tests
// =============================================================================

#[test]
fn test_set_get_basic_types() {
    let mut store = Store::new();
    store.set("int", 42i64).unwrap();
    store.set("uint", 7u32).unwrap();
    store.set("float", 2.5f64).unwrap();
    store.set("bool", true).unwrap();
    store.set("str", "hello").unwrap();

    assert_eq!(store.get::<i64>("int").unwrap(), Some(42));
    assert_eq!(store.get::<u32>("uint").unwrap(), Some(7));
    assert_eq!(store.get::<f64>("float").unwrap(), Some(2.5));
    assert_eq!(store.get::<bool>("bool").unwrap(), Some(true));
    assert_eq!(store.get::<String>("str").unwrap(), Some("hello".to_string()));
}

#[test]
fn test_last_set_wins() {
    let mut store = Store::new();
    store.set("key", 1i64).unwrap();
    store.set("key", "two").unwrap();

    assert_eq!(store.get::<i64>("key").unwrap(), None);
    assert_eq!(store.get::<String>("key").unwrap(), Some("two".to_string()));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_get_absent_key() {
    let store = Store::new();
    assert_eq!(store.get::<i64>("missing").unwrap(), None);
}

#[test]
fn test_get_mismatched_type_is_none() {
    let mut store = Store::new();
    store.set("int", 42i64).unwrap();

    // Probing with the wrong destination shape is not an error
    assert_eq!(store.get::<String>("int").unwrap(), None);
    assert_eq!(store.get::<bool>("int").unwrap(), None);
    // The right shape still works afterwards
    assert_eq!(store.get::<i64>("int").unwrap(), Some(42));
}

#[test]
fn test_set_rejects_non_finite_float() {
    let mut store = Store::new();
    assert!(store.set("nan", f64::NAN).is_err());
    // Failed set leaves no trace
    assert_eq!(store.len(), 0);
    assert_eq!(store.mod_count(), 0);
}

#[test]
fn test_set_map_value() {
    let mut store = Store::new();
    let mut map = BTreeMap::new();
    map.insert("foo".to_string(), "bar".to_string());
    map.insert("foobar".to_string(), String::new());
    store.set("m", map.clone()).unwrap();

    assert_eq!(store.get::<BTreeMap<String, String>>("m").unwrap(), Some(map));
}

// =============================================================================
// Key Enumeration Tests
// =============================================================================

#[test]
fn test_key_set_sorted() {
    let mut store = Store::new();
    store.set("b", 2i64).unwrap();
    store.set("a", 1i64).unwrap();
    store.set("c", 3i64).unwrap();

    assert_eq!(store.key_set(), vec!["a", "b", "c"]);
}

#[test]
fn test_key_set_is_a_snapshot() {
    let mut store = Store::new();
    store.set("a", 1i64).unwrap();
    store.set("b", 2i64).unwrap();

    let snapshot = store.key_set();
    store.delete_all();

    assert_eq!(snapshot, vec!["a", "b"]);
    assert!(store.key_set().is_empty());
}

#[test]
fn test_contains_key() {
    let mut store = Store::new();
    store.set("present", 1i64).unwrap();

    assert!(store.contains_key("present"));
    assert!(!store.contains_key("absent"));
}

// =============================================================================
// Deletion Tests
// =============================================================================

#[test]
fn test_delete_single_key() {
    let mut store = Store::new();
    store.set("a", 1i64).unwrap();

    assert!(store.delete("a"));
    assert_eq!(store.get::<i64>("a").unwrap(), None);
    assert!(!store.delete("a"));
}

#[test]
fn test_delete_all_empties_store() {
    let mut store = Store::new();
    store.set("a", 1i64).unwrap();
    store.set("b", "two").unwrap();

    store.delete_all();

    assert!(store.key_set().is_empty());
    assert!(store.is_empty());
    assert_eq!(store.get::<i64>("a").unwrap(), None);
    assert_eq!(store.get::<String>("b").unwrap(), None);
}

// =============================================================================
// Modification Counter Tests
// =============================================================================

#[test]
fn test_counter_strictly_increases_on_mutation() {
    let mut store = Store::new();
    let c0 = store.mod_count();

    store.set("a", 1i64).unwrap();
    let c1 = store.mod_count();
    assert!(c1 > c0);

    store.set("a", 2i64).unwrap();
    let c2 = store.mod_count();
    assert!(c2 > c1);

    store.delete_all();
    assert!(store.mod_count() > c2);
}

#[test]
fn test_reads_do_not_move_counter() {
    let mut store = Store::new();
    store.set("a", 1i64).unwrap();
    let before = store.mod_count();

    let _ = store.get::<i64>("a").unwrap();
    let _ = store.get::<String>("a").unwrap();
    let _ = store.key_set();
    let _ = store.contains_key("a");
    let _: Vec<_> = store.typed_entries::<i64>().collect();

    assert_eq!(store.mod_count(), before);
}

#[test]
fn test_delete_absent_key_does_not_move_counter() {
    let mut store = Store::new();
    let before = store.mod_count();
    assert!(!store.delete("missing"));
    assert_eq!(store.mod_count(), before);
}

#[test]
fn test_delete_all_on_empty_store_still_counts() {
    let mut store = Store::new();
    let before = store.mod_count();
    store.delete_all();
    // An explicit clear is recorded even when nothing was there
    assert_eq!(store.mod_count(), before + 1);
}

#[test]
fn test_delete_all_counts_once_regardless_of_size() {
    let mut store = Store::new();
    for i in 0..10 {
        store.set(&format!("k{}", i), i as i64).unwrap();
    }
    let before = store.mod_count();
    store.delete_all();
    assert_eq!(store.mod_count(), before + 1);
}

// =============================================================================
// Typed Iteration Tests
// =============================================================================

#[test]
fn test_typed_entries_filters_by_shape() {
    let mut store = Store::new();
    store.set("int:1", 1i64).unwrap();
    store.set("int:2", 2i64).unwrap();
    store.set("str:1", "one").unwrap();
    store.set("bool:1", true).unwrap();

    let ints: Vec<(&str, i64)> = store.typed_entries::<i64>().collect();
    assert_eq!(ints, vec![("int:1", 1), ("int:2", 2)]);

    let strings: Vec<(&str, String)> = store.typed_entries::<String>().collect();
    assert_eq!(strings, vec![("str:1", "one".to_string())]);
}

#[test]
fn test_typed_entries_restartable() {
    let mut store = Store::new();
    store.set("a", 1i64).unwrap();
    store.set("b", 2i64).unwrap();

    let first: Vec<(&str, i64)> = store.typed_entries().collect();
    let second: Vec<(&str, i64)> = store.typed_entries().collect();
    assert_eq!(first, second);
}

#[test]
fn test_typed_entries_identity_destination_sees_everything() {
    let mut store = Store::new();
    store.set("a", 1i64).unwrap();
    store.set("b", "two").unwrap();
    store.set("c", false).unwrap();

    let all: Vec<(&str, Value)> = store.typed_entries::<Value>().collect();
    assert_eq!(all.len(), 3);
}
