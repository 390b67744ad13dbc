use super::*;

// =============================================================================
// MemoryStorage basics
// =============================================================================

#[test]
fn get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn set_then_get_round_trips() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc123");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc123"));
}

#[test]
fn set_overwrites_previous_value() {
    let storage = MemoryStorage::new();
    storage.set(ROLE_KEY, "guest");
    storage.set(ROLE_KEY, "admin");
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("admin"));
}

#[test]
fn remove_deletes_only_that_key() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t");
    storage.set(EMAIL_KEY, "a@b.c");
    storage.remove(TOKEN_KEY);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(EMAIL_KEY).as_deref(), Some("a@b.c"));
}

#[test]
fn remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("nope");
    assert!(storage.is_empty());
}

#[test]
fn clear_removes_everything() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t");
    storage.set(ROLE_KEY, "guest");
    storage.set("unrelated", "value");
    storage.clear();
    assert!(storage.is_empty());
}

#[test]
fn len_counts_entries() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.len(), 0);
    storage.set(TOKEN_KEY, "t");
    storage.set(ROLE_KEY, "guest");
    assert_eq!(storage.len(), 2);
}
