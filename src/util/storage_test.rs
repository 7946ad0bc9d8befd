use super::*;

// =============================================================
// MemoryCredentialStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryCredentialStore::new();
    assert!(store.load().is_none());
}

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryCredentialStore::new();
    store.save("tok-1");
    assert_eq!(store.load().as_deref(), Some("tok-1"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryCredentialStore::with_token("tok-1");
    store.clear();
    assert!(store.load().is_none());
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryCredentialStore::new();
    store.clear();
    store.clear();
    assert!(store.load().is_none());
}
