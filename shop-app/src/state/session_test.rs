use super::*;

use std::sync::Arc;

use crate::net::types::ShopUser;
use crate::util::storage::{MemoryStorage, Storage};

fn shopper(nickname: &str) -> ShopUser {
    ShopUser {
        id: 7,
        phone: "13800000000".to_owned(),
        nickname: nickname.to_owned(),
        ..ShopUser::default()
    }
}

// =============================================================
// set / get
// =============================================================

#[test]
fn getters_return_last_set_values() {
    let store = SessionStore::load(Arc::new(MemoryStorage::default()));

    store.set_session(shopper("first"), "token-1");
    store.set_session(shopper("second"), "token-2");

    assert_eq!(store.token().as_deref(), Some("token-2"));
    assert_eq!(store.user().map(|u| u.nickname), Some("second".to_owned()));
    assert!(store.is_authenticated());
}

#[test]
fn fresh_store_is_logged_out() {
    let store = SessionStore::load(Arc::new(MemoryStorage::default()));

    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn empty_token_reads_as_logged_out() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::load(Arc::clone(&storage) as Arc<dyn Storage>);

    store.set_session(shopper("ghost"), "");

    assert!(store.token().is_none());
    assert!(!store.is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
}

#[test]
fn set_user_keeps_the_token() {
    let store = SessionStore::load(Arc::new(MemoryStorage::default()));
    store.set_session(shopper("before"), "token-1");

    store.set_user(shopper("after"));

    assert_eq!(store.token().as_deref(), Some("token-1"));
    assert_eq!(store.user().map(|u| u.nickname), Some("after".to_owned()));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_resets_fields_and_storage() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::load(Arc::clone(&storage) as Arc<dyn Storage>);
    store.set_session(shopper("alice"), "token-1");

    store.clear();

    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================
// boot-time load
// =============================================================

#[test]
fn boot_reads_persisted_session() {
    let storage = Arc::new(MemoryStorage::default());
    {
        let store = SessionStore::load(Arc::clone(&storage) as Arc<dyn Storage>);
        store.set_session(shopper("alice"), "token-1");
    }

    let rebooted = SessionStore::load(storage);

    assert_eq!(rebooted.token().as_deref(), Some("token-1"));
    assert_eq!(rebooted.user().map(|u| u.nickname), Some("alice".to_owned()));
}

#[test]
fn corrupt_user_record_is_dropped() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(TOKEN_KEY, "token-1");
    storage.set(USER_KEY, "{not valid json");

    let store = SessionStore::load(Arc::clone(&storage) as Arc<dyn Storage>);

    assert_eq!(store.token().as_deref(), Some("token-1"));
    assert!(store.user().is_none());
    assert!(storage.get(USER_KEY).is_none());
}
