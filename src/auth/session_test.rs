use super::*;
use crate::auth::storage::MemoryStorage;
use std::cell::Cell;
use std::rc::Rc;

fn alice() -> UserProfile {
    UserProfile {
        name: "Alice".to_owned(),
        role: "Store Manager".to_owned(),
        email: "alice@example.com".to_owned(),
        phone: "+1 555 0100".to_owned(),
        photo: Some("https://img.example.com/alice.png".to_owned()),
    }
}

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
}

// =============================================================
// save / load / clear
// =============================================================

#[test]
fn load_returns_saved_session() {
    let store = store();
    let session = Session::new("abc", Some(alice()));
    store.save(&session).unwrap();
    assert_eq!(store.load(), Some(session));
}

#[test]
fn load_returns_saved_session_without_profile() {
    let store = store();
    let session = Session::new("abc", None);
    store.save(&session).unwrap();
    assert_eq!(store.load(), Some(session));
}

#[test]
fn save_overwrites_previous_session() {
    let store = store();
    store.save(&Session::new("old", Some(alice()))).unwrap();
    store.save(&Session::new("new", None)).unwrap();
    assert_eq!(store.load(), Some(Session::new("new", None)));
    assert_eq!(store.backend().get(PROFILE_KEY), None);
}

/// Memory storage that refuses writes to one key once armed.
struct FailingKey {
    inner: MemoryStorage,
    key: &'static str,
    armed: Cell<bool>,
}

impl StorageBackend for FailingKey {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.armed.get() && key == self.key {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }

    fn subscribe(&self, listener: crate::auth::storage::ChangeListener) -> crate::auth::storage::Subscription {
        self.inner.subscribe(listener)
    }
}

fn failing_on(key: &'static str) -> SessionStore<FailingKey> {
    SessionStore::new(FailingKey { inner: MemoryStorage::new(), key, armed: Cell::new(false) })
}

fn bob() -> UserProfile {
    UserProfile { name: "Bob".to_owned(), ..alice() }
}

#[test]
fn failed_token_write_leaves_no_mixed_session() {
    let store = failing_on(TOKEN_KEY);
    store.save(&Session::new("old", Some(alice()))).unwrap();
    store.backend().armed.set(true);

    assert!(store.save(&Session::new("new", Some(bob()))).is_err());
    assert_eq!(store.load(), None);
    assert_eq!(store.backend().get(PROFILE_KEY), None);
}

#[test]
fn failed_token_write_without_profile_clears_old_token() {
    let store = failing_on(TOKEN_KEY);
    store.save(&Session::new("old", Some(alice()))).unwrap();
    store.backend().armed.set(true);

    assert!(store.save(&Session::new("new", None)).is_err());
    assert_eq!(store.load(), None);
    assert_eq!(store.backend().get(TOKEN_KEY), None);
}

#[test]
fn failed_profile_write_clears_previous_session() {
    let store = failing_on(PROFILE_KEY);
    store.save(&Session::new("old", None)).unwrap();
    store.backend().armed.set(true);

    assert!(store.save(&Session::new("new", Some(bob()))).is_err());
    assert_eq!(store.load(), None);
}

#[test]
fn load_without_token_is_absent() {
    let store = store();
    store.backend().set(PROFILE_KEY, r#"{"name":"Alice"}"#).unwrap();
    assert_eq!(store.load(), None);
}

#[test]
fn empty_token_is_absent() {
    let store = store();
    store.backend().set(TOKEN_KEY, "").unwrap();
    assert_eq!(store.load(), None);
}

#[test]
fn load_after_clear_is_absent() {
    let store = store();
    store.save(&Session::new("abc", Some(alice()))).unwrap();
    store.clear();
    assert_eq!(store.load(), None);
    assert_eq!(store.backend().get(TOKEN_KEY), None);
    assert_eq!(store.backend().get(PROFILE_KEY), None);
}

#[test]
fn clear_is_idempotent() {
    let store = store();
    store.clear();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn token_reads_through_load() {
    let store = store();
    assert_eq!(store.token(), None);
    store.save(&Session::new("abc", None)).unwrap();
    assert_eq!(store.token().as_deref(), Some("abc"));
}

// =============================================================
// malformed profile data
// =============================================================

#[test]
fn malformed_profiles_degrade_to_no_session() {
    let cases = ["", "{", "not json", "null", "42", "\"alice\"", "[1,2]", r#"{"name":7}"#];
    for raw in cases {
        let store = store();
        store.backend().set(TOKEN_KEY, "abc").unwrap();
        store.backend().set(PROFILE_KEY, raw).unwrap();
        assert_eq!(store.load(), None, "profile {raw:?}");
        assert_eq!(store.backend().get(TOKEN_KEY), None, "token kept for {raw:?}");
        assert_eq!(store.backend().get(PROFILE_KEY), None, "profile kept for {raw:?}");
    }
}

#[test]
fn partial_profile_fills_defaults() {
    let store = store();
    store.backend().set(TOKEN_KEY, "abc").unwrap();
    store.backend().set(PROFILE_KEY, r#"{"name":"Alice","role":"","phone":null}"#).unwrap();
    let user = store.load().and_then(|s| s.user).unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.role, DEFAULT_ROLE);
    assert_eq!(user.email, DEFAULT_EMAIL);
    assert_eq!(user.phone, DEFAULT_PHONE);
    assert_eq!(user.photo, None);
    assert_eq!(user.avatar_url(), DEFAULT_AVATAR_URL);
}

#[test]
fn empty_object_profile_is_all_defaults() {
    assert_eq!(parse_profile("{}").unwrap(), UserProfile::default());
}

#[test]
fn profile_or_default_uses_placeholders() {
    let session = Session::new("abc", None);
    assert_eq!(session.profile_or_default(), UserProfile::default());
}

#[test]
fn serialized_profile_omits_missing_photo() {
    let user = UserProfile { photo: None, ..alice() };
    let raw = serde_json::to_string(&user).unwrap();
    assert!(!raw.contains("photo"));
}

// =============================================================
// cross-context visibility
// =============================================================

#[test]
fn other_context_sees_login_and_is_notified() {
    let tab_a = store();
    let tab_b = SessionStore::new(tab_a.backend().open_context());
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    let _sub = tab_b.subscribe(move || hits_cb.set(hits_cb.get() + 1));

    tab_a.save(&Session::new("abc", Some(alice()))).unwrap();
    assert!(hits.get() >= 1);
    assert_eq!(tab_b.load().map(|s| s.token).as_deref(), Some("abc"));
}

#[test]
fn other_context_observes_logout() {
    let tab_a = store();
    let tab_b = SessionStore::new(tab_a.backend().open_context());
    tab_a.save(&Session::new("abc", None)).unwrap();

    let present = Rc::new(Cell::new(true));
    let present_cb = Rc::clone(&present);
    let reader = tab_b.clone();
    let _sub = tab_b.subscribe(move || present_cb.set(reader.load().is_some()));

    tab_a.clear();
    assert!(!present.get());
}
