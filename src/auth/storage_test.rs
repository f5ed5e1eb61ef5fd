use super::*;
use std::cell::Cell;

fn counter() -> (Rc<Cell<u32>>, ChangeListener) {
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    (hits, Rc::new(move || hits_cb.set(hits_cb.get() + 1)))
}

#[test]
fn contexts_share_values() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_context();
    tab_a.set("k", "v").unwrap();
    assert_eq!(tab_b.get("k").as_deref(), Some("v"));
    tab_b.remove("k");
    assert_eq!(tab_a.get("k"), None);
}

#[test]
fn writes_notify_other_contexts_only() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_context();
    let (hits_a, listener_a) = counter();
    let (hits_b, listener_b) = counter();
    let _sub_a = tab_a.subscribe(listener_a);
    let _sub_b = tab_b.subscribe(listener_b);

    tab_a.set("k", "v").unwrap();
    assert_eq!(hits_a.get(), 0);
    assert_eq!(hits_b.get(), 1);

    tab_b.remove("k");
    assert_eq!(hits_a.get(), 1);
    assert_eq!(hits_b.get(), 1);
}

#[test]
fn unchanged_writes_and_missing_removes_are_silent() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_context();
    let (hits, listener) = counter();
    let _sub = tab_b.subscribe(listener);

    tab_a.set("k", "v").unwrap();
    tab_a.set("k", "v").unwrap();
    tab_a.remove("missing");
    assert_eq!(hits.get(), 1);
}

#[test]
fn dropping_subscription_stops_notifications() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_context();
    let (hits, listener) = counter();
    let sub = tab_b.subscribe(listener);
    tab_a.set("k", "1").unwrap();
    drop(sub);
    tab_a.set("k", "2").unwrap();
    assert_eq!(hits.get(), 1);
}

#[test]
fn listener_may_read_storage_while_notified() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_context();
    let seen = Rc::new(RefCell::new(None));
    let seen_cb = Rc::clone(&seen);
    let reader = tab_b.clone();
    let _sub = tab_b.subscribe(Rc::new(move || *seen_cb.borrow_mut() = reader.get("k")));
    tab_a.set("k", "fresh").unwrap();
    assert_eq!(seen.borrow().as_deref(), Some("fresh"));
}

#[test]
fn inert_subscription_drops_cleanly() {
    let sub = Subscription::inert();
    assert!(format!("{sub:?}").contains("false"));
    drop(sub);
}
