use super::*;

#[test]
fn fresh_ticket_is_current() {
    let latest = LatestRequest::new();
    let ticket = latest.issue();
    assert!(latest.is_current(ticket));
}

#[test]
fn newer_ticket_supersedes_older() {
    let latest = LatestRequest::new();
    let first = latest.issue();
    let second = latest.issue();
    assert!(!latest.is_current(first));
    assert!(latest.is_current(second));
}

#[test]
fn out_of_order_completion_applies_only_latest() {
    let latest = LatestRequest::new();
    let slow = latest.issue();
    let fast = latest.issue();
    let mut applied = Vec::new();
    for (ticket, value) in [(fast, "fast"), (slow, "slow")] {
        if latest.is_current(ticket) {
            applied.push(value);
        }
    }
    assert_eq!(applied, vec!["fast"]);
}

#[test]
fn invalidate_discards_everything_outstanding() {
    let latest = LatestRequest::new();
    let ticket = latest.issue();
    latest.invalidate();
    assert!(!latest.is_current(ticket));
}

#[test]
fn clones_share_the_counter() {
    let latest = LatestRequest::new();
    let handle = latest.clone();
    let ticket = latest.issue();
    handle.invalidate();
    assert!(!latest.is_current(ticket));
}

#[test]
fn scoped_counter_goes_stale_when_owner_is_cleaned_up() {
    let owner = leptos::prelude::Owner::new();
    let latest = owner.with(LatestRequest::scoped);
    let ticket = latest.issue();
    assert!(latest.is_current(ticket));
    owner.cleanup();
    assert!(!latest.is_current(ticket));
}
