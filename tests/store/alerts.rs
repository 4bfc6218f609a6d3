use aidhub::{scope::Scope, store::EntityStore};
use aidhub_test_utils::prelude::*;

/// Expect marking all alerts read twice to change nothing the second time
#[test]
fn mark_all_is_idempotent() {
    let mut store = EntityStore::seeded();
    let scope = Scope::Family("fam-1".to_string());
    let unread = store.unread_alert_count(&scope);

    assert_eq!(store.mark_all_alerts_read(&scope), unread);
    assert_eq!(store.mark_all_alerts_read(&scope), 0);
    assert_eq!(store.unread_alert_count(&scope), 0);
}

/// Expect marking one scope's alerts leaves other scopes' alerts unread
#[test]
fn mark_all_stays_in_scope() {
    let mut store: EntityStore = TestBuilder::new()
        .with_family("fam-1")
        .with_family("fam-2")
        .with_beneficiary("ben-1", None, Some("fam-1"))
        .with_beneficiary("ben-2", None, Some("fam-2"))
        .with_alert("alert-1", "ben-1", false)
        .with_alert("alert-2", "ben-2", false)
        .build()
        .into();

    store.mark_all_alerts_read(&Scope::Family("fam-1".to_string()));

    assert!(store.alerts.find_by_id("alert-1").unwrap().is_read);
    assert!(!store.alerts.find_by_id("alert-2").unwrap().is_read);
    assert_eq!(store.unread_alert_count(&Scope::Admin), 1);
}

/// Expect marking a single read alert to report no change
#[test]
fn mark_read_reports_change() {
    let mut store: EntityStore = TestBuilder::new()
        .with_beneficiary("ben-1", None, None)
        .with_alert("alert-1", "ben-1", false)
        .build()
        .into();

    assert!(store.mark_alert_read("alert-1"));
    assert!(!store.mark_alert_read("alert-1"));
    assert!(!store.mark_alert_read("alert-missing"));
}
