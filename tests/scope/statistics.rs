use aidhub::{
    scope::{compose_scope, Scope},
    stats::ScopeStatistics,
    store::EntityStore,
};
use aidhub_test_utils::prelude::*;
use entity::prelude::*;

/// Expect statistics counted from the composed view, not the whole store
#[test]
fn counts_only_scope_records() {
    let store: EntityStore = TestBuilder::new()
        .with_family("fam-1")
        .with_beneficiary("ben-1", None, Some("fam-1"))
        .with_beneficiary("ben-2", None, None)
        .with_record(Package {
            status: PackageStatus::Delivered,
            ..factory::package("pkg-1", "ben-1", None)
        })
        .with_package("pkg-2", "ben-1", None)
        .with_package("pkg-3", "ben-2", None)
        .with_alert("alert-1", "ben-1", false)
        .with_alert("alert-2", "ben-2", false)
        .build()
        .into();

    let composed = compose_scope(&store, &Scope::Family("fam-1".to_string()));
    let stats = ScopeStatistics::compute(&composed);

    assert_eq!(stats.total_beneficiaries, 1);
    assert_eq!(stats.total_packages, 2);
    assert_eq!(stats.delivered_packages, 1);
    assert_eq!(stats.delivery_rate, 50);
    assert_eq!(stats.unread_alerts, 1);
}

/// Expect an empty scope to report zero rates rather than dividing by zero
#[test]
fn empty_scope_has_zero_rates() {
    let store = EntityStore::default();

    let stats = ScopeStatistics::compute(&compose_scope(&store, &Scope::Admin));

    assert_eq!(stats.delivery_rate, 0);
    assert_eq!(stats.verification_rate, 0);
    assert_eq!(stats.task_completion_rate, 0);
}
