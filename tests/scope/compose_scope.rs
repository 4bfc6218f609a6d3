//! View composition over the seeded dataset and hand-built graphs.

use std::collections::HashSet;

use aidhub::{
    scope::{
        compose_scope,
        lookup::{task_rows, CourierAssignment, UNASSIGNED},
        Scope,
    },
    store::EntityStore,
};
use aidhub_test_utils::prelude::*;
use entity::prelude::*;

/// Expect an organization's beneficiaries to match a direct filter on the store
#[test]
fn organization_beneficiaries_match_direct_filter() {
    let store = EntityStore::seeded();

    let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));

    let direct = store
        .beneficiaries
        .filter(|b| b.organization_id.as_deref() == Some("org-1"));
    assert!(!direct.is_empty());
    assert_eq!(composed.beneficiaries, direct);
}

/// Expect every package and task of an organization to point at one of its beneficiaries
#[test]
fn organization_records_stay_in_set() {
    let store = EntityStore::seeded();

    for organization in store.organizations.iter() {
        let composed = compose_scope(&store, &Scope::Organization(organization.id.clone()));
        let ids: HashSet<&str> = composed.beneficiaries.iter().map(|b| b.id.as_str()).collect();

        assert!(composed
            .packages
            .iter()
            .all(|p| ids.contains(p.beneficiary_id.as_str())));
        assert!(composed
            .tasks
            .iter()
            .all(|t| ids.contains(t.beneficiary_id.as_str())));
    }
}

/// Expect a package funded for another organization's beneficiary to be listed as external
#[test]
fn cross_funded_package_is_external() {
    let store: EntityStore = TestBuilder::new()
        .with_organization("org-1")
        .with_organization("org-2")
        .with_beneficiary("ben-1", Some("org-1"), None)
        .with_beneficiary("ben-2", Some("org-2"), None)
        .with_package("pkg-1", "ben-1", Some("org-1"))
        .with_package("pkg-2", "ben-2", Some("org-1"))
        .build()
        .into();

    let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));

    let packages: Vec<&str> = composed.packages.iter().map(|p| p.id.as_str()).collect();
    let external: Vec<&str> = composed
        .external_packages
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(packages, vec!["pkg-1"]);
    assert_eq!(external, vec!["pkg-2"]);
}

/// Expect a family's unread alerts to match a direct filter on the store
#[test]
fn family_unread_alerts_match_direct_filter() {
    let store = EntityStore::seeded();
    let scope = Scope::Family("fam-1".to_string());

    let members: HashSet<String> = store
        .beneficiaries
        .filter(|b| b.family_id.as_deref() == Some("fam-1"))
        .into_iter()
        .map(|b| b.id.clone())
        .collect();
    let direct = store
        .alerts
        .filter(|a| !a.is_read && members.contains(&a.related.id))
        .len();

    assert_eq!(store.unread_alert_count(&scope), direct);
}

/// Expect a scope naming an unknown organization to be empty
#[test]
fn unknown_organization_is_empty() {
    let store = EntityStore::seeded();

    let composed = compose_scope(&store, &Scope::Organization("org-missing".to_string()));

    assert!(composed.is_empty());
    assert!(composed.external_packages.is_empty());
}

/// Expect a task whose courier was removed to resolve to unassigned
#[test]
fn dangling_courier_resolves_unassigned() {
    let store: EntityStore = TestBuilder::new()
        .with_beneficiary("ben-1", None, None)
        .with_package("pkg-1", "ben-1", None)
        .with_record(Task {
            courier_id: Some("cour-gone".to_string()),
            status: TaskStatus::Assigned,
            ..factory::task("task-1", "pkg-1", "ben-1", None)
        })
        .build()
        .into();

    let composed = compose_scope(&store, &Scope::Admin);
    let rows = task_rows(&store, &composed.tasks);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].courier, CourierAssignment::Unassigned);
    assert_eq!(rows[0].courier.label(), UNASSIGNED);
}
