//! Record registration and removal seen through composed views.

use aidhub::{
    form::{BeneficiaryDraft, PackageDraft},
    scope::{compose_scope, lookup::beneficiary_name, Scope},
    store::EntityStore,
};
use aidhub_test_utils::{constant::test_timestamp, prelude::*};
use entity::prelude::*;

fn draft_for(organization_id: &str) -> BeneficiaryDraft {
    BeneficiaryDraft {
        name: "Nour Haddad".to_string(),
        national_id: "401234567".to_string(),
        phone: "0599000111".to_string(),
        governorate: "Gaza".to_string(),
        city: "Gaza".to_string(),
        organization_id: Some(organization_id.to_string()),
        ..BeneficiaryDraft::default()
    }
}

/// Expect a registered beneficiary to be found by id and appear in its organization's view
#[test]
fn inserted_beneficiary_is_visible() {
    let mut store: EntityStore = TestBuilder::new().with_organization("org-1").build().into();

    let beneficiary = draft_for("org-1")
        .into_record(&store, test_timestamp())
        .unwrap();
    let id = beneficiary.id.clone();
    assert!(store.beneficiaries.insert(beneficiary));

    let found = store.beneficiaries.find_by_id(&id).unwrap();
    assert_eq!(found.name, "Nour Haddad");
    assert_eq!(found.identity_status, IdentityStatus::Pending);

    let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));
    assert!(composed.contains_beneficiary(&id));
}

/// Expect a record without an id to be dropped
#[test]
fn blank_id_is_dropped() {
    let mut store: EntityStore = TestBuilder::new()
        .with_beneficiary("ben-1", None, None)
        .build()
        .into();

    let inserted = store
        .beneficiaries
        .insert(factory::beneficiary("  ", None, None));

    assert!(!inserted);
    assert_eq!(store.beneficiaries.len(), 1);
}

/// Expect the newest record to be listed first
#[test]
fn newest_record_listed_first() {
    let mut store: EntityStore = TestBuilder::new()
        .with_beneficiary("ben-1", None, None)
        .build()
        .into();

    store
        .beneficiaries
        .insert(factory::beneficiary("ben-2", None, None));

    let ids: Vec<&str> = store.beneficiaries.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["ben-2", "ben-1"]);
}

/// Expect removing a beneficiary to leave its packages resolving to the placeholder
#[test]
fn removal_leaves_placeholder_references() {
    let mut store: EntityStore = TestBuilder::new()
        .with_beneficiary("ben-1", None, None)
        .with_package("pkg-1", "ben-1", None)
        .build()
        .into();

    assert!(store.remove(&EntityRef::new(EntityKind::Beneficiary, "ben-1")));

    let package = store.packages.find_by_id("pkg-1").unwrap();
    assert_eq!(
        beneficiary_name(&store, &package.beneficiary_id),
        aidhub::scope::lookup::NOT_SPECIFIED
    );
}

/// Expect a draft naming both an organization and a family to be refused
#[test]
fn draft_with_two_owners_is_refused() {
    let store = EntityStore::default();

    let result = BeneficiaryDraft {
        family_id: Some("fam-1".to_string()),
        ..draft_for("org-1")
    }
    .into_record(&store, test_timestamp());

    let error = result.unwrap_err();
    assert!(error.field_message("family_id").is_some());
}

/// Expect a package registered from a template to appear pending in its organization's view
#[test]
fn package_from_template_is_visible() {
    let mut store: EntityStore = TestBuilder::new()
        .with_organization("org-1")
        .with_beneficiary("ben-1", Some("org-1"), None)
        .with_template("tpl-1", "org-1")
        .build()
        .into();
    let template = store.templates.find_by_id("tpl-1").unwrap().clone();

    let package = PackageDraft {
        beneficiary_id: "ben-1".to_string(),
        ..PackageDraft::from_template(&template, "Relief Fund")
    }
    .into_record(&store, test_timestamp())
    .unwrap();
    let id = package.id.clone();
    assert!(store.packages.insert(package));

    let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));
    let listed = composed.packages.iter().find(|p| p.id == id).unwrap();
    assert_eq!(listed.status, PackageStatus::Pending);
    assert_eq!(listed.organization_id.as_deref(), Some("org-1"));
    assert_eq!(listed.value, 80.0);
}

/// Expect a package for an unknown beneficiary to be refused without touching the store
#[test]
fn package_for_unknown_beneficiary_is_refused() {
    let store: EntityStore = TestBuilder::new()
        .with_beneficiary("ben-1", None, None)
        .build()
        .into();

    let result = PackageDraft {
        name: "Winter kit".to_string(),
        kind: "Blankets".to_string(),
        value: 40.0,
        funder: "Relief Fund".to_string(),
        beneficiary_id: "ben-404".to_string(),
        ..PackageDraft::default()
    }
    .into_record(&store, test_timestamp());

    let error = result.unwrap_err();
    assert!(error.field_message("beneficiary_id").is_some());
    assert!(store.packages.is_empty());
}
