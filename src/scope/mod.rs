//! Relational view composition.
//!
//! A [`Scope`] names the slice of the entity graph a dashboard may see. [`compose_scope`]
//! derives that slice from the store: the beneficiary set is filtered first, and packages,
//! tasks and alerts are always derived from that filtered set, never independently. That
//! keeps every returned package and task pointing at a beneficiary in the same result.

pub mod filter;
pub mod lookup;

use std::{collections::HashSet, fmt};

use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::EntityStore;

/// The part of the entity graph visible to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Scope {
    /// Everything, unfiltered.
    Admin,
    /// Beneficiaries registered by one organization.
    Organization(String),
    /// Members of one family.
    Family(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Organization(id) => write!(f, "organization-{}", id),
            Self::Family(id) => write!(f, "family-{}", id),
        }
    }
}

/// The records belonging to a scope, borrowed from the store.
#[derive(Debug, Clone)]
pub struct ComposedScope<'a> {
    pub scope: Scope,
    pub beneficiaries: Vec<&'a Beneficiary>,
    pub packages: Vec<&'a Package>,
    pub tasks: Vec<&'a Task>,
    pub alerts: Vec<&'a Alert>,
    pub templates: Vec<&'a PackageTemplate>,
    /// Couriers carrying tasks in scope; every courier for admin.
    pub couriers: Vec<&'a Courier>,
    /// Packages funded by the organization but addressed to beneficiaries it does not
    /// register. Kept apart from `packages` and excluded from statistics.
    pub external_packages: Vec<&'a Package>,
}

impl<'a> ComposedScope<'a> {
    pub fn beneficiary(&self, id: &str) -> Option<&'a Beneficiary> {
        self.beneficiaries.iter().copied().find(|b| b.id == id)
    }

    pub fn contains_beneficiary(&self, id: &str) -> bool {
        self.beneficiary(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.beneficiaries.is_empty()
            && self.packages.is_empty()
            && self.tasks.is_empty()
            && self.alerts.is_empty()
            && self.templates.is_empty()
    }
}

/// Derives the records visible in `scope`.
///
/// - Admin: every record, unfiltered.
/// - Organization: beneficiaries whose `organization_id` matches, the packages, tasks and
///   alerts of those beneficiaries, the organization's templates, and the couriers on its
///   tasks.
/// - Family: beneficiaries whose `family_id` matches, with their packages, tasks, alerts
///   and couriers.
///
/// An alert belongs to a scope when it relates to one of the scope's beneficiaries.
/// An id that matches nothing yields empty sets.
pub fn compose_scope<'a>(store: &'a EntityStore, scope: &Scope) -> ComposedScope<'a> {
    match scope {
        Scope::Admin => ComposedScope {
            scope: scope.clone(),
            beneficiaries: store.beneficiaries.iter().collect(),
            packages: store.packages.iter().collect(),
            tasks: store.tasks.iter().collect(),
            alerts: store.alerts.iter().collect(),
            templates: store.templates.iter().collect(),
            couriers: store.couriers.iter().collect(),
            external_packages: Vec::new(),
        },
        Scope::Organization(organization_id) => {
            let beneficiaries = store
                .beneficiaries
                .filter(|b| b.organization_id.as_deref() == Some(organization_id.as_str()));
            let templates = store
                .templates
                .filter(|t| t.organization_id == *organization_id);

            let mut composed = through_beneficiaries(store, scope, beneficiaries, templates);

            let in_scope: HashSet<&str> =
                composed.beneficiaries.iter().map(|b| b.id.as_str()).collect();
            composed.external_packages = store.packages.filter(|p| {
                p.organization_id.as_deref() == Some(organization_id.as_str())
                    && !in_scope.contains(p.beneficiary_id.as_str())
            });

            composed
        }
        Scope::Family(family_id) => {
            let beneficiaries = store
                .beneficiaries
                .filter(|b| b.family_id.as_deref() == Some(family_id.as_str()));

            through_beneficiaries(store, scope, beneficiaries, Vec::new())
        }
    }
}

fn through_beneficiaries<'a>(
    store: &'a EntityStore,
    scope: &Scope,
    beneficiaries: Vec<&'a Beneficiary>,
    templates: Vec<&'a PackageTemplate>,
) -> ComposedScope<'a> {
    let ids: HashSet<&str> = beneficiaries.iter().map(|b| b.id.as_str()).collect();

    let packages = store
        .packages
        .filter(|p| ids.contains(p.beneficiary_id.as_str()));
    let tasks = store
        .tasks
        .filter(|t| ids.contains(t.beneficiary_id.as_str()));
    let alerts = store
        .alerts
        .filter(|a| {
            a.related.kind == EntityKind::Beneficiary && ids.contains(a.related.id.as_str())
        });

    let courier_ids: HashSet<&str> = tasks
        .iter()
        .filter_map(|t| t.courier_id.as_deref())
        .collect();
    let couriers = store
        .couriers
        .filter(|c| courier_ids.contains(c.id.as_str()));

    ComposedScope {
        scope: scope.clone(),
        beneficiaries,
        packages,
        tasks,
        alerts,
        templates,
        couriers,
        external_packages: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use aidhub_test_utils::prelude::*;

    use crate::store::EntityStore;

    fn store() -> EntityStore {
        TestBuilder::new()
            .with_organization("org-1")
            .with_organization("org-2")
            .with_family("fam-1")
            .with_courier("cour-1")
            .with_courier("cour-2")
            .with_beneficiary("ben-1", Some("org-1"), None)
            .with_beneficiary("ben-2", Some("org-1"), None)
            .with_beneficiary("ben-3", Some("org-2"), None)
            .with_beneficiary("ben-4", None, Some("fam-1"))
            .with_beneficiary("ben-5", None, None)
            .with_package("pkg-1", "ben-1", Some("org-1"))
            .with_package("pkg-2", "ben-2", None)
            .with_package("pkg-3", "ben-3", Some("org-2"))
            .with_package("pkg-4", "ben-4", None)
            .with_package("pkg-5", "ben-5", Some("org-1"))
            .with_task("task-1", "pkg-1", "ben-1", Some("cour-1"))
            .with_task("task-3", "pkg-3", "ben-3", Some("cour-2"))
            .with_task("task-4", "pkg-4", "ben-4", Some("cour-2"))
            .with_template("tpl-1", "org-1")
            .with_template("tpl-2", "org-2")
            .with_alert("alert-1", "ben-1", false)
            .with_alert("alert-4", "ben-4", false)
            .build()
            .into()
    }

    fn ids<T: entity::Record>(records: &[&T]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    mod organization {
        use super::{ids, store};
        use crate::scope::{compose_scope, Scope};

        /// Expect beneficiaries registered by the organization only
        #[test]
        fn filters_beneficiaries_by_organization() {
            let store = store();

            let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));

            assert_eq!(ids(&composed.beneficiaries), vec!["ben-1", "ben-2"]);
        }

        /// Expect packages of in-scope beneficiaries, including unowned ones
        #[test]
        fn derives_packages_through_beneficiaries() {
            let store = store();

            let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));

            assert_eq!(ids(&composed.packages), vec!["pkg-1", "pkg-2"]);
            assert!(composed
                .packages
                .iter()
                .all(|p| composed.contains_beneficiary(&p.beneficiary_id)));
        }

        /// Expect organization-funded packages for outside beneficiaries to be kept apart
        #[test]
        fn separates_external_packages() {
            let store = store();

            let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));

            assert_eq!(ids(&composed.external_packages), vec!["pkg-5"]);
        }

        /// Expect templates, tasks, alerts and couriers of the organization only
        #[test]
        fn derives_related_records() {
            let store = store();

            let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));

            assert_eq!(ids(&composed.tasks), vec!["task-1"]);
            assert_eq!(ids(&composed.templates), vec!["tpl-1"]);
            assert_eq!(ids(&composed.alerts), vec!["alert-1"]);
            assert_eq!(ids(&composed.couriers), vec!["cour-1"]);
        }

        /// Expect empty sets, not an error, for an unknown organization
        #[test]
        fn unknown_organization_is_empty() {
            let store = store();

            let composed = compose_scope(&store, &Scope::Organization("org-9".to_string()));

            assert!(composed.is_empty());
            assert!(composed.couriers.is_empty());
            assert!(composed.external_packages.is_empty());
        }
    }

    mod family {
        use aidhub_test_utils::prelude::*;
        use entity::prelude::*;

        use super::{ids, store};
        use crate::{
            scope::{compose_scope, Scope},
            store::EntityStore,
        };

        /// Expect members and everything derived from them
        #[test]
        fn derives_records_through_members() {
            let store = store();

            let composed = compose_scope(&store, &Scope::Family("fam-1".to_string()));

            assert_eq!(ids(&composed.beneficiaries), vec!["ben-4"]);
            assert_eq!(ids(&composed.packages), vec!["pkg-4"]);
            assert_eq!(ids(&composed.tasks), vec!["task-4"]);
            assert_eq!(ids(&composed.alerts), vec!["alert-4"]);
            assert_eq!(ids(&composed.couriers), vec!["cour-2"]);
            assert!(composed.templates.is_empty());
        }

        /// Expect an alert about another kind of record to stay out even when its id matches
        #[test]
        fn ignores_alerts_about_other_kinds() {
            let store: EntityStore = TestBuilder::new()
                .with_family("fam-1")
                .with_beneficiary("ben-4", None, Some("fam-1"))
                .with_alert("alert-1", "ben-4", false)
                .with_record(Alert {
                    related: EntityRef::new(EntityKind::Package, "ben-4"),
                    ..factory::alert("alert-2", "ben-4", false)
                })
                .build()
                .into();

            let composed = compose_scope(&store, &Scope::Family("fam-1".to_string()));

            assert_eq!(ids(&composed.alerts), vec!["alert-1"]);
        }

        /// Expect empty sets for an unknown family
        #[test]
        fn unknown_family_is_empty() {
            let store = store();

            assert!(compose_scope(&store, &Scope::Family("fam-9".to_string())).is_empty());
        }
    }

    mod admin {
        use super::store;
        use crate::scope::{compose_scope, Scope};

        /// Expect every record, unfiltered
        #[test]
        fn returns_everything() {
            let store = store();

            let composed = compose_scope(&store, &Scope::Admin);

            assert_eq!(composed.beneficiaries.len(), store.beneficiaries.len());
            assert_eq!(composed.packages.len(), store.packages.len());
            assert_eq!(composed.tasks.len(), store.tasks.len());
            assert_eq!(composed.alerts.len(), store.alerts.len());
            assert_eq!(composed.templates.len(), store.templates.len());
            assert_eq!(composed.couriers.len(), store.couriers.len());
        }
    }
}
