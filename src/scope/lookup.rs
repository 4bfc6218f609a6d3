//! Reference resolution for display.
//!
//! Lookups never fail: a missing record resolves to the [`NOT_SPECIFIED`] placeholder and a
//! task without a reachable courier resolves to [`CourierAssignment::Unassigned`].

use entity::prelude::*;

use crate::store::EntityStore;

/// Placeholder shown for a reference that resolves to nothing.
pub const NOT_SPECIFIED: &str = "غير محدد";

/// Label for a task with no courier.
pub const UNASSIGNED: &str = "غير معين";

/// Courier carrying a task, if one can be resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourierAssignment<'a> {
    Assigned(&'a Courier),
    /// No courier id, or the id points at a courier that no longer exists.
    Unassigned,
}

impl<'a> CourierAssignment<'a> {
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    pub fn courier(&self) -> Option<&'a Courier> {
        match *self {
            Self::Assigned(courier) => Some(courier),
            Self::Unassigned => None,
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            Self::Assigned(courier) => &courier.name,
            Self::Unassigned => UNASSIGNED,
        }
    }
}

pub fn courier_for<'a>(store: &'a EntityStore, task: &Task) -> CourierAssignment<'a> {
    task.courier_id
        .as_deref()
        .and_then(|id| store.couriers.find_by_id(id))
        .map(CourierAssignment::Assigned)
        .unwrap_or(CourierAssignment::Unassigned)
}

/// A task joined with the records it references.
#[derive(Debug, Clone)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    pub package: Option<&'a Package>,
    pub beneficiary: Option<&'a Beneficiary>,
    pub courier: CourierAssignment<'a>,
}

impl<'a> TaskRow<'a> {
    pub fn package_name(&self) -> &'a str {
        self.package.map(|p| p.name.as_str()).unwrap_or(NOT_SPECIFIED)
    }

    pub fn beneficiary_name(&self) -> &'a str {
        self.beneficiary
            .map(|b| b.name.as_str())
            .unwrap_or(NOT_SPECIFIED)
    }
}

/// Joins each task with its package, beneficiary and courier.
pub fn task_rows<'a>(store: &'a EntityStore, tasks: &[&'a Task]) -> Vec<TaskRow<'a>> {
    tasks
        .iter()
        .map(|&task| TaskRow {
            task,
            package: store.packages.find_by_id(&task.package_id),
            beneficiary: store.beneficiaries.find_by_id(&task.beneficiary_id),
            courier: courier_for(store, task),
        })
        .collect()
}

pub fn beneficiary_name<'a>(store: &'a EntityStore, id: &str) -> &'a str {
    store
        .beneficiaries
        .find_by_id(id)
        .map(|b| b.name.as_str())
        .unwrap_or(NOT_SPECIFIED)
}

pub fn organization_name<'a>(store: &'a EntityStore, id: Option<&str>) -> &'a str {
    id.and_then(|id| store.organizations.find_by_id(id))
        .map(|o| o.name.as_str())
        .unwrap_or(NOT_SPECIFIED)
}

pub fn family_name<'a>(store: &'a EntityStore, id: Option<&str>) -> &'a str {
    id.and_then(|id| store.families.find_by_id(id))
        .map(|f| f.name.as_str())
        .unwrap_or(NOT_SPECIFIED)
}

/// Name of the organization or family a beneficiary belongs to.
pub fn owner_name<'a>(store: &'a EntityStore, beneficiary: &Beneficiary) -> &'a str {
    match (&beneficiary.organization_id, &beneficiary.family_id) {
        (Some(organization_id), _) => organization_name(store, Some(organization_id.as_str())),
        (None, Some(family_id)) => family_name(store, Some(family_id.as_str())),
        (None, None) => NOT_SPECIFIED,
    }
}

#[cfg(test)]
mod tests {
    use aidhub_test_utils::prelude::*;

    use crate::store::EntityStore;

    fn store() -> EntityStore {
        TestBuilder::new()
            .with_organization("org-1")
            .with_courier("cour-1")
            .with_beneficiary("ben-1", Some("org-1"), None)
            .with_package("pkg-1", "ben-1", Some("org-1"))
            .with_task("task-1", "pkg-1", "ben-1", Some("cour-1"))
            .with_task("task-2", "pkg-1", "ben-1", Some("cour-missing"))
            .with_task("task-3", "pkg-1", "ben-1", None)
            .with_task("task-4", "pkg-missing", "ben-missing", None)
            .build()
            .into()
    }

    mod courier_for {
        use super::store;
        use crate::scope::lookup::{courier_for, CourierAssignment, UNASSIGNED};

        /// Expect the courier when the id resolves
        #[test]
        fn resolves_existing_courier() {
            let store = store();
            let task = store.tasks.find_by_id("task-1").unwrap();

            let assignment = courier_for(&store, task);

            assert_eq!(assignment.courier().map(|c| c.id.as_str()), Some("cour-1"));
        }

        /// Expect Unassigned, not a failure, when the courier id points nowhere
        #[test]
        fn dangling_courier_is_unassigned() {
            let store = store();
            let task = store.tasks.find_by_id("task-2").unwrap();

            let assignment = courier_for(&store, task);

            assert_eq!(assignment, CourierAssignment::Unassigned);
            assert_eq!(assignment.label(), UNASSIGNED);
        }

        /// Expect Unassigned when no courier id is set
        #[test]
        fn missing_courier_is_unassigned() {
            let store = store();
            let task = store.tasks.find_by_id("task-3").unwrap();

            assert!(!courier_for(&store, task).is_assigned());
        }
    }

    mod task_rows {
        use super::store;
        use crate::scope::lookup::{task_rows, NOT_SPECIFIED};

        /// Expect placeholders for a task whose package and beneficiary are gone
        #[test]
        fn uses_placeholders_for_missing_references() {
            let store = store();
            let tasks: Vec<_> = store.tasks.iter().collect();

            let rows = task_rows(&store, &tasks);
            let orphan = rows.iter().find(|r| r.task.id == "task-4").unwrap();

            assert_eq!(rows.len(), 4);
            assert_eq!(orphan.package_name(), NOT_SPECIFIED);
            assert_eq!(orphan.beneficiary_name(), NOT_SPECIFIED);
        }
    }

    mod names {
        use super::store;
        use crate::scope::lookup::{beneficiary_name, organization_name, owner_name, NOT_SPECIFIED};

        /// Expect placeholder for unknown ids and real names otherwise
        #[test]
        fn resolves_or_falls_back() {
            let store = store();
            let beneficiary = store.beneficiaries.find_by_id("ben-1").unwrap();

            assert_eq!(beneficiary_name(&store, "ben-404"), NOT_SPECIFIED);
            assert_eq!(organization_name(&store, None), NOT_SPECIFIED);
            assert_eq!(
                owner_name(&store, beneficiary),
                store.organizations.find_by_id("org-1").unwrap().name
            );
        }
    }
}
