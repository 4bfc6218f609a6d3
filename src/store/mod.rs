//! In-memory entity store.
//!
//! [`EntityStore`] owns one [`Collection`] per record type and is the single authoritative
//! copy of the dataset for the lifetime of the process. All mutation goes through the
//! collection primitives (insert, update by id, remove by id) or the store operations built
//! on them; nothing is persisted.

pub mod alerts;
pub mod collection;
pub mod seed;

pub use collection::Collection;

use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use entity::prelude::*;

/// The authoritative in-memory collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    pub beneficiaries: Collection<Beneficiary>,
    pub packages: Collection<Package>,
    pub tasks: Collection<Task>,
    pub couriers: Collection<Courier>,
    pub organizations: Collection<Organization>,
    pub families: Collection<Family>,
    pub templates: Collection<PackageTemplate>,
    pub alerts: Collection<Alert>,
    pub users: Collection<SystemUser>,
}

impl From<Dataset> for EntityStore {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}

impl EntityStore {
    /// Creates a store holding the records of `dataset` in their given order.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            beneficiaries: dataset.beneficiaries.into(),
            packages: dataset.packages.into(),
            tasks: dataset.tasks.into(),
            couriers: dataset.couriers.into(),
            organizations: dataset.organizations.into(),
            families: dataset.families.into(),
            templates: dataset.templates.into(),
            alerts: dataset.alerts.into(),
            users: dataset.users.into(),
        }
    }

    /// Creates a store loaded with the bundled mock dataset.
    pub fn seeded() -> Self {
        let store = Self::new(seed::dataset());

        tracing::info!(
            beneficiaries = store.beneficiaries.len(),
            packages = store.packages.len(),
            tasks = store.tasks.len(),
            "Loaded mock dataset"
        );

        store
    }

    /// Whether the record an [`EntityRef`] points at is present.
    pub fn contains(&self, target: &EntityRef) -> bool {
        let id = target.id.as_str();

        match target.kind {
            EntityKind::Beneficiary => self.beneficiaries.contains(id),
            EntityKind::Package => self.packages.contains(id),
            EntityKind::Task => self.tasks.contains(id),
            EntityKind::Courier => self.couriers.contains(id),
            EntityKind::Organization => self.organizations.contains(id),
            EntityKind::Family => self.families.contains(id),
            EntityKind::PackageTemplate => self.templates.contains(id),
            EntityKind::Alert => self.alerts.contains(id),
            EntityKind::SystemUser => self.users.contains(id),
        }
    }

    /// Removes the record an [`EntityRef`] points at, if present.
    ///
    /// Dependent records are left untouched; views resolve their dangling references to
    /// placeholders.
    ///
    /// # Returns
    /// - `true` - A record was removed
    /// - `false` - Nothing matched
    pub fn remove(&mut self, target: &EntityRef) -> bool {
        let id = target.id.as_str();

        match target.kind {
            EntityKind::Beneficiary => self.beneficiaries.remove_by_id(id).is_some(),
            EntityKind::Package => self.packages.remove_by_id(id).is_some(),
            EntityKind::Task => self.tasks.remove_by_id(id).is_some(),
            EntityKind::Courier => self.couriers.remove_by_id(id).is_some(),
            EntityKind::Organization => self.organizations.remove_by_id(id).is_some(),
            EntityKind::Family => self.families.remove_by_id(id).is_some(),
            EntityKind::PackageTemplate => self.templates.remove_by_id(id).is_some(),
            EntityKind::Alert => self.alerts.remove_by_id(id).is_some(),
            EntityKind::SystemUser => self.users.remove_by_id(id).is_some(),
        }
    }

    /// Generates an unused id for a new record of `kind`.
    ///
    /// Ids are the kind's prefix followed by eight random hex digits, e.g. `ben-1f09a3c2`.
    pub fn next_id(&self, kind: EntityKind) -> String {
        loop {
            let id = format!("{}-{:08x}", kind.id_prefix(), rand::random::<u32>());

            if !self.contains(&EntityRef::new(kind, id.clone())) {
                return id;
            }
        }
    }

    /// Stamps a user's last login time.
    ///
    /// # Returns
    /// - `true` - User found and updated
    /// - `false` - No user with that id
    pub fn record_login(&mut self, user_id: &str, at: NaiveDateTime) -> bool {
        self.users.update_by_id(user_id, |user| user.last_login = Some(at))
    }
}

#[cfg(test)]
mod tests {
    mod insert_and_find {
        use aidhub_test_utils::prelude::*;

        use crate::store::EntityStore;

        /// Expect an inserted beneficiary to be found again, deep-equal
        #[test]
        fn round_trips_inserted_record() {
            let mut store = EntityStore::default();
            let beneficiary = factory::beneficiary("ben-1", Some("org-1"), None);

            store.beneficiaries.insert(beneficiary.clone());

            assert_eq!(store.beneficiaries.find_by_id("ben-1"), Some(&beneficiary));
        }

        /// Expect a package to be found after insertion into a populated store
        #[test]
        fn round_trips_into_seeded_store() {
            let mut store = EntityStore::seeded();
            let package = factory::package("pkg-new", "ben-1", Some("org-1"));

            store.packages.insert(package.clone());

            assert_eq!(store.packages.find_by_id("pkg-new"), Some(&package));
        }
    }

    mod next_id {
        use entity::prelude::*;

        use crate::store::EntityStore;

        /// Expect generated ids to carry the kind prefix and be unused
        #[test]
        fn generates_unused_prefixed_id() {
            let store = EntityStore::seeded();

            let id = store.next_id(EntityKind::Beneficiary);

            assert!(id.starts_with("ben-"));
            assert!(!store.beneficiaries.contains(&id));
        }
    }

    mod remove {
        use aidhub_test_utils::prelude::*;
        use entity::prelude::*;

        use crate::store::EntityStore;

        /// Expect removal through an entity reference to drop the record
        #[test]
        fn removes_referenced_record() {
            let mut store: EntityStore = TestBuilder::new()
                .with_organization("org-1")
                .with_beneficiary("ben-1", Some("org-1"), None)
                .build()
                .into();
            let target = EntityRef::new(EntityKind::Beneficiary, "ben-1");

            assert!(store.remove(&target));
            assert!(!store.contains(&target));
        }

        /// Expect false when the referenced record does not exist
        #[test]
        fn returns_false_for_missing_record() {
            let mut store = EntityStore::default();

            assert!(!store.remove(&EntityRef::new(EntityKind::Alert, "alert-1")));
        }
    }

    mod record_login {
        use chrono::Utc;

        use crate::store::EntityStore;

        /// Expect last login to be stamped for an existing user
        #[test]
        fn stamps_existing_user() {
            let mut store = EntityStore::seeded();
            let user_id = store.users.iter().next().unwrap().id.clone();
            let now = Utc::now().naive_utc();

            assert!(store.record_login(&user_id, now));
            assert_eq!(store.users.find_by_id(&user_id).unwrap().last_login, Some(now));
        }

        /// Expect no-op for an unknown user
        #[test]
        fn ignores_unknown_user() {
            let mut store = EntityStore::seeded();

            assert!(!store.record_login("user-missing", Utc::now().naive_utc()));
        }
    }
}
