//! Declarative dataset builder.
//!
//! `TestBuilder` queues fixture records through chained `with_*` calls and hands them back
//! as a [`Dataset`] from `build()`, ready to load into a store. Records keep the order they
//! were added in.

use entity::prelude::*;

use crate::fixtures::factory;

/// Builder for test datasets.
///
/// # Example
///
/// ```
/// use aidhub_test_utils::TestBuilder;
///
/// let dataset = TestBuilder::new()
///     .with_organization("org-1")
///     .with_beneficiary("ben-1", Some("org-1"), None)
///     .with_package("pkg-1", "ben-1", Some("org-1"))
///     .build();
///
/// assert_eq!(dataset.beneficiaries.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TestBuilder {
    dataset: Dataset,
}

impl TestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, id: &str) -> Self {
        self.dataset.organizations.push(factory::organization(id));
        self
    }

    pub fn with_family(mut self, id: &str) -> Self {
        self.dataset.families.push(factory::family(id));
        self
    }

    pub fn with_courier(mut self, id: &str) -> Self {
        self.dataset.couriers.push(factory::courier(id));
        self
    }

    /// Add a beneficiary registered by an organization, belonging to a family, or neither.
    pub fn with_beneficiary(
        mut self,
        id: &str,
        organization_id: Option<&str>,
        family_id: Option<&str>,
    ) -> Self {
        self.dataset
            .beneficiaries
            .push(factory::beneficiary(id, organization_id, family_id));
        self
    }

    pub fn with_package(
        mut self,
        id: &str,
        beneficiary_id: &str,
        organization_id: Option<&str>,
    ) -> Self {
        self.dataset
            .packages
            .push(factory::package(id, beneficiary_id, organization_id));
        self
    }

    pub fn with_task(
        mut self,
        id: &str,
        package_id: &str,
        beneficiary_id: &str,
        courier_id: Option<&str>,
    ) -> Self {
        self.dataset
            .tasks
            .push(factory::task(id, package_id, beneficiary_id, courier_id));
        self
    }

    /// Add a template and link it from its organization, if that organization was added.
    pub fn with_template(mut self, id: &str, organization_id: &str) -> Self {
        self.dataset
            .templates
            .push(factory::template(id, organization_id));
        if let Some(organization) = self
            .dataset
            .organizations
            .iter_mut()
            .find(|o| o.id == organization_id)
        {
            organization.template_ids.push(id.to_string());
        }
        self
    }

    /// Add an alert about a beneficiary.
    pub fn with_alert(mut self, id: &str, beneficiary_id: &str, is_read: bool) -> Self {
        self.dataset
            .alerts
            .push(factory::alert(id, beneficiary_id, is_read));
        self
    }

    pub fn with_user(mut self, id: &str, role: Role, association: Option<Association>) -> Self {
        self.dataset.users.push(factory::user(id, role, association));
        self
    }

    /// Add a fully custom record of any kind.
    pub fn with_record(mut self, record: impl Into<Fixture>) -> Self {
        match record.into() {
            Fixture::Beneficiary(b) => self.dataset.beneficiaries.push(b),
            Fixture::Package(p) => self.dataset.packages.push(p),
            Fixture::Task(t) => self.dataset.tasks.push(t),
            Fixture::Alert(a) => self.dataset.alerts.push(a),
        }
        self
    }

    /// Finish building and return the queued records.
    pub fn build(self) -> Dataset {
        self.dataset
    }
}

/// A hand-built record accepted by [`TestBuilder::with_record`].
pub enum Fixture {
    Beneficiary(Beneficiary),
    Package(Package),
    Task(Task),
    Alert(Alert),
}

impl From<Beneficiary> for Fixture {
    fn from(record: Beneficiary) -> Self {
        Self::Beneficiary(record)
    }
}

impl From<Package> for Fixture {
    fn from(record: Package) -> Self {
        Self::Package(record)
    }
}

impl From<Task> for Fixture {
    fn from(record: Task) -> Self {
        Self::Task(record)
    }
}

impl From<Alert> for Fixture {
    fn from(record: Alert) -> Self {
        Self::Alert(record)
    }
}
