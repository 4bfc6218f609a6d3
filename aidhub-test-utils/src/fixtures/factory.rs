//! Record factories with fixed test values.
//!
//! Every factory takes only the fields a test usually cares about (ids and relations);
//! the rest is filled with stable placeholder data. Tweak the returned record directly for
//! anything else.

use entity::prelude::*;

use crate::constant::{test_timestamp, TEST_EMAIL_DOMAIN};

/// Create a beneficiary pending identity review with an active account.
///
/// # Arguments
/// - `id` - Beneficiary id
/// - `organization_id` - Registering organization, if any
/// - `family_id` - Family the beneficiary belongs to, if any
pub fn beneficiary(id: &str, organization_id: Option<&str>, family_id: Option<&str>) -> Beneficiary {
    Beneficiary {
        id: id.to_string(),
        name: format!("Beneficiary {}", id),
        national_id: format!("ID-{}", id),
        phone: "0590000000".to_string(),
        email: None,
        address: Address {
            governorate: "Gaza".to_string(),
            city: "Gaza".to_string(),
            district: "Rimal".to_string(),
            street: "Omar Al-Mukhtar".to_string(),
        },
        family_id: family_id.map(str::to_string),
        organization_id: organization_id.map(str::to_string),
        identity_status: IdentityStatus::Pending,
        status: AccountStatus::Active,
        profile: SocialProfile {
            family_size: 4,
            monthly_income: Some(300.0),
            economic_level: EconomicLevel::Poor,
            special_needs: None,
        },
        documents: Vec::new(),
        created_at: test_timestamp(),
        updated_at: test_timestamp(),
    }
}

/// Create a pending package addressed to `beneficiary_id`.
pub fn package(id: &str, beneficiary_id: &str, organization_id: Option<&str>) -> Package {
    Package {
        id: id.to_string(),
        name: format!("Package {}", id),
        kind: "Food".to_string(),
        value: 100.0,
        funder: "Test Funder".to_string(),
        beneficiary_id: beneficiary_id.to_string(),
        organization_id: organization_id.map(str::to_string),
        status: PackageStatus::Pending,
        created_at: test_timestamp(),
        delivered_at: None,
        expires_at: None,
    }
}

/// Create a pending task delivering `package_id` to `beneficiary_id`.
pub fn task(
    id: &str,
    package_id: &str,
    beneficiary_id: &str,
    courier_id: Option<&str>,
) -> Task {
    Task {
        id: id.to_string(),
        package_id: package_id.to_string(),
        beneficiary_id: beneficiary_id.to_string(),
        courier_id: courier_id.map(str::to_string),
        status: TaskStatus::Pending,
        proof: DeliveryProof::default(),
        failure_reason: None,
        scheduled_for: None,
        created_at: test_timestamp(),
        updated_at: test_timestamp(),
    }
}

/// Create an active courier with no completed tasks.
pub fn courier(id: &str) -> Courier {
    Courier {
        id: id.to_string(),
        name: format!("Courier {}", id),
        phone: "0591111111".to_string(),
        rating: 4.5,
        completed_tasks: 0,
        status: CourierStatus::Active,
    }
}

pub fn organization(id: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: format!("Organization {}", id),
        contact_phone: None,
        template_ids: Vec::new(),
    }
}

pub fn family(id: &str) -> Family {
    Family {
        id: id.to_string(),
        name: format!("Family {}", id),
        head_of_family: format!("Head of {}", id),
        location: "Gaza".to_string(),
        completion_rate: 0.0,
    }
}

/// Create a package template owned by `organization_id`.
pub fn template(id: &str, organization_id: &str) -> PackageTemplate {
    PackageTemplate {
        id: id.to_string(),
        organization_id: organization_id.to_string(),
        name: format!("Template {}", id),
        contents: vec!["Rice".to_string(), "Oil".to_string()],
        weight_kg: 12.5,
        cost: 80.0,
        usage_count: 0,
    }
}

/// Create a medium-priority alert about a beneficiary.
///
/// # Arguments
/// - `id` - Alert id
/// - `beneficiary_id` - Id of the beneficiary the alert relates to
/// - `is_read` - Whether the alert starts out read
pub fn alert(id: &str, beneficiary_id: &str, is_read: bool) -> Alert {
    Alert {
        id: id.to_string(),
        kind: AlertKind::Delayed,
        priority: AlertPriority::Medium,
        title: format!("Alert {}", id),
        message: "Delivery delayed".to_string(),
        is_read,
        related: EntityRef::new(EntityKind::Beneficiary, beneficiary_id),
        created_at: test_timestamp(),
    }
}

/// Create an active system user who has never signed in.
///
/// The e-mail is derived from the id, e.g. `user-1@test.aidhub.org`.
pub fn user(id: &str, role: Role, association: Option<Association>) -> SystemUser {
    SystemUser {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@{}", id, TEST_EMAIL_DOMAIN),
        role,
        association,
        status: AccountStatus::Active,
        last_login: None,
    }
}
