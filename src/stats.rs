//! Summary statistics over a composed scope.
//!
//! Everything here is a pure function of the records in a [`ComposedScope`]: no hidden
//! state, same input gives the same counters.

use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scope::ComposedScope;

/// Counters and rates shown on a dashboard's overview tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeStatistics {
    pub total_beneficiaries: usize,
    pub verified_beneficiaries: usize,
    pub pending_verification: usize,
    pub total_packages: usize,
    pub delivered_packages: usize,
    pub pending_packages: usize,
    pub in_delivery_packages: usize,
    pub failed_packages: usize,
    /// Assigned or in progress.
    pub active_tasks: usize,
    /// Delivered.
    pub completed_tasks: usize,
    pub failed_tasks: usize,
    pub unread_alerts: usize,
    pub critical_unread_alerts: usize,
    /// Delivered packages as a percentage of all packages.
    pub delivery_rate: u8,
    /// Verified beneficiaries as a percentage of all beneficiaries.
    pub verification_rate: u8,
    /// Delivered tasks as a percentage of all tasks.
    pub task_completion_rate: u8,
}

impl ScopeStatistics {
    pub fn compute(scope: &ComposedScope<'_>) -> Self {
        let count_beneficiaries = |status: IdentityStatus| {
            scope
                .beneficiaries
                .iter()
                .filter(|b| b.identity_status == status)
                .count()
        };
        let count_packages = |status: PackageStatus| {
            scope.packages.iter().filter(|p| p.status == status).count()
        };
        let count_tasks = |predicate: fn(&TaskStatus) -> bool| {
            scope.tasks.iter().filter(|t| predicate(&t.status)).count()
        };
        let unread = || scope.alerts.iter().filter(|a| !a.is_read);

        let total_beneficiaries = scope.beneficiaries.len();
        let verified_beneficiaries = count_beneficiaries(IdentityStatus::Verified);
        let total_packages = scope.packages.len();
        let delivered_packages = count_packages(PackageStatus::Delivered);
        let completed_tasks = count_tasks(|s| *s == TaskStatus::Delivered);

        Self {
            total_beneficiaries,
            verified_beneficiaries,
            pending_verification: count_beneficiaries(IdentityStatus::Pending),
            total_packages,
            delivered_packages,
            pending_packages: count_packages(PackageStatus::Pending),
            in_delivery_packages: count_packages(PackageStatus::InDelivery),
            failed_packages: count_packages(PackageStatus::Failed),
            active_tasks: count_tasks(TaskStatus::is_active),
            completed_tasks,
            failed_tasks: count_tasks(|s| *s == TaskStatus::Failed),
            unread_alerts: unread().count(),
            critical_unread_alerts: unread()
                .filter(|a| a.priority == AlertPriority::Critical)
                .count(),
            delivery_rate: percentage(delivered_packages, total_packages),
            verification_rate: percentage(verified_beneficiaries, total_beneficiaries),
            task_completion_rate: percentage(completed_tasks, scope.tasks.len()),
        }
    }
}

/// `part / total` as a whole percentage, rounded half up and clamped to `0..=100`.
///
/// A zero `total` yields 0.
pub fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let part = part.min(total) as u128;
    let total = total as u128;

    // round(100p / t) with halves rounded up == floor((200p + t) / 2t)
    ((200 * part + total) / (2 * total)).min(100) as u8
}

/// Delivered packages as a percentage of `packages`.
pub fn delivery_rate(packages: &[&Package]) -> u8 {
    let delivered = packages
        .iter()
        .filter(|p| p.status == PackageStatus::Delivered)
        .count();

    percentage(delivered, packages.len())
}
