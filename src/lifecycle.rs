//! Task and identity-review lifecycles.
//!
//! State-changing actions arrive as tagged variants carrying exactly the data they need.
//! Applying one checks the transition against the lifecycle, then updates the task and the
//! records that follow from it (package status, courier tally) through the store's
//! primitives.

use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{error::lifecycle::LifecycleError, store::EntityStore};

/// An action a coordinator or courier takes on a delivery task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TaskAction {
    /// Hand the task to a courier.
    Assign { courier_id: String },
    /// Courier set out with the package.
    Start,
    /// Package handed over, with evidence.
    Deliver { proof: DeliveryProof },
    /// Delivery attempt failed.
    Fail { reason: String },
    /// Delivery postponed to a new time.
    Reschedule { scheduled_for: NaiveDateTime },
}

impl TaskAction {
    /// The status a task ends up in after this action.
    pub fn target_status(&self) -> TaskStatus {
        match self {
            Self::Assign { .. } => TaskStatus::Assigned,
            Self::Start => TaskStatus::InProgress,
            Self::Deliver { .. } => TaskStatus::Delivered,
            Self::Fail { .. } => TaskStatus::Failed,
            Self::Reschedule { .. } => TaskStatus::Rescheduled,
        }
    }
}

/// Whether a task may move from `from` to `to`.
///
/// `Pending → Assigned → InProgress → {Delivered | Failed | Rescheduled}`, and a
/// rescheduled task may be assigned again. Delivered and failed are terminal.
pub fn can_transition(from: TaskStatus, to: TaskStatus) -> bool {
    use TaskStatus::*;

    matches!(
        (from, to),
        (Pending, Assigned)
            | (Rescheduled, Assigned)
            | (Assigned, InProgress)
            | (InProgress, Delivered)
            | (InProgress, Failed)
            | (InProgress, Rescheduled)
    )
}

/// Outcome of reviewing a beneficiary's identity documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityDecision {
    Verify,
    Reject,
}

impl IdentityDecision {
    pub fn target_status(&self) -> IdentityStatus {
        match self {
            Self::Verify => IdentityStatus::Verified,
            Self::Reject => IdentityStatus::Rejected,
        }
    }
}

impl EntityStore {
    /// Applies a lifecycle action to a task.
    ///
    /// Side effects on related records:
    /// - `Start` puts the package in delivery.
    /// - `Deliver` marks the package delivered and credits the courier with a completed task.
    /// - `Fail` marks the package failed.
    /// - `Reschedule` returns the package to pending.
    ///
    /// # Arguments
    /// - `task_id` - Task to act on
    /// - `action` - The action and its data
    /// - `at` - Time the action happened, used for timestamps
    ///
    /// # Returns
    /// - `Ok(TaskStatus)` - The task's new status
    /// - `Err(LifecycleError::RecordNotFound)` - No task with that id
    /// - `Err(LifecycleError::CourierNotFound)` - Assigning a courier not in the store
    /// - `Err(LifecycleError::InvalidTaskTransition)` - Action not allowed from the current status
    pub fn apply_task_action(
        &mut self,
        task_id: &str,
        action: TaskAction,
        at: NaiveDateTime,
    ) -> Result<TaskStatus, LifecycleError> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .ok_or_else(|| LifecycleError::RecordNotFound(task_id.to_string()))?;

        let from = task.status;
        let to = action.target_status();
        if !can_transition(from, to) {
            return Err(LifecycleError::InvalidTaskTransition {
                task_id: task_id.to_string(),
                from,
                to,
            });
        }

        let package_id = task.package_id.clone();
        let courier_id = task.courier_id.clone();

        match action {
            TaskAction::Assign { courier_id } => {
                if !self.couriers.contains(&courier_id) {
                    return Err(LifecycleError::CourierNotFound(courier_id));
                }
                self.tasks.update_by_id(task_id, |task| {
                    task.courier_id = Some(courier_id);
                });
            }
            TaskAction::Start => {
                self.packages.update_by_id(&package_id, |package| {
                    package.status = PackageStatus::InDelivery;
                });
            }
            TaskAction::Deliver { proof } => {
                self.tasks.update_by_id(task_id, |task| task.proof = proof);
                self.packages.update_by_id(&package_id, |package| {
                    package.status = PackageStatus::Delivered;
                    package.delivered_at = Some(at);
                });
                if let Some(courier_id) = courier_id {
                    self.couriers.update_by_id(&courier_id, |courier| {
                        courier.completed_tasks += 1;
                    });
                }
            }
            TaskAction::Fail { reason } => {
                self.tasks
                    .update_by_id(task_id, |task| task.failure_reason = Some(reason));
                self.packages.update_by_id(&package_id, |package| {
                    package.status = PackageStatus::Failed;
                });
            }
            TaskAction::Reschedule { scheduled_for } => {
                self.tasks
                    .update_by_id(task_id, |task| task.scheduled_for = Some(scheduled_for));
                self.packages.update_by_id(&package_id, |package| {
                    package.status = PackageStatus::Pending;
                });
            }
        }

        self.tasks.update_by_id(task_id, |task| {
            task.status = to;
            task.updated_at = at;
        });

        tracing::info!(task_id = %task_id, from = ?from, to = ?to, "Task status changed");

        Ok(to)
    }

    /// Records the outcome of an identity review.
    ///
    /// # Returns
    /// - `Ok(IdentityStatus)` - The beneficiary's new identity status
    /// - `Err(LifecycleError::RecordNotFound)` - No beneficiary with that id
    /// - `Err(LifecycleError::IdentityAlreadyDecided)` - Review already verified or rejected
    pub fn decide_identity(
        &mut self,
        beneficiary_id: &str,
        decision: IdentityDecision,
        at: NaiveDateTime,
    ) -> Result<IdentityStatus, LifecycleError> {
        let current = self
            .beneficiaries
            .find_by_id(beneficiary_id)
            .map(|b| b.identity_status)
            .ok_or_else(|| LifecycleError::RecordNotFound(beneficiary_id.to_string()))?;

        if current.is_terminal() {
            return Err(LifecycleError::IdentityAlreadyDecided {
                beneficiary_id: beneficiary_id.to_string(),
                status: current,
            });
        }

        let status = decision.target_status();
        self.beneficiaries.update_by_id(beneficiary_id, |b| {
            b.identity_status = status;
            b.updated_at = at;
        });

        tracing::info!(beneficiary_id = %beneficiary_id, status = ?status, "Identity decided");

        Ok(status)
    }
}
