use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{impl_record, EntityKind};

/// Delivery task lifecycle.
///
/// `Pending → Assigned → InProgress → {Delivered | Failed | Rescheduled}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Assigned,
    InProgress,
    Delivered,
    Failed,
    Rescheduled,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Failed)
    }

    /// Assigned or in progress.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Assigned | Self::InProgress)
    }
}

/// Evidence captured when a courier closes a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryProof {
    pub signature_image: Option<String>,
    pub proof_image: Option<String>,
    pub notes: Option<String>,
}

/// Delivery of one package to one beneficiary, optionally by a courier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub package_id: String,
    pub beneficiary_id: String,
    pub courier_id: Option<String>,
    pub status: TaskStatus,
    pub proof: DeliveryProof,
    pub failure_reason: Option<String>,
    pub scheduled_for: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl_record!(Task, EntityKind::Task);
