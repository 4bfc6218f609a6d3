//! Lifecycle transition errors.
//!
//! Raised when an action would move a task or a beneficiary's identity review into a state
//! the lifecycle does not allow, or when the record the action targets is missing.

use entity::prelude::{IdentityStatus, TaskStatus};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    /// The task cannot move from its current status to the requested one.
    #[error("Task {task_id} cannot move from {from:?} to {to:?}")]
    InvalidTaskTransition {
        task_id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
    /// Identity review already reached a terminal decision.
    #[error("Identity of beneficiary {beneficiary_id} was already decided as {status:?}")]
    IdentityAlreadyDecided {
        beneficiary_id: String,
        status: IdentityStatus,
    },
    /// Assigning a courier id that is not in the store.
    #[error("Courier {0} does not exist")]
    CourierNotFound(String),
    /// The record the action targets is not in the store.
    #[error("Record {0} does not exist")]
    RecordNotFound(String),
}

impl LifecycleError {
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidTaskTransition { .. } => {
                "لا يمكن تنفيذ هذا الإجراء على المهمة في حالتها الحالية".to_string()
            }
            Self::IdentityAlreadyDecided { .. } => "تم البت في هوية المستفيد مسبقاً".to_string(),
            Self::CourierNotFound(_) => "المندوب المحدد غير موجود".to_string(),
            Self::RecordNotFound(_) => "العنصر المطلوب غير موجود".to_string(),
        }
    }
}
