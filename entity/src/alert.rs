use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{impl_record, EntityKind, EntityRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Delayed,
    Failed,
    Expired,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    /// The record this alert is about. Assumed to exist when the alert is raised.
    pub related: EntityRef,
    pub created_at: NaiveDateTime,
}

impl_record!(Alert, EntityKind::Alert);
