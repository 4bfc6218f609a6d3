use serde::{Deserialize, Serialize};

use crate::{impl_record, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourierStatus {
    Active,
    Busy,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub rating: f32,
    pub completed_tasks: u32,
    pub status: CourierStatus,
}

impl_record!(Courier, EntityKind::Courier);
