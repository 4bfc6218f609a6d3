use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{impl_record, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    Pending,
    InDelivery,
    Delivered,
    Failed,
}

/// An aid package destined for exactly one beneficiary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub value: f64,
    pub funder: String,
    pub beneficiary_id: String,
    pub organization_id: Option<String>,
    pub status: PackageStatus,
    pub created_at: NaiveDateTime,
    pub delivered_at: Option<NaiveDateTime>,
    pub expires_at: Option<NaiveDateTime>,
}

impl_record!(Package, EntityKind::Package);
