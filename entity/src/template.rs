use serde::{Deserialize, Serialize};

use crate::{impl_record, EntityKind};

/// Reusable package blueprint owned by an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTemplate {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub contents: Vec<String>,
    pub weight_kg: f32,
    pub cost: f64,
    pub usage_count: u32,
}

impl_record!(PackageTemplate, EntityKind::PackageTemplate);
