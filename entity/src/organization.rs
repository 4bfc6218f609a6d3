use serde::{Deserialize, Serialize};

use crate::{impl_record, EntityKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub contact_phone: Option<String>,
    /// Ids of the package templates this organization maintains.
    pub template_ids: Vec<String>,
}

impl_record!(Organization, EntityKind::Organization);
