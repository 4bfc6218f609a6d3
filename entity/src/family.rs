use serde::{Deserialize, Serialize};

use crate::{impl_record, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub id: String,
    pub name: String,
    pub head_of_family: String,
    pub location: String,
    /// Share of the family's expected deliveries already completed, 0 to 100.
    pub completion_rate: f32,
}

impl_record!(Family, EntityKind::Family);
