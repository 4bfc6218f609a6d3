use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{impl_record, AccountStatus, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Organization,
    Family,
}

/// What a non-admin account acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Association {
    Organization(String),
    Family(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub association: Option<Association>,
    pub status: AccountStatus,
    pub last_login: Option<NaiveDateTime>,
}

impl_record!(SystemUser, EntityKind::SystemUser);
