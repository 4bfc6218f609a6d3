use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{impl_record, AccountStatus, EntityKind};

/// Review state of a beneficiary's identity documents.
///
/// `Pending` moves to either `Verified` or `Rejected`, both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    Pending,
    Verified,
    Rejected,
}

impl IdentityStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified | Self::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EconomicLevel {
    VeryPoor,
    Poor,
    Moderate,
    Good,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub governorate: String,
    pub city: String,
    pub district: String,
    pub street: String,
}

/// Economic and social attributes collected during registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub family_size: u32,
    pub monthly_income: Option<f64>,
    pub economic_level: EconomicLevel,
    pub special_needs: Option<String>,
}

/// An attached identity or supporting document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub url: String,
    pub uploaded_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub id: String,
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Address,
    pub family_id: Option<String>,
    pub organization_id: Option<String>,
    pub identity_status: IdentityStatus,
    pub status: AccountStatus,
    pub profile: SocialProfile,
    pub documents: Vec<Document>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl_record!(Beneficiary, EntityKind::Beneficiary);
