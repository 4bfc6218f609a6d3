//! Record types for the aid distribution entity graph.
//!
//! Every record carries an opaque string identifier and implements [`Record`] so the
//! store can hold it in a generic collection. Relations between records are plain id
//! references; joining them is the job of the application's view composer.

/// Implements [`Record`] for a struct with a `pub id: String` field.
macro_rules! impl_record {
    ($ty:ty, $kind:expr) => {
        impl $crate::Record for $ty {
            const KIND: $crate::EntityKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

pub(crate) use impl_record;

pub mod alert;
pub mod beneficiary;
pub mod courier;
pub mod dataset;
pub mod family;
pub mod organization;
pub mod package;
pub mod task;
pub mod template;
pub mod user;

use serde::{Deserialize, Serialize};

/// Kind of record an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Beneficiary,
    Package,
    Task,
    Courier,
    Organization,
    Family,
    PackageTemplate,
    Alert,
    SystemUser,
}

impl EntityKind {
    /// Prefix used when generating new ids for this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Beneficiary => "ben",
            Self::Package => "pkg",
            Self::Task => "task",
            Self::Courier => "cour",
            Self::Organization => "org",
            Self::Family => "fam",
            Self::PackageTemplate => "tpl",
            Self::Alert => "alert",
            Self::SystemUser => "user",
        }
    }
}

/// Reference to another record by id and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    pub kind: EntityKind,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// A record that can be stored in an id-keyed collection.
pub trait Record: Clone {
    /// The kind of record stored.
    const KIND: EntityKind;

    /// The record's identity field.
    fn id(&self) -> &str;
}

/// Account status shared by beneficiaries and system users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Pending,
    Suspended,
}

pub mod prelude {
    pub use crate::{
        alert::{Alert, AlertKind, AlertPriority},
        beneficiary::{Address, Beneficiary, Document, EconomicLevel, IdentityStatus, SocialProfile},
        courier::{Courier, CourierStatus},
        dataset::Dataset,
        family::Family,
        organization::Organization,
        package::{Package, PackageStatus},
        task::{DeliveryProof, Task, TaskStatus},
        template::PackageTemplate,
        user::{Association, Role, SystemUser},
        AccountStatus, EntityKind, EntityRef, Record,
    };
}
