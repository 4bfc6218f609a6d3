use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Plain collections of every record type, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub beneficiaries: Vec<Beneficiary>,
    pub packages: Vec<Package>,
    pub tasks: Vec<Task>,
    pub couriers: Vec<Courier>,
    pub organizations: Vec<Organization>,
    pub families: Vec<Family>,
    pub templates: Vec<PackageTemplate>,
    pub alerts: Vec<Alert>,
    pub users: Vec<SystemUser>,
}
