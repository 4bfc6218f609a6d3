//! List filters used by the dashboard tables.

use entity::prelude::*;

/// Free-text and status filter over beneficiaries.
///
/// The query matches case-insensitively against name, national id and phone. An empty
/// filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeneficiaryFilter {
    pub query: String,
    pub identity_status: Option<IdentityStatus>,
    pub account_status: Option<AccountStatus>,
}

impl BeneficiaryFilter {
    pub fn matches(&self, beneficiary: &Beneficiary) -> bool {
        if let Some(status) = self.identity_status {
            if beneficiary.identity_status != status {
                return false;
            }
        }
        if let Some(status) = self.account_status {
            if beneficiary.status != status {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || beneficiary.name.to_lowercase().contains(&query)
            || beneficiary.national_id.contains(&query)
            || beneficiary.phone.contains(&query)
    }

    pub fn apply<'a>(&self, beneficiaries: &[&'a Beneficiary]) -> Vec<&'a Beneficiary> {
        beneficiaries
            .iter()
            .copied()
            .filter(|b| self.matches(b))
            .collect()
    }
}

/// Free-text and status filter over packages.
///
/// The query matches case-insensitively against name, kind and funder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilter {
    pub query: String,
    pub status: Option<PackageStatus>,
}

impl PackageFilter {
    pub fn matches(&self, package: &Package) -> bool {
        if self.status.is_some_and(|status| package.status != status) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || package.name.to_lowercase().contains(&query)
            || package.kind.to_lowercase().contains(&query)
            || package.funder.to_lowercase().contains(&query)
    }

    pub fn apply<'a>(&self, packages: &[&'a Package]) -> Vec<&'a Package> {
        packages
            .iter()
            .copied()
            .filter(|p| self.matches(p))
            .collect()
    }
}
