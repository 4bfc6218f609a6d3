//! Create and edit forms for beneficiaries and packages.
//!
//! Drafts hold the raw form input. `into_record` trims it, runs the field rules and turns
//! it into a record with a fresh id and timestamps; `apply_to` writes an edit back onto an
//! existing record. Failures come back as a [`FormError`] carrying one inline message per
//! field.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::form::{field_messages, FormError},
    store::EntityStore,
};

const BOTH_OWNERS: &str = "لا يمكن ربط المستفيد بمؤسسة وعائلة معاً";
const UNKNOWN_BENEFICIARY: &str = "المستفيد غير موجود";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BeneficiaryDraft {
    #[validate(length(min = 1, message = "الاسم مطلوب"))]
    pub name: String,
    #[validate(length(min = 1, message = "رقم الهوية مطلوب"))]
    pub national_id: String,
    #[validate(length(min = 1, message = "رقم الهاتف مطلوب"))]
    pub phone: String,
    #[validate(email(message = "البريد الإلكتروني غير صالح"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "المحافظة مطلوبة"))]
    pub governorate: String,
    #[validate(length(min = 1, message = "المدينة مطلوبة"))]
    pub city: String,
    pub district: String,
    pub street: String,
    pub organization_id: Option<String>,
    pub family_id: Option<String>,
    #[validate(range(min = 1, message = "عدد أفراد الأسرة يجب أن يكون 1 على الأقل"))]
    pub family_size: u32,
    #[validate(range(min = 0.0, message = "الدخل لا يمكن أن يكون سالباً"))]
    pub monthly_income: Option<f64>,
    pub economic_level: EconomicLevel,
    pub special_needs: Option<String>,
}

impl Default for BeneficiaryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            national_id: String::new(),
            phone: String::new(),
            email: None,
            governorate: String::new(),
            city: String::new(),
            district: String::new(),
            street: String::new(),
            organization_id: None,
            family_id: None,
            family_size: 1,
            monthly_income: None,
            economic_level: EconomicLevel::Poor,
            special_needs: None,
        }
    }
}

impl From<&Beneficiary> for BeneficiaryDraft {
    fn from(beneficiary: &Beneficiary) -> Self {
        Self {
            name: beneficiary.name.clone(),
            national_id: beneficiary.national_id.clone(),
            phone: beneficiary.phone.clone(),
            email: beneficiary.email.clone(),
            governorate: beneficiary.address.governorate.clone(),
            city: beneficiary.address.city.clone(),
            district: beneficiary.address.district.clone(),
            street: beneficiary.address.street.clone(),
            organization_id: beneficiary.organization_id.clone(),
            family_id: beneficiary.family_id.clone(),
            family_size: beneficiary.profile.family_size,
            monthly_income: beneficiary.profile.monthly_income,
            economic_level: beneficiary.profile.economic_level,
            special_needs: beneficiary.profile.special_needs.clone(),
        }
    }
}

impl BeneficiaryDraft {
    /// Trims input and runs the field rules.
    ///
    /// A beneficiary belongs to an organization or a family, never both.
    pub fn check(&self) -> Result<Self, FormError> {
        let draft = self.normalized();

        let mut fields = match draft.validate() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => field_messages(&errors),
        };
        if draft.organization_id.is_some() && draft.family_id.is_some() {
            fields.insert("family_id".to_string(), BOTH_OWNERS.to_string());
        }

        if fields.is_empty() {
            Ok(draft)
        } else {
            Err(FormError::InvalidFields(fields))
        }
    }

    /// Builds a new beneficiary with a generated id, pending identity review.
    pub fn into_record(
        self,
        store: &EntityStore,
        now: NaiveDateTime,
    ) -> Result<Beneficiary, FormError> {
        let draft = self.check()?;

        Ok(Beneficiary {
            id: store.next_id(EntityKind::Beneficiary),
            name: draft.name,
            national_id: draft.national_id,
            phone: draft.phone,
            email: draft.email,
            address: Address {
                governorate: draft.governorate,
                city: draft.city,
                district: draft.district,
                street: draft.street,
            },
            family_id: draft.family_id,
            organization_id: draft.organization_id,
            identity_status: IdentityStatus::Pending,
            status: AccountStatus::Active,
            profile: SocialProfile {
                family_size: draft.family_size,
                monthly_income: draft.monthly_income,
                economic_level: draft.economic_level,
                special_needs: draft.special_needs,
            },
            documents: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Writes an edit onto an existing beneficiary, keeping its id, review state and
    /// documents.
    pub fn apply_to(self, beneficiary: &mut Beneficiary, now: NaiveDateTime) -> Result<(), FormError> {
        let draft = self.check()?;

        beneficiary.name = draft.name;
        beneficiary.national_id = draft.national_id;
        beneficiary.phone = draft.phone;
        beneficiary.email = draft.email;
        beneficiary.address = Address {
            governorate: draft.governorate,
            city: draft.city,
            district: draft.district,
            street: draft.street,
        };
        beneficiary.organization_id = draft.organization_id;
        beneficiary.family_id = draft.family_id;
        beneficiary.profile = SocialProfile {
            family_size: draft.family_size,
            monthly_income: draft.monthly_income,
            economic_level: draft.economic_level,
            special_needs: draft.special_needs,
        };
        beneficiary.updated_at = now;

        Ok(())
    }

    fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: non_blank(&self.email),
            governorate: self.governorate.trim().to_string(),
            city: self.city.trim().to_string(),
            district: self.district.trim().to_string(),
            street: self.street.trim().to_string(),
            organization_id: non_blank(&self.organization_id),
            family_id: non_blank(&self.family_id),
            special_needs: non_blank(&self.special_needs),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PackageDraft {
    #[validate(length(min = 1, message = "اسم الطرد مطلوب"))]
    pub name: String,
    #[validate(length(min = 1, message = "نوع الطرد مطلوب"))]
    pub kind: String,
    #[validate(range(min = 0.0, message = "القيمة لا يمكن أن تكون سالبة"))]
    pub value: f64,
    #[validate(length(min = 1, message = "الجهة الممولة مطلوبة"))]
    pub funder: String,
    #[validate(length(min = 1, message = "يجب اختيار مستفيد"))]
    pub beneficiary_id: String,
    pub organization_id: Option<String>,
    pub expires_at: Option<NaiveDateTime>,
}

impl PackageDraft {
    /// Prefills a package from an organization's template.
    pub fn from_template(template: &PackageTemplate, funder: &str) -> Self {
        Self {
            name: template.name.clone(),
            kind: template.contents.join("، "),
            value: template.cost,
            funder: funder.to_string(),
            organization_id: Some(template.organization_id.clone()),
            ..Default::default()
        }
    }

    /// Builds a new pending package with a generated id.
    ///
    /// The beneficiary must exist in `store`.
    pub fn into_record(self, store: &EntityStore, now: NaiveDateTime) -> Result<Package, FormError> {
        let draft = Self {
            name: self.name.trim().to_string(),
            kind: self.kind.trim().to_string(),
            funder: self.funder.trim().to_string(),
            beneficiary_id: self.beneficiary_id.trim().to_string(),
            organization_id: non_blank(&self.organization_id),
            ..self
        };

        let mut fields = match draft.validate() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => field_messages(&errors),
        };
        if !draft.beneficiary_id.is_empty() && !store.beneficiaries.contains(&draft.beneficiary_id) {
            fields.insert("beneficiary_id".to_string(), UNKNOWN_BENEFICIARY.to_string());
        }
        if !fields.is_empty() {
            return Err(FormError::InvalidFields(fields));
        }

        Ok(Package {
            id: store.next_id(EntityKind::Package),
            name: draft.name,
            kind: draft.kind,
            value: draft.value,
            funder: draft.funder,
            beneficiary_id: draft.beneficiary_id,
            organization_id: draft.organization_id,
            status: PackageStatus::Pending,
            created_at: now,
            delivered_at: None,
            expires_at: draft.expires_at,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
