use entity::prelude::EntityRef;
use serde::{Deserialize, Serialize};

/// The dialog open over a dashboard tab. At most one is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "modal", rename_all = "snake_case")]
pub enum Modal {
    BeneficiaryDetails { id: String },
    EditBeneficiary { id: String },
    NewBeneficiary,
    NewPackage,
    AssignCourier { task_id: String },
    DeliveryProof { task_id: String },
    ConfirmRemoval { target: EntityRef },
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Self::BeneficiaryDetails { .. } => "تفاصيل المستفيد",
            Self::EditBeneficiary { .. } => "تعديل بيانات المستفيد",
            Self::NewBeneficiary => "إضافة مستفيد جديد",
            Self::NewPackage => "إضافة طرد جديد",
            Self::AssignCourier { .. } => "تعيين مندوب",
            Self::DeliveryProof { .. } => "إثبات التسليم",
            Self::ConfirmRemoval { .. } => "تأكيد الحذف",
        }
    }
}
