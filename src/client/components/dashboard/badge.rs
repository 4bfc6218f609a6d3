//! Status labels and badge colours.

use dioxus::prelude::*;
use entity::prelude::*;

#[component]
pub fn StatusBadge(label: &'static str, class: &'static str) -> Element {
    rsx!(
        span { class: "badge {class}", "{label}" }
    )
}

pub fn identity_status(status: IdentityStatus) -> (&'static str, &'static str) {
    match status {
        IdentityStatus::Pending => ("بانتظار التحقق", "badge-warning"),
        IdentityStatus::Verified => ("موثق", "badge-success"),
        IdentityStatus::Rejected => ("مرفوض", "badge-error"),
    }
}

pub fn package_status(status: PackageStatus) -> (&'static str, &'static str) {
    match status {
        PackageStatus::Pending => ("قيد الانتظار", "badge-ghost"),
        PackageStatus::InDelivery => ("قيد التوصيل", "badge-info"),
        PackageStatus::Delivered => ("تم التسليم", "badge-success"),
        PackageStatus::Failed => ("فشل التسليم", "badge-error"),
    }
}

pub fn task_status(status: TaskStatus) -> (&'static str, &'static str) {
    match status {
        TaskStatus::Pending => ("جديدة", "badge-ghost"),
        TaskStatus::Assigned => ("معينة", "badge-info"),
        TaskStatus::InProgress => ("قيد التنفيذ", "badge-primary"),
        TaskStatus::Delivered => ("مكتملة", "badge-success"),
        TaskStatus::Failed => ("فاشلة", "badge-error"),
        TaskStatus::Rescheduled => ("معاد جدولتها", "badge-warning"),
    }
}

pub fn courier_status(status: CourierStatus) -> (&'static str, &'static str) {
    match status {
        CourierStatus::Active => ("متاح", "badge-success"),
        CourierStatus::Busy => ("مشغول", "badge-warning"),
        CourierStatus::Offline => ("غير متصل", "badge-ghost"),
    }
}

pub fn account_status(status: AccountStatus) -> (&'static str, &'static str) {
    match status {
        AccountStatus::Active => ("نشط", "badge-success"),
        AccountStatus::Pending => ("معلق", "badge-warning"),
        AccountStatus::Suspended => ("موقوف", "badge-error"),
    }
}

pub fn alert_priority(priority: AlertPriority) -> (&'static str, &'static str) {
    match priority {
        AlertPriority::Low => ("منخفضة", "badge-ghost"),
        AlertPriority::Medium => ("متوسطة", "badge-info"),
        AlertPriority::High => ("عالية", "badge-warning"),
        AlertPriority::Critical => ("حرجة", "badge-error"),
    }
}

pub fn role(role: Role) -> &'static str {
    match role {
        Role::Admin => "مدير",
        Role::Organization => "مؤسسة",
        Role::Family => "عائلة",
    }
}
