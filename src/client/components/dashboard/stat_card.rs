use aidhub::stats::ScopeStatistics;
use dioxus::prelude::*;

#[component]
pub fn StatCard(title: &'static str, value: String, description: Option<String>) -> Element {
    rsx!(
        div { class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            if let Some(description) = description {
                div { class: "stat-desc", "{description}" }
            }
        }
    )
}

/// Overview counters for a scope.
#[component]
pub fn StatsGrid(stats: ScopeStatistics) -> Element {
    rsx!(
        div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4",
            StatCard {
                title: "المستفيدون",
                value: stats.total_beneficiaries.to_string(),
                description: format!("{} موثق، {} بانتظار التحقق", stats.verified_beneficiaries, stats.pending_verification),
            }
            StatCard {
                title: "الطرود",
                value: stats.total_packages.to_string(),
                description: format!("{} تم تسليمها، {} قيد الانتظار", stats.delivered_packages, stats.pending_packages),
            }
            StatCard {
                title: "المهام النشطة",
                value: stats.active_tasks.to_string(),
                description: format!("{} مكتملة، {} فاشلة", stats.completed_tasks, stats.failed_tasks),
            }
            StatCard {
                title: "تنبيهات غير مقروءة",
                value: stats.unread_alerts.to_string(),
                description: format!("{} حرجة", stats.critical_unread_alerts),
            }
            StatCard {
                title: "نسبة التسليم",
                value: format!("{}%", stats.delivery_rate),
            }
            StatCard {
                title: "نسبة التوثيق",
                value: format!("{}%", stats.verification_rate),
            }
            StatCard {
                title: "نسبة إنجاز المهام",
                value: format!("{}%", stats.task_completion_rate),
            }
            StatCard {
                title: "طرود قيد التوصيل",
                value: stats.in_delivery_packages.to_string(),
                description: format!("{} فشل تسليمها", stats.failed_packages),
            }
        }
    )
}
