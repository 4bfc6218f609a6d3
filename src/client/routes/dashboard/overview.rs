use aidhub::{
    scope::{compose_scope, Scope},
    stats::ScopeStatistics,
    store::EntityStore,
};
use dioxus::prelude::*;

use crate::client::{
    components::dashboard::{badge, ExportButton, StatsGrid, StatusBadge},
    routes::dashboard::{EmptyState, SectionHeader},
};

const RECENT_ALERTS: usize = 5;

#[component]
pub fn OverviewTab(scope: Scope) -> Element {
    let store = use_context::<Signal<EntityStore>>();

    let store = store.read();
    let composed = compose_scope(&store, &scope);
    let stats = ScopeStatistics::compute(&composed);

    let mut unread: Vec<_> = composed.alerts.iter().copied().filter(|a| !a.is_read).collect();
    unread.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    unread.truncate(RECENT_ALERTS);

    let external = composed.external_packages.len();

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "نظرة عامة",
                ExportButton { scope: scope.clone() }
            }
            StatsGrid { stats }
            if external > 0 {
                div { role: "alert", class: "alert alert-info text-sm",
                    "تمول المؤسسة {external} طرداً لمستفيدين غير مسجلين لديها، وهي غير محتسبة في الإحصائيات."
                }
            }
            div { class: "card bg-base-200",
                div { class: "card-body",
                    h3 { class: "card-title text-base", "أحدث التنبيهات غير المقروءة" }
                    if unread.is_empty() {
                        EmptyState { message: "لا توجد تنبيهات جديدة" }
                    }
                    ul { class: "flex flex-col gap-2",
                        {unread.iter().map(|alert| {
                            let (label, class) = badge::alert_priority(alert.priority);

                            rsx! {
                                li { key: "{alert.id}", class: "flex items-center gap-2",
                                    StatusBadge { label, class }
                                    span { class: "font-semibold", "{alert.title}" }
                                    span { class: "text-sm opacity-75", "{alert.message}" }
                                }
                            }
                        })}
                    }
                }
            }
        }
    )
}
