use aidhub::{
    scope::{compose_scope, Scope},
    store::EntityStore,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::dashboard::{badge, StatusBadge},
    routes::dashboard::{EmptyState, SectionHeader},
};

#[component]
pub fn AlertsTab(scope: Scope) -> Element {
    let mut store = use_context::<Signal<EntityStore>>();

    let mut alerts: Vec<_> = {
        let store_ref = store.read();
        compose_scope(&store_ref, &scope)
            .alerts
            .into_iter()
            .cloned()
            .collect()
    };
    alerts.sort_by(|a, b| {
        a.is_read
            .cmp(&b.is_read)
            .then_with(|| b.priority.cmp(&a.priority))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    let unread = alerts.iter().filter(|alert| !alert.is_read).count();

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "التنبيهات",
                span { class: "text-sm opacity-75", "غير مقروءة: {unread}" }
                button {
                    class: "btn btn-sm btn-outline",
                    disabled: unread == 0,
                    onclick: move |_| {
                        let marked = store.write().mark_all_alerts_read(&scope);
                        tracing::info!(marked, "Alerts marked as read");
                    },
                    "تعليم الكل كمقروء"
                }
            }
            if alerts.is_empty() {
                EmptyState { message: "لا توجد تنبيهات" }
            }
            ul { class: "flex flex-col gap-2",
                {alerts.into_iter().map(move |alert| {
                    let (label, class) = badge::alert_priority(alert.priority);
                    let created = alert.created_at.format("%Y-%m-%d %H:%M").to_string();
                    let row_class = if alert.is_read {
                        "card bg-base-200 opacity-60"
                    } else {
                        "card bg-base-200 border-s-4 border-primary"
                    };
                    let id = alert.id.clone();

                    rsx! {
                        li { key: "{alert.id}", class: row_class,
                            div { class: "card-body p-4 flex-row items-center justify-between gap-4",
                                div { class: "flex flex-col gap-1",
                                    div { class: "flex items-center gap-2",
                                        StatusBadge { label, class }
                                        span { class: "font-semibold", "{alert.title}" }
                                    }
                                    p { class: "text-sm", "{alert.message}" }
                                    p { class: "text-xs opacity-60", "{created}" }
                                }
                                if !alert.is_read {
                                    button {
                                        class: "btn btn-xs btn-ghost",
                                        onclick: move |_| {
                                            store.write().mark_alert_read(&id);
                                        },
                                        "تعليم كمقروء"
                                    }
                                }
                            }
                        }
                    }
                })}
            }
        }
    )
}
