use aidhub::{
    navigation::{Modal, Session},
    scope::{compose_scope, lookup::task_rows, Scope},
    store::EntityStore,
    telemetry::ErrorLog,
};
use dioxus::prelude::*;
use entity::prelude::*;

use crate::client::{
    components::dashboard::{badge, StatusBadge},
    routes::dashboard::{open_modal, EmptyState, SectionHeader},
};

/// Distribution tasks with their package, recipient and courier resolved.
#[component]
pub fn TasksTab(scope: Scope) -> Element {
    let store = use_context::<Signal<EntityStore>>();
    let session = use_context::<Signal<Session>>();
    let log = use_context::<Signal<ErrorLog>>();

    let store_ref = store.read();
    let composed = compose_scope(&store_ref, &scope);
    let rows = task_rows(&store_ref, &composed.tasks);

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "مهام التوزيع" }
            if rows.is_empty() {
                EmptyState { message: "لا توجد مهام" }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "الطرد" }
                                th { "المستفيد" }
                                th { "المندوب" }
                                th { "الحالة" }
                                th { "موعد التسليم" }
                                th {}
                            }
                        }
                        tbody {
                            {rows.iter().map(|row| {
                                let task = row.task;
                                let package = row.package_name();
                                let recipient = row.beneficiary_name();
                                let courier = row.courier.label();
                                let courier_class = if row.courier.is_assigned() { "" } else { "opacity-60" };
                                let (label, class) = badge::task_status(task.status);
                                let scheduled = task
                                    .scheduled_for
                                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                    .unwrap_or_default();
                                let can_assign = !task.status.is_terminal();
                                let can_record = matches!(task.status, TaskStatus::Assigned | TaskStatus::InProgress);
                                let assign = Modal::AssignCourier { task_id: task.id.clone() };
                                let proof = Modal::DeliveryProof { task_id: task.id.clone() };

                                rsx! {
                                    tr { key: "{task.id}",
                                        td { "{package}" }
                                        td { "{recipient}" }
                                        td { class: courier_class, "{courier}" }
                                        td { StatusBadge { label, class } }
                                        td { "{scheduled}" }
                                        td { class: "flex gap-1",
                                            if can_assign {
                                                button {
                                                    class: "btn btn-xs btn-outline",
                                                    onclick: move |_| open_modal(session, log, assign.clone()),
                                                    "تعيين مندوب"
                                                }
                                            }
                                            if can_record || task.status.is_terminal() {
                                                button {
                                                    class: "btn btn-xs btn-primary",
                                                    onclick: move |_| open_modal(session, log, proof.clone()),
                                                    if can_record { "تحديث التسليم" } else { "إثبات التسليم" }
                                                }
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}
