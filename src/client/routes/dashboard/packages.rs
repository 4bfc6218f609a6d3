use aidhub::{
    navigation::{Modal, Session},
    scope::{compose_scope, filter::PackageFilter, lookup::beneficiary_name, Scope},
    store::EntityStore,
    telemetry::ErrorLog,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use entity::prelude::*;

use crate::client::{
    components::dashboard::{badge, StatusBadge},
    routes::dashboard::{open_modal, EmptyState, SectionHeader},
};

const STATUS_FILTERS: [(&str, Option<PackageStatus>, &str); 5] = [
    ("", None, "كل الحالات"),
    ("pending", Some(PackageStatus::Pending), "قيد الانتظار"),
    ("in_delivery", Some(PackageStatus::InDelivery), "قيد التوصيل"),
    ("delivered", Some(PackageStatus::Delivered), "تم التسليم"),
    ("failed", Some(PackageStatus::Failed), "فشل التسليم"),
];

#[component]
pub fn PackagesTab(scope: Scope) -> Element {
    let store = use_context::<Signal<EntityStore>>();
    let session = use_context::<Signal<Session>>();
    let log = use_context::<Signal<ErrorLog>>();
    let mut filter = use_signal(PackageFilter::default);

    let store_ref = store.read();
    let composed = compose_scope(&store_ref, &scope);
    let rows = filter.read().apply(&composed.packages);
    let query = filter.read().query.clone();
    let can_register = !matches!(scope, Scope::Family(_));

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "الطرود",
                input {
                    class: "input input-sm",
                    placeholder: "بحث باسم الطرد أو الجهة الممولة",
                    value: "{query}",
                    oninput: move |e| filter.write().query = e.value(),
                }
                select {
                    class: "select select-sm",
                    onchange: move |e| {
                        let status = STATUS_FILTERS
                            .iter()
                            .find(|(key, _, _)| *key == e.value())
                            .and_then(|(_, status, _)| *status);
                        filter.write().status = status;
                    },
                    {STATUS_FILTERS.iter().map(|(key, _, label)| rsx! {
                        option { key: "{key}", value: "{key}", "{label}" }
                    })}
                }
                if can_register {
                    button {
                        class: "btn btn-sm btn-primary flex gap-2",
                        onclick: move |_| open_modal(session, log, Modal::NewPackage),
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "طرد جديد"
                    }
                }
            }
            if rows.is_empty() {
                EmptyState { message: "لا توجد طرود مطابقة" }
            } else {
                PackageTable { rows: rows.into_iter().cloned().collect::<Vec<_>>() }
            }
            if !composed.external_packages.is_empty() {
                h3 { class: "text-lg font-semibold mt-4", "طرود ممولة لمستفيدين من جهات أخرى" }
                PackageTable { rows: composed.external_packages.iter().copied().cloned().collect::<Vec<_>>() }
            }
        }
    )
}

#[component]
fn PackageTable(rows: Vec<Package>) -> Element {
    let store = use_context::<Signal<EntityStore>>();
    let store_ref = store.read();

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "الطرد" }
                        th { "النوع" }
                        th { "المستفيد" }
                        th { "الجهة الممولة" }
                        th { "القيمة" }
                        th { "الحالة" }
                        th { "تاريخ الإنشاء" }
                    }
                }
                tbody {
                    {rows.iter().map(|package| {
                        let recipient = beneficiary_name(&store_ref, &package.beneficiary_id);
                        let (label, class) = badge::package_status(package.status);
                        let created = package.created_at.format("%Y-%m-%d").to_string();
                        let value = format!("{:.2}", package.value);

                        rsx! {
                            tr { key: "{package.id}",
                                td { "{package.name}" }
                                td { "{package.kind}" }
                                td { "{recipient}" }
                                td { "{package.funder}" }
                                td { "{value}" }
                                td { StatusBadge { label, class } }
                                td { "{created}" }
                            }
                        }
                    })}
                }
            }
        }
    )
}
