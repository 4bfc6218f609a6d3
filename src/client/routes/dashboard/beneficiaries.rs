use aidhub::{
    navigation::{Modal, Session},
    scope::{compose_scope, filter::BeneficiaryFilter, lookup::owner_name, Scope},
    store::EntityStore,
    telemetry::ErrorLog,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaPen, FaTrash, FaUserPlus};
use dioxus_free_icons::Icon;
use entity::prelude::*;

use crate::client::{
    components::dashboard::{badge, StatusBadge},
    routes::dashboard::{open_modal, EmptyState, SectionHeader},
};

const IDENTITY_FILTERS: [(&str, Option<IdentityStatus>, &str); 4] = [
    ("", None, "كل الحالات"),
    ("pending", Some(IdentityStatus::Pending), "بانتظار التحقق"),
    ("verified", Some(IdentityStatus::Verified), "موثق"),
    ("rejected", Some(IdentityStatus::Rejected), "مرفوض"),
];

/// Beneficiary table with search, identity filter and record actions.
#[component]
pub fn BeneficiariesTab(scope: Scope, title: &'static str) -> Element {
    let store = use_context::<Signal<EntityStore>>();
    let session = use_context::<Signal<Session>>();
    let log = use_context::<Signal<ErrorLog>>();
    let mut filter = use_signal(BeneficiaryFilter::default);

    let store_ref = store.read();
    let composed = compose_scope(&store_ref, &scope);
    let rows = filter.read().apply(&composed.beneficiaries);
    let query = filter.read().query.clone();

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title,
                input {
                    class: "input input-sm",
                    placeholder: "بحث بالاسم أو الهوية أو الهاتف",
                    value: "{query}",
                    oninput: move |e| filter.write().query = e.value(),
                }
                select {
                    class: "select select-sm",
                    onchange: move |e| {
                        let status = IDENTITY_FILTERS
                            .iter()
                            .find(|(key, _, _)| *key == e.value())
                            .and_then(|(_, status, _)| *status);
                        filter.write().identity_status = status;
                    },
                    {IDENTITY_FILTERS.iter().map(|(key, _, label)| rsx! {
                        option { key: "{key}", value: "{key}", "{label}" }
                    })}
                }
                button {
                    class: "btn btn-sm btn-primary flex gap-2",
                    onclick: move |_| open_modal(session, log, Modal::NewBeneficiary),
                    Icon { width: 14, height: 14, icon: FaUserPlus }
                    "مستفيد جديد"
                }
            }
            if rows.is_empty() {
                EmptyState { message: "لا يوجد مستفيدون مطابقون" }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "الاسم" }
                                th { "رقم الهوية" }
                                th { "الهاتف" }
                                th { "الجهة" }
                                th { "حالة الهوية" }
                                th { "الحساب" }
                                th {}
                            }
                        }
                        tbody {
                            {rows.iter().map(|beneficiary| {
                                let owner = owner_name(&store_ref, beneficiary);
                                let (identity_label, identity_class) = badge::identity_status(beneficiary.identity_status);
                                let (account_label, account_class) = badge::account_status(beneficiary.status);
                                let details = Modal::BeneficiaryDetails { id: beneficiary.id.clone() };
                                let edit = Modal::EditBeneficiary { id: beneficiary.id.clone() };
                                let remove = Modal::ConfirmRemoval {
                                    target: EntityRef::new(EntityKind::Beneficiary, beneficiary.id.clone()),
                                };

                                rsx! {
                                    tr { key: "{beneficiary.id}",
                                        td { "{beneficiary.name}" }
                                        td { "{beneficiary.national_id}" }
                                        td { dir: "ltr", "{beneficiary.phone}" }
                                        td { "{owner}" }
                                        td { StatusBadge { label: identity_label, class: identity_class } }
                                        td { StatusBadge { label: account_label, class: account_class } }
                                        td { class: "flex gap-1",
                                            button {
                                                class: "btn btn-xs btn-ghost",
                                                title: "التفاصيل",
                                                onclick: move |_| open_modal(session, log, details.clone()),
                                                Icon { width: 14, height: 14, icon: FaEye }
                                            }
                                            button {
                                                class: "btn btn-xs btn-ghost",
                                                title: "تعديل",
                                                onclick: move |_| open_modal(session, log, edit.clone()),
                                                Icon { width: 14, height: 14, icon: FaPen }
                                            }
                                            button {
                                                class: "btn btn-xs btn-ghost text-error",
                                                title: "حذف",
                                                onclick: move |_| open_modal(session, log, remove.clone()),
                                                Icon { width: 14, height: 14, icon: FaTrash }
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
