//! Directory tabs: couriers, organizations, families, templates and accounts.

use aidhub::{
    scope::{
        compose_scope,
        lookup::{family_name, organization_name},
        Scope,
    },
    stats::ScopeStatistics,
    store::EntityStore,
};
use dioxus::prelude::*;
use entity::prelude::*;

use crate::client::{
    components::dashboard::{badge, StatusBadge},
    routes::dashboard::{EmptyState, SectionHeader},
};

#[component]
pub fn CouriersTab(scope: Scope) -> Element {
    let store = use_context::<Signal<EntityStore>>();

    let store_ref = store.read();
    let composed = compose_scope(&store_ref, &scope);

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "المندوبون" }
            if composed.couriers.is_empty() {
                EmptyState { message: "لا يوجد مندوبون" }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                {composed.couriers.iter().map(|courier| {
                    let (label, class) = badge::courier_status(courier.status);
                    let rating = format!("{:.1}", courier.rating);

                    rsx! {
                        div { key: "{courier.id}", class: "card bg-base-200",
                            div { class: "card-body p-4",
                                div { class: "flex justify-between items-center",
                                    h3 { class: "card-title text-base", "{courier.name}" }
                                    StatusBadge { label, class }
                                }
                                p { class: "text-sm", dir: "ltr", "{courier.phone}" }
                                p { class: "text-sm", "التقييم: {rating} ★" }
                                p { class: "text-sm", "مهام منجزة: {courier.completed_tasks}" }
                            }
                        }
                    }
                })}
            }
        }
    )
}

/// Every organization with the statistics of its own scope.
#[component]
pub fn OrganizationsTab() -> Element {
    let store = use_context::<Signal<EntityStore>>();

    let store_ref = store.read();

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "المؤسسات" }
            if store_ref.organizations.is_empty() {
                EmptyState { message: "لا توجد مؤسسات" }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "المؤسسة" }
                            th { "الهاتف" }
                            th { "المستفيدون" }
                            th { "الطرود" }
                            th { "نسبة التسليم" }
                            th { "القوالب" }
                        }
                    }
                    tbody {
                        {store_ref.organizations.iter().map(|organization| {
                            let composed = compose_scope(&store_ref, &Scope::Organization(organization.id.clone()));
                            let stats = ScopeStatistics::compute(&composed);
                            let phone = organization.contact_phone.clone().unwrap_or_default();
                            let templates = organization.template_ids.len();

                            rsx! {
                                tr { key: "{organization.id}",
                                    td { "{organization.name}" }
                                    td { dir: "ltr", "{phone}" }
                                    td { "{stats.total_beneficiaries}" }
                                    td { "{stats.total_packages}" }
                                    td { "{stats.delivery_rate}%" }
                                    td { "{templates}" }
                                }
                            }
                        })}
                    }
                }
            }
        }
    )
}

#[component]
pub fn FamiliesTab() -> Element {
    let store = use_context::<Signal<EntityStore>>();

    let store_ref = store.read();

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "العائلات" }
            if store_ref.families.is_empty() {
                EmptyState { message: "لا توجد عائلات" }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                {store_ref.families.iter().map(|family| {
                    let members = store_ref
                        .beneficiaries
                        .filter(|b| b.family_id.as_deref() == Some(family.id.as_str()))
                        .len();
                    let completion = family.completion_rate.clamp(0.0, 100.0).round() as u8;

                    rsx! {
                        div { key: "{family.id}", class: "card bg-base-200",
                            div { class: "card-body p-4",
                                h3 { class: "card-title text-base", "{family.name}" }
                                p { class: "text-sm", "رب الأسرة: {family.head_of_family}" }
                                p { class: "text-sm", "الموقع: {family.location}" }
                                p { class: "text-sm", "عدد الأفراد المسجلين: {members}" }
                                div { class: "flex items-center gap-2",
                                    progress { class: "progress progress-primary", value: "{completion}", max: "100" }
                                    span { class: "text-xs", "{completion}%" }
                                }
                            }
                        }
                    }
                })}
            }
        }
    )
}

#[component]
pub fn TemplatesTab(scope: Scope) -> Element {
    let store = use_context::<Signal<EntityStore>>();

    let store_ref = store.read();
    let composed = compose_scope(&store_ref, &scope);

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "قوالب الطرود" }
            if composed.templates.is_empty() {
                EmptyState { message: "لا توجد قوالب" }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                {composed.templates.iter().map(|template| {
                    let contents = template.contents.join("، ");
                    let cost = format!("{:.2}", template.cost);
                    let weight = format!("{:.1}", template.weight_kg);

                    rsx! {
                        div { key: "{template.id}", class: "card bg-base-200",
                            div { class: "card-body p-4",
                                h3 { class: "card-title text-base", "{template.name}" }
                                p { class: "text-sm", "{contents}" }
                                div { class: "flex gap-4 text-xs opacity-75",
                                    span { "الوزن: {weight} كغ" }
                                    span { "التكلفة: {cost}" }
                                    span { "الاستخدام: {template.usage_count}" }
                                }
                            }
                        }
                    }
                })}
            }
        }
    )
}

#[component]
pub fn UsersTab() -> Element {
    let store = use_context::<Signal<EntityStore>>();

    let store_ref = store.read();

    rsx!(
        div { class: "flex flex-col gap-4",
            SectionHeader { title: "المستخدمون" }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "الاسم" }
                            th { "البريد الإلكتروني" }
                            th { "الدور" }
                            th { "الجهة" }
                            th { "الحالة" }
                            th { "آخر دخول" }
                        }
                    }
                    tbody {
                        {store_ref.users.iter().map(|user| {
                            let role = badge::role(user.role);
                            let association = match &user.association {
                                Some(Association::Organization(id)) => organization_name(&store_ref, Some(id.as_str())),
                                Some(Association::Family(id)) => family_name(&store_ref, Some(id.as_str())),
                                None => "",
                            };
                            let (label, class) = badge::account_status(user.status);
                            let last_login = user
                                .last_login
                                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                .unwrap_or_else(|| "لم يسجل الدخول".to_string());

                            rsx! {
                                tr { key: "{user.id}",
                                    td { "{user.name}" }
                                    td { dir: "ltr", "{user.email}" }
                                    td { "{role}" }
                                    td { "{association}" }
                                    td { StatusBadge { label, class } }
                                    td { "{last_login}" }
                                }
                            }
                        })}
                    }
                }
            }
        }
    )
}
