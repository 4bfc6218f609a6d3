use aidhub::{
    lifecycle::{IdentityDecision, TaskAction},
    navigation::{Modal, Session},
    scope::lookup::{beneficiary_name, courier_for, owner_name, NOT_SPECIFIED},
    store::EntityStore,
};
use chrono::Duration;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::*;

use crate::client::{
    components::dashboard::{badge, BeneficiaryForm, PackageForm, StatusBadge},
    util::now,
};

/// Renders the session's open modal, if any.
#[component]
pub fn ModalHost() -> Element {
    let mut session = use_context::<Signal<Session>>();

    let Some(modal) = session.read().modal().cloned() else {
        return rsx!();
    };
    let title = modal.title();

    let body = match modal {
        Modal::BeneficiaryDetails { id } => rsx!(BeneficiaryDetails { id }),
        Modal::EditBeneficiary { id } => rsx!(BeneficiaryForm { id }),
        Modal::NewBeneficiary => rsx!(BeneficiaryForm {}),
        Modal::NewPackage => rsx!(PackageForm {}),
        Modal::AssignCourier { task_id } => rsx!(AssignCourier { task_id }),
        Modal::DeliveryProof { task_id } => rsx!(DeliveryProofForm { task_id }),
        Modal::ConfirmRemoval { target } => rsx!(ConfirmRemoval { target }),
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                div { class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| session.write().close_modal(),
                        "✕"
                    }
                }
                {body}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| session.write().close_modal(),
            }
        }
    )
}

#[component]
fn BeneficiaryDetails(id: String) -> Element {
    let store = use_context::<Signal<EntityStore>>();
    let error = use_signal(|| None::<String>);

    let store_ref = store.read();
    let Some(beneficiary) = store_ref.beneficiaries.find_by_id(&id) else {
        return rsx!(p { {NOT_SPECIFIED} });
    };

    let owner = owner_name(&store_ref, beneficiary);
    let (status_label, status_class) = badge::identity_status(beneficiary.identity_status);
    let registered = beneficiary.created_at.format("%Y-%m-%d").to_string();
    let address = format!(
        "{}، {}، {}",
        beneficiary.address.governorate, beneficiary.address.city, beneficiary.address.district
    );
    let packages = store_ref.packages.filter(|p| p.beneficiary_id == id);
    let awaiting_review = !beneficiary.identity_status.is_terminal();

    let verify_id = id.clone();
    let reject_id = id.clone();

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "grid grid-cols-2 gap-2 text-sm",
                p { class: "opacity-60", "الاسم" }
                p { "{beneficiary.name}" }
                p { class: "opacity-60", "رقم الهوية" }
                p { "{beneficiary.national_id}" }
                p { class: "opacity-60", "الهاتف" }
                p { "{beneficiary.phone}" }
                p { class: "opacity-60", "العنوان" }
                p { "{address}" }
                p { class: "opacity-60", "الجهة" }
                p { "{owner}" }
                p { class: "opacity-60", "تاريخ التسجيل" }
                p { "{registered}" }
                p { class: "opacity-60", "حالة الهوية" }
                p { StatusBadge { label: status_label, class: status_class } }
            }
            div {
                h4 { class: "font-semibold mb-2", "الطرود" }
                if packages.is_empty() {
                    p { class: "text-sm opacity-60", "لا توجد طرود" }
                }
                ul { class: "flex flex-col gap-1 text-sm",
                    {packages.iter().map(|package| {
                        let (label, class) = badge::package_status(package.status);

                        rsx! {
                            li { key: "{package.id}", class: "flex justify-between",
                                span { "{package.name}" }
                                StatusBadge { label, class }
                            }
                        }
                    })}
                }
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
            if awaiting_review {
                div { class: "modal-action",
                    button {
                        class: "btn btn-success",
                        onclick: move |_| decide(store, error, &verify_id, IdentityDecision::Verify),
                        "توثيق الهوية"
                    }
                    button {
                        class: "btn btn-error btn-outline",
                        onclick: move |_| decide(store, error, &reject_id, IdentityDecision::Reject),
                        "رفض"
                    }
                }
            }
        }
    )
}

fn decide(
    mut store: Signal<EntityStore>,
    mut error: Signal<Option<String>>,
    id: &str,
    decision: IdentityDecision,
) {
    match store.write().decide_identity(id, decision, now()) {
        Ok(_) => error.set(None),
        Err(e) => error.set(Some(e.user_message())),
    }
}

#[component]
fn AssignCourier(task_id: String) -> Element {
    let mut store = use_context::<Signal<EntityStore>>();
    let mut session = use_context::<Signal<Session>>();
    let mut error = use_signal(|| None::<String>);

    let store_ref = store.read();
    let current = store_ref
        .tasks
        .find_by_id(&task_id)
        .map(|task| courier_for(&store_ref, task).label())
        .unwrap_or(NOT_SPECIFIED);

    rsx!(
        div { class: "flex flex-col gap-4",
            p { class: "text-sm", "المندوب الحالي: {current}" }
            ul { class: "flex flex-col gap-2",
                {store_ref.couriers.iter().map(move |courier| {
                    let (label, class) = badge::courier_status(courier.status);
                    let courier_id = courier.id.clone();
                    let task_id = task_id.clone();

                    rsx! {
                        li { key: "{courier.id}", class: "flex items-center justify-between gap-2",
                            div { class: "flex items-center gap-2",
                                span { "{courier.name}" }
                                StatusBadge { label, class }
                                span { class: "text-xs opacity-60", "★ {courier.rating}" }
                            }
                            button {
                                class: "btn btn-sm btn-primary",
                                disabled: courier.status == CourierStatus::Offline,
                                onclick: move |_| {
                                    let action = TaskAction::Assign { courier_id: courier_id.clone() };
                                    match store.write().apply_task_action(&task_id, action, now()) {
                                        Ok(_) => session.write().close_modal(),
                                        Err(e) => error.set(Some(e.user_message())),
                                    }
                                },
                                "تعيين"
                            }
                        }
                    }
                })}
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
        }
    )
}

#[component]
fn DeliveryProofForm(task_id: String) -> Element {
    let mut store = use_context::<Signal<EntityStore>>();
    let mut session = use_context::<Signal<Session>>();
    let mut proof = use_signal(DeliveryProof::default);
    let mut error = use_signal(|| None::<String>);

    let target = task_id.clone();
    let apply = use_callback(move |action: TaskAction| {
        let result = store.write().apply_task_action(&target, action, now());
        match result {
            Ok(status) => {
                tracing::debug!(?status, "Task updated from delivery dialog");
                session.write().close_modal();
            }
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    let store_ref = store.read();
    let Some(task) = store_ref.tasks.find_by_id(&task_id) else {
        return rsx!(p { {NOT_SPECIFIED} });
    };
    let recipient = beneficiary_name(&store_ref, &task.beneficiary_id);
    let status = task.status;
    let recorded = task.proof.clone();
    let failure = task.failure_reason.clone();

    if status.is_terminal() {
        return rsx!(
            div { class: "flex flex-col gap-2 text-sm",
                p { "المستلم: {recipient}" }
                if let Some(notes) = recorded.notes {
                    p { "ملاحظات: {notes}" }
                }
                if let Some(signature) = recorded.signature_image {
                    img { class: "max-h-32", src: "{signature}", alt: "التوقيع" }
                }
                if let Some(image) = recorded.proof_image {
                    img { class: "max-h-48", src: "{image}", alt: "صورة الإثبات" }
                }
                if let Some(reason) = failure {
                    p { class: "text-error", "سبب الفشل: {reason}" }
                }
            }
        );
    }

    rsx!(
        div { class: "flex flex-col gap-3",
            p { class: "text-sm", "المستلم: {recipient}" }
            fieldset { class: "fieldset",
                legend { class: "fieldset-legend", "رابط صورة التوقيع" }
                input {
                    class: "input w-full",
                    oninput: move |e| proof.write().signature_image = Some(e.value()).filter(|v| !v.is_empty()),
                }
            }
            fieldset { class: "fieldset",
                legend { class: "fieldset-legend", "رابط صورة الإثبات" }
                input {
                    class: "input w-full",
                    oninput: move |e| proof.write().proof_image = Some(e.value()).filter(|v| !v.is_empty()),
                }
            }
            fieldset { class: "fieldset",
                legend { class: "fieldset-legend", "ملاحظات" }
                textarea {
                    class: "textarea w-full",
                    oninput: move |e| proof.write().notes = Some(e.value()).filter(|v| !v.is_empty()),
                }
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
            div { class: "modal-action flex-wrap",
                if status == TaskStatus::Assigned {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| apply.call(TaskAction::Start),
                        "بدء التوصيل"
                    }
                }
                if status == TaskStatus::InProgress {
                    button {
                        class: "btn btn-success",
                        onclick: move |_| apply.call(TaskAction::Deliver { proof: proof() }),
                        "تأكيد التسليم"
                    }
                    button {
                        class: "btn btn-warning",
                        onclick: move |_| apply.call(TaskAction::Reschedule { scheduled_for: now() + Duration::days(1) }),
                        "تأجيل ليوم غد"
                    }
                    button {
                        class: "btn btn-error btn-outline",
                        onclick: move |_| {
                            let reason = proof().notes.unwrap_or_else(|| "تعذر التسليم".to_string());
                            apply.call(TaskAction::Fail { reason });
                        },
                        "تعذر التسليم"
                    }
                }
            }
        }
    )
}

#[component]
fn ConfirmRemoval(target: EntityRef) -> Element {
    let mut store = use_context::<Signal<EntityStore>>();
    let mut session = use_context::<Signal<Session>>();

    let exists = store.read().contains(&target);
    let id = target.id.clone();

    rsx!(
        div { class: "flex flex-col gap-4",
            if exists {
                p { "هل أنت متأكد من حذف السجل {id}؟ لا يمكن التراجع عن هذه العملية." }
            } else {
                p { "السجل غير موجود." }
            }
            div { class: "modal-action",
                button {
                    class: "btn btn-error",
                    disabled: !exists,
                    onclick: move |_| {
                        if store.write().remove(&target) {
                            tracing::info!(id = %target.id, kind = ?target.kind, "Record removed");
                        }
                        session.write().close_modal();
                    },
                    "حذف"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| session.write().close_modal(),
                    "إلغاء"
                }
            }
        }
    )
}
