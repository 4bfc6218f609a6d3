use aidhub::{
    error::form::FormError,
    form::BeneficiaryDraft,
    navigation::Session,
    scope::Scope,
    store::EntityStore,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::prelude::EconomicLevel;

use crate::client::util::now;

const ECONOMIC_LEVELS: [(EconomicLevel, &str, &str); 4] = [
    (EconomicLevel::VeryPoor, "very_poor", "فقير جداً"),
    (EconomicLevel::Poor, "poor", "فقير"),
    (EconomicLevel::Moderate, "moderate", "متوسط"),
    (EconomicLevel::Good, "good", "جيد"),
];

/// Create form when `id` is `None`, edit form for that beneficiary otherwise.
#[component]
pub fn BeneficiaryForm(id: Option<String>) -> Element {
    let mut store = use_context::<Signal<EntityStore>>();
    let mut session = use_context::<Signal<Session>>();

    let existing = id.clone();
    let mut draft = use_signal(move || {
        let store = store.peek();
        existing
            .as_deref()
            .and_then(|id| store.beneficiaries.find_by_id(id))
            .map(BeneficiaryDraft::from)
            .unwrap_or_else(|| new_draft(session.peek().scope()))
    });
    let mut errors = use_signal(|| None::<FormError>);

    let is_admin = session.read().scope() == Some(Scope::Admin);
    let message = move |field: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field_message(field))
            .map(str::to_string)
    };

    let target = id.clone();
    let submit = move |event: FormEvent| {
        event.prevent_default();

        let submitted = draft.read().clone();
        let at = now();

        let outcome = match target.as_deref() {
            Some(id) => {
                let mut outcome = Ok(());
                store
                    .write()
                    .beneficiaries
                    .update_by_id(id, |beneficiary| outcome = submitted.apply_to(beneficiary, at));
                outcome
            }
            None => {
                let created = submitted.into_record(&store.peek(), at);
                created.map(|beneficiary| {
                    tracing::info!(id = %beneficiary.id, "Beneficiary registered");
                    store.write().beneficiaries.insert(beneficiary);
                })
            }
        };

        match outcome {
            Ok(()) => {
                errors.set(None);
                session.write().close_modal();
            }
            Err(e) => errors.set(Some(e)),
        }
    };

    let current = draft.read().clone();
    let store_ref = store.read();

    rsx!(
        form { class: "flex flex-col gap-2", onsubmit: submit,
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                TextField {
                    label: "الاسم الكامل",
                    value: current.name.clone(),
                    error: message("name"),
                    oninput: move |value| draft.write().name = value,
                }
                TextField {
                    label: "رقم الهوية",
                    value: current.national_id.clone(),
                    error: message("national_id"),
                    oninput: move |value| draft.write().national_id = value,
                }
                TextField {
                    label: "رقم الهاتف",
                    value: current.phone.clone(),
                    error: message("phone"),
                    oninput: move |value| draft.write().phone = value,
                }
                TextField {
                    label: "البريد الإلكتروني",
                    value: current.email.clone().unwrap_or_default(),
                    error: message("email"),
                    oninput: move |value| draft.write().email = Some(value),
                }
                TextField {
                    label: "المحافظة",
                    value: current.governorate.clone(),
                    error: message("governorate"),
                    oninput: move |value| draft.write().governorate = value,
                }
                TextField {
                    label: "المدينة",
                    value: current.city.clone(),
                    error: message("city"),
                    oninput: move |value| draft.write().city = value,
                }
                TextField {
                    label: "الحي",
                    value: current.district.clone(),
                    oninput: move |value| draft.write().district = value,
                }
                TextField {
                    label: "الشارع",
                    value: current.street.clone(),
                    oninput: move |value| draft.write().street = value,
                }
                TextField {
                    label: "عدد أفراد الأسرة",
                    value: current.family_size.to_string(),
                    error: message("family_size"),
                    oninput: move |value: String| draft.write().family_size = value.trim().parse().unwrap_or(0),
                }
                TextField {
                    label: "الدخل الشهري",
                    value: current.monthly_income.map(|income| income.to_string()).unwrap_or_default(),
                    error: message("monthly_income"),
                    oninput: move |value: String| draft.write().monthly_income = value.trim().parse().ok(),
                }
                fieldset { class: "fieldset",
                    legend { class: "fieldset-legend", "المستوى الاقتصادي" }
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Some((level, _, _)) = ECONOMIC_LEVELS.iter().find(|(_, key, _)| *key == e.value()) {
                                draft.write().economic_level = *level;
                            }
                        },
                        {ECONOMIC_LEVELS.iter().map(|(level, key, label)| rsx! {
                            option {
                                key: "{key}",
                                value: "{key}",
                                selected: *level == current.economic_level,
                                "{label}"
                            }
                        })}
                    }
                }
                TextField {
                    label: "احتياجات خاصة",
                    value: current.special_needs.clone().unwrap_or_default(),
                    oninput: move |value| draft.write().special_needs = Some(value),
                }
                if is_admin {
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "المؤسسة" }
                        select {
                            class: "select w-full",
                            onchange: move |e| draft.write().organization_id = Some(e.value()).filter(|v| !v.is_empty()),
                            option { value: "", "بدون" }
                            {store_ref.organizations.iter().map(|organization| rsx! {
                                option {
                                    key: "{organization.id}",
                                    value: "{organization.id}",
                                    selected: current.organization_id.as_deref() == Some(organization.id.as_str()),
                                    "{organization.name}"
                                }
                            })}
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "العائلة" }
                        select {
                            class: "select w-full",
                            onchange: move |e| draft.write().family_id = Some(e.value()).filter(|v| !v.is_empty()),
                            option { value: "", "بدون" }
                            {store_ref.families.iter().map(|family| rsx! {
                                option {
                                    key: "{family.id}",
                                    value: "{family.id}",
                                    selected: current.family_id.as_deref() == Some(family.id.as_str()),
                                    "{family.name}"
                                }
                            })}
                        }
                        if let Some(error) = message("family_id") {
                            p { class: "label text-error", "{error}" }
                        }
                    }
                }
            }
            div { class: "modal-action",
                button { class: "btn btn-primary", r#type: "submit", "حفظ" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| session.write().close_modal(),
                    "إلغاء"
                }
            }
        }
    )
}

#[component]
pub(crate) fn TextField(
    label: &'static str,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let class = if error.is_some() {
        "input input-error w-full"
    } else {
        "input w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                class,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}

/// Blank draft owned by the scope's organization or family.
fn new_draft(scope: Option<Scope>) -> BeneficiaryDraft {
    let mut draft = BeneficiaryDraft::default();

    match scope {
        Some(Scope::Organization(id)) => draft.organization_id = Some(id),
        Some(Scope::Family(id)) => draft.family_id = Some(id),
        Some(Scope::Admin) | None => {}
    }

    draft
}
