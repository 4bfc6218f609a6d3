use aidhub::{
    error::form::FormError,
    form::PackageDraft,
    navigation::Session,
    scope::{compose_scope, Scope},
    store::EntityStore,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::dashboard::beneficiary_form::TextField, util::now};

/// Registers a package for one of the scope's beneficiaries, optionally from a template.
#[component]
pub fn PackageForm() -> Element {
    let mut store = use_context::<Signal<EntityStore>>();
    let mut session = use_context::<Signal<Session>>();

    let scope = session.read().scope().unwrap_or(Scope::Admin);
    let owner = match &scope {
        Scope::Organization(id) => Some(id.clone()),
        Scope::Admin | Scope::Family(_) => None,
    };

    let initial_owner = owner.clone();
    let mut draft = use_signal(move || PackageDraft {
        organization_id: initial_owner,
        ..PackageDraft::default()
    });
    let mut errors = use_signal(|| None::<FormError>);

    let message = move |field: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field_message(field))
            .map(str::to_string)
    };

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let submitted = draft.read().clone();
        let created = submitted.into_record(&store.peek(), now());

        match created {
            Ok(package) => {
                tracing::info!(id = %package.id, beneficiary_id = %package.beneficiary_id, "Package registered");
                store.write().packages.insert(package);
                errors.set(None);
                session.write().close_modal();
            }
            Err(e) => errors.set(Some(e)),
        }
    };

    let current = draft.read().clone();
    let store_ref = store.read();
    let composed = compose_scope(&store_ref, &scope);
    let value = current.value.to_string();
    let beneficiary_class = if message("beneficiary_id").is_some() {
        "select select-error w-full"
    } else {
        "select w-full"
    };

    rsx!(
        form { class: "flex flex-col gap-2", onsubmit: submit,
            if !composed.templates.is_empty() {
                fieldset { class: "fieldset",
                    legend { class: "fieldset-legend", "من قالب" }
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            let Some(template) = store.peek().templates.find_by_id(&e.value()).cloned() else {
                                return;
                            };
                            let previous = draft.peek().clone();
                            let prefilled = PackageDraft::from_template(&template, &previous.funder);
                            draft.set(PackageDraft {
                                beneficiary_id: previous.beneficiary_id,
                                organization_id: previous.organization_id.or(prefilled.organization_id.clone()),
                                ..prefilled
                            });
                        },
                        option { value: "", "بدون قالب" }
                        {composed.templates.iter().map(|template| rsx! {
                            option { key: "{template.id}", value: "{template.id}", "{template.name}" }
                        })}
                    }
                }
            }
            fieldset { class: "fieldset",
                legend { class: "fieldset-legend", "المستفيد" }
                select {
                    class: beneficiary_class,
                    onchange: move |e| draft.write().beneficiary_id = e.value(),
                    option { value: "", "اختر مستفيداً" }
                    {composed.beneficiaries.iter().map(|beneficiary| rsx! {
                        option {
                            key: "{beneficiary.id}",
                            value: "{beneficiary.id}",
                            selected: current.beneficiary_id == beneficiary.id,
                            "{beneficiary.name}"
                        }
                    })}
                }
                if let Some(error) = message("beneficiary_id") {
                    p { class: "label text-error", "{error}" }
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                TextField {
                    label: "اسم الطرد",
                    value: current.name.clone(),
                    error: message("name"),
                    oninput: move |value| draft.write().name = value,
                }
                TextField {
                    label: "النوع",
                    value: current.kind.clone(),
                    error: message("kind"),
                    oninput: move |value| draft.write().kind = value,
                }
                TextField {
                    label: "القيمة",
                    value,
                    error: message("value"),
                    oninput: move |value: String| draft.write().value = value.trim().parse().unwrap_or(0.0),
                }
                TextField {
                    label: "الجهة الممولة",
                    value: current.funder.clone(),
                    error: message("funder"),
                    oninput: move |value| draft.write().funder = value,
                }
                if owner.is_none() {
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "المؤسسة الممولة" }
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
