use aidhub::{
    config::AppConfig,
    navigation::{authenticate, Credentials, Dashboard, Session},
    store::EntityStore,
};
use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::Page,
    router::Route,
    util::{now, sleep},
};

/// Seeded accounts offered as one-click fills on the login form.
const DEMO_ACCOUNTS: [(&str, &str); 4] = [
    ("admin@aidhub.org", "الإدارة"),
    ("redcrescent@aidhub.org", "مؤسسة"),
    ("abuahmad@aidhub.org", "عائلة"),
    ("suspended@aidhub.org", "حساب موقوف"),
];

#[component]
pub fn Login() -> Element {
    let config = use_context::<AppConfig>();
    let mut store = use_context::<Signal<EntityStore>>();
    let mut session = use_context::<Signal<Session>>();
    let router = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    use_effect(move || {
        if !session.peek().is_authenticated() {
            session.write().open_login();
        }
    });

    // Signed-in users go straight to their dashboard.
    use_effect(move || {
        let dashboard = session.read().user().map(Dashboard::for_user);
        if let Some(dashboard) = dashboard {
            router.replace(Route::from(dashboard));
        }
    });

    let login_delay = config.login_delay;
    let submit = move |event: FormEvent| async move {
        event.prevent_default();
        if pending() {
            return;
        }

        pending.set(true);
        error.set(None);

        let credentials = Credentials::new(email(), password());
        sleep(login_delay).await;

        let result = authenticate(&mut store.write(), &credentials, now());
        match result {
            Ok(user) => {
                session.write().login(user);
            }
            Err(e) => error.set(Some(e.user_message())),
        }

        pending.set(false);
    };

    rsx!(
        Title { "تسجيل الدخول | منصة المساعدات" }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-200 w-full max-w-96 shadow-sm",
                form { class: "card-body gap-3", onsubmit: submit,
                    h2 { class: "card-title", "تسجيل الدخول" }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "البريد الإلكتروني" }
                        input {
                            class: "input w-full",
                            r#type: "email",
                            dir: "ltr",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "كلمة المرور" }
                        input {
                            class: "input w-full",
                            r#type: "password",
                            dir: "ltr",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { role: "alert", class: "text-error text-sm", "{message}" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "دخول"
                    }
                    div { class: "divider text-xs", "حسابات تجريبية" }
                    ul { class: "flex flex-wrap gap-2 justify-center",
                        {DEMO_ACCOUNTS.iter().map(move |&(account, label)| rsx! {
                            li { key: "{account}",
                                button {
                                    class: "btn btn-xs btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| {
                                        email.set(account.to_string());
                                        password.set("demo".to_string());
                                    },
                                    "{label}"
                                }
                            }
                        })}
                    }
                }
            }
        }
    )
}
