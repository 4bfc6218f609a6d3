use aidhub::navigation::{Dashboard, Session};
use dioxus::prelude::*;

use crate::client::{components::AidhubTitleButton, router::Route};

/// Layout for the public pages.
///
/// Reaching a public page leaves any open dashboard, so returning to it starts on the overview.
#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<Signal<Session>>();

    use_effect(move || {
        if session.peek().dashboard().is_some() {
            session.write().leave_dashboard();
        }
    });

    let dashboard = session.read().user().map(Dashboard::for_user);

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                AidhubTitleButton {}
            }
            div {
                class: "navbar-end",
                if let Some(dashboard) = dashboard {
                    Link {
                        to: Route::from(dashboard),
                        class: "btn btn-primary",
                        "لوحة التحكم"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline",
                        "تسجيل الدخول"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
