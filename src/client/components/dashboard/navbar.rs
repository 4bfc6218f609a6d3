use aidhub::navigation::{Dashboard, Session};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{dashboard::badge, AidhubTitleButton},
    router::Route,
};

#[component]
pub fn DashboardNavbar(dashboard: Dashboard) -> Element {
    let mut session = use_context::<Signal<Session>>();
    let router = navigator();

    let user = session.read().user().cloned();
    let title = dashboard.title();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-4",
                AidhubTitleButton {}
                p { class: "font-semibold", "{title}" }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(user) = user {
                    div { class: "flex flex-col items-end",
                        p { class: "text-sm", "{user.name}" }
                        p { class: "text-xs opacity-60", {badge::role(user.role)} }
                    }
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| {
                        session.write().logout();
                        router.push(Route::Landing {});
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "تسجيل الخروج"
                }
            }
        }
    }
}
