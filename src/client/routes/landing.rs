use aidhub::navigation::{Dashboard, Session};
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaPeopleRoof, FaTruck};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Landing() -> Element {
    let session = use_context::<Signal<Session>>();

    let dashboard = session.read().user().map(Dashboard::for_user);

    rsx!(
        Title { "منصة المساعدات" }
        Meta {
            name: "description",
            content: "لوحة إدارية لتنسيق توزيع المساعدات الإنسانية بين المؤسسات والعائلات والمندوبين."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 max-w-256 text-center",
                div { class: "flex flex-col items-center gap-2",
                    p { class: "text-3xl font-bold", "منصة تنسيق المساعدات الإنسانية" }
                    p { class: "opacity-75",
                        "تتبع المستفيدين والطرود ومهام التوصيل في مكان واحد، مع لوحة مخصصة لكل من الإدارة والمؤسسات والعائلات."
                    }
                }
                ul { class: "flex flex-wrap justify-center gap-4",
                    Feature { title: "المستفيدون", icon: rsx!(Icon { width: 32, height: 32, icon: FaPeopleRoof }) }
                    Feature { title: "الطرود", icon: rsx!(Icon { width: 32, height: 32, icon: FaBoxOpen }) }
                    Feature { title: "التوصيل", icon: rsx!(Icon { width: 32, height: 32, icon: FaTruck }) }
                }
                if let Some(dashboard) = dashboard {
                    Link {
                        to: Route::from(dashboard),
                        class: "btn btn-primary w-48",
                        "الذهاب إلى لوحة التحكم"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-48",
                        "تسجيل الدخول"
                    }
                }
            }
        }
    )
}

#[component]
fn Feature(title: &'static str, icon: Element) -> Element {
    rsx!(
        li { class: "card bg-base-200 w-40",
            div { class: "card-body items-center gap-2",
                {icon}
                p { class: "font-semibold", "{title}" }
            }
        }
    )
}
