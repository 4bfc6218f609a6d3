use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "الصفحة غير موجودة" }
            p { class: "opacity-60", dir: "ltr", "{path}" }
            Link { to: Route::Landing {}, class: "btn btn-outline", "العودة للرئيسية" }
        }
    )
}
