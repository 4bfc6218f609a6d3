use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHandHoldingHeart;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn AidhubTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Landing {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaHandHoldingHeart
                }
                p { class: "text-xl",
                    "منصة المساعدات"
                }
                p { class: "text-xs",
                    "v0.1.0-Alpha.1"
                }
            }
        }
    )
}
