use aidhub::{config::AppConfig, navigation::Session, store::EntityStore, telemetry::ErrorLog};
use dioxus::prelude::*;

use crate::client::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISY_UI: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Application root.
///
/// Owns the entity store, the session and the error log, and provides each to the tree
/// as a `Signal` context.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    use_context_provider(|| Signal::new(EntityStore::seeded()));
    use_context_provider(|| Signal::new(Session::new()));
    use_context_provider(|| Signal::new(ErrorLog::new(config.error_log_capacity)));

    rsx! {
        document::Stylesheet { href: DAISY_UI }
        document::Script { src: TAILWIND }
        document::Stylesheet { href: MAIN_CSS }
        div { dir: "rtl", lang: "ar", class: "min-h-screen bg-base-100",
            Router::<Route> {}
        }
    }
}
