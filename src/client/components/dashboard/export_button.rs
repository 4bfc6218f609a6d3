use aidhub::{
    config::AppConfig,
    export::ExportDocument,
    scope::{compose_scope, Scope},
    store::EntityStore,
    telemetry::{ErrorLog, ErrorReport},
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaDownload;
use dioxus_free_icons::Icon;

use crate::client::util::{now, report_error};

/// Download link for the scope's records as JSON.
#[component]
pub fn ExportButton(scope: Scope) -> Element {
    let config = use_context::<AppConfig>();
    let store = use_context::<Signal<EntityStore>>();
    let log = use_context::<Signal<ErrorLog>>();

    let store = store.read();
    let composed = compose_scope(&store, &scope);
    let document = ExportDocument::from_scope(&composed, now());

    let href = match document.to_data_url(config.pretty_export) {
        Ok(href) => href,
        Err(e) => {
            report_error(
                log,
                ErrorReport::new(e, "ExportButton", now()).with_context("scope", &scope),
            );
            return rsx!();
        }
    };
    let file_name = document.file_name();

    rsx!(
        a {
            class: "btn btn-outline btn-sm flex gap-2",
            href: "{href}",
            download: "{file_name}",
            Icon {
                width: 16,
                height: 16,
                icon: FaDownload
            }
            "تصدير البيانات"
        }
    )
}
