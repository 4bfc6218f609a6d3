use aidhub::{
    navigation::{Dashboard, Session, Tab},
    telemetry::{ErrorLog, ErrorReport},
};
use dioxus::prelude::*;

use crate::client::util::{now, report_error};

#[component]
pub fn TabBar(dashboard: Dashboard) -> Element {
    let mut session = use_context::<Signal<Session>>();
    let log = use_context::<Signal<ErrorLog>>();

    let active = session.read().active_tab();

    rsx!(
        div { role: "tablist", class: "tabs tabs-box",
            {dashboard.tabs().iter().copied().map(move |tab: Tab| {
                let class = if active == Some(tab) { "tab tab-active" } else { "tab" };
                let label = tab.label();

                rsx! {
                    button {
                        key: "{label}",
                        role: "tab",
                        class,
                        onclick: move |_| {
                            if let Err(e) = session.write().select_tab(tab) {
                                report_error(log, ErrorReport::new(e, "TabBar", now()));
                            }
                        },
                        "{label}"
                    }
                }
            })}
        }
    )
}
