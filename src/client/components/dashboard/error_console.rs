use aidhub::telemetry::ErrorLog;
use dioxus::prelude::*;

/// Collapsible list of the most recent error reports.
#[component]
pub fn ErrorConsole() -> Element {
    let mut log = use_context::<Signal<ErrorLog>>();

    let count = log.read().len();
    if count == 0 {
        return rsx!();
    }

    rsx!(
        details { class: "collapse collapse-arrow bg-base-200",
            summary { class: "collapse-title text-sm",
                "سجل الأخطاء ({count})"
            }
            div { class: "collapse-content flex flex-col gap-2",
                ul { class: "flex flex-col gap-1 text-xs font-mono",
                    {log.read().recent().map(|report| {
                        let time = report.reported_at.format("%H:%M:%S").to_string();

                        rsx! {
                            li {
                                span { class: "opacity-60", "{time} " }
                                span { class: "font-bold", "[{report.component}] " }
                                "{report.error}"
                            }
                        }
                    })}
                }
                button {
                    class: "btn btn-xs btn-ghost self-end",
                    onclick: move |_| log.write().clear(),
                    "مسح السجل"
                }
            }
        }
    )
}
