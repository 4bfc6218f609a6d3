use aidhub::{
    navigation::{Dashboard, Screen, Session},
    telemetry::{ErrorLog, ErrorReport},
};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{
        dashboard::{DashboardNavbar, ErrorConsole, ModalHost, TabBar},
        Page,
    },
    router::Route,
    util::{now, report_error},
};

/// Layout for the protected dashboards.
///
/// Sends visitors without a session to the login page and signed-in users to their own
/// dashboard. Each dashboard renders inside an error boundary that reports to telemetry.
#[component]
pub fn DashboardLayout() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let route = use_route::<Route>();
    let router = navigator();

    let requested = route.dashboard();

    use_effect(use_reactive!(|(requested,)| {
        let Some(requested) = requested else {
            return;
        };

        let screen = session.write().open_dashboard(requested).clone();
        match screen {
            Screen::Login { .. } => {
                router.replace(Route::Login {});
            }
            Screen::Dashboard { dashboard, .. } if dashboard != requested => {
                tracing::debug!(?requested, ?dashboard, "Redirecting to the user's own dashboard");
                router.replace(Route::from(dashboard));
            }
            _ => {}
        }
    }));

    let current = session.read().dashboard();
    let Some(dashboard) = current.filter(|current| Some(*current) == requested) else {
        return rsx!(
            div { class: "flex justify-center items-center min-h-screen",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    };

    rsx! {
        DashboardNavbar { dashboard }
        Page {
            div { class: "w-full max-w-[1440px] mx-auto flex flex-col gap-4",
                TabBar { dashboard }
                ErrorBoundary {
                    handle_error: move |errors: ErrorContext| {
                        let error = format!("{errors:?}");
                        let retry = errors.clone();
                        rsx! {
                            DashboardFallback {
                                dashboard,
                                error,
                                on_retry: move |_| retry.clear_errors(),
                                on_reload: move |_| {
                                    session.write().reload_dashboard();
                                    errors.clear_errors();
                                    document::eval("window.location.reload();");
                                },
                            }
                        }
                    },
                    Outlet::<Route> {}
                }
                ErrorConsole {}
            }
            ModalHost {}
        }
    }
}

/// Recovery screen shown when a dashboard fails to render.
///
/// Offers a retry of the failed view in place or a full reload starting from the overview.
#[component]
fn DashboardFallback(
    dashboard: Dashboard,
    error: String,
    on_retry: EventHandler<()>,
    on_reload: EventHandler<()>,
) -> Element {
    let log = use_context::<Signal<ErrorLog>>();
    let session = use_context::<Signal<Session>>();

    let reported = error.clone();
    use_effect(move || {
        let tab = session.peek().active_tab();
        let report = ErrorReport::new(reported.clone(), format!("{:?}Dashboard", dashboard), now())
            .with_context("tab", format!("{:?}", tab));

        report_error(log, report);
    });

    rsx!(
        div { role: "alert", class: "alert alert-error flex flex-col items-start gap-2",
            p { class: "font-bold", "حدث خطأ أثناء عرض هذه الصفحة" }
            p { class: "text-sm opacity-75", "تم تسجيل تفاصيل الخطأ وإرسالها للفريق التقني." }
            div { class: "flex gap-2",
                button {
                    class: "btn btn-sm",
                    onclick: move |_| on_retry.call(()),
                    "إعادة المحاولة"
                }
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| on_reload.call(()),
                    "إعادة تحميل الصفحة"
                }
            }
        }
    )
}
