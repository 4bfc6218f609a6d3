//! Dashboard pages.
//!
//! All three dashboards share one view; the session decides which scope it composes and
//! which tab it shows.

pub mod alerts;
pub mod beneficiaries;
pub mod directory;
pub mod overview;
pub mod packages;
pub mod tasks;

use aidhub::{
    error::navigation::NavigationError,
    navigation::{Modal, Session, Tab},
    telemetry::{ErrorLog, ErrorReport},
};
use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::util::{now, report_error};

use self::{
    alerts::AlertsTab,
    beneficiaries::BeneficiariesTab,
    directory::{CouriersTab, FamiliesTab, OrganizationsTab, TemplatesTab, UsersTab},
    overview::OverviewTab,
    packages::PackagesTab,
    tasks::TasksTab,
};

#[component]
pub fn AdminDashboard() -> Element {
    rsx!(
        Title { "لوحة الإدارة | منصة المساعدات" }
        DashboardView {}
    )
}

#[component]
pub fn OrganizationsDashboard() -> Element {
    rsx!(
        Title { "لوحة المؤسسات | منصة المساعدات" }
        DashboardView {}
    )
}

#[component]
pub fn FamiliesDashboard() -> Element {
    rsx!(
        Title { "لوحة العائلات | منصة المساعدات" }
        DashboardView {}
    )
}

#[component]
fn DashboardView() -> Element {
    let session = use_context::<Signal<Session>>();

    let (scope, tab) = {
        let session = session.read();
        let scope = session.scope().ok_or(NavigationError::NotOnDashboard)?;

        (scope, session.active_tab().unwrap_or_default())
    };

    match tab {
        Tab::Overview => rsx!(OverviewTab { scope }),
        Tab::Beneficiaries => rsx!(BeneficiariesTab { scope, title: "المستفيدون" }),
        Tab::Members => rsx!(BeneficiariesTab { scope, title: "أفراد العائلة" }),
        Tab::Packages => rsx!(PackagesTab { scope }),
        Tab::Templates => rsx!(TemplatesTab { scope }),
        Tab::Tasks => rsx!(TasksTab { scope }),
        Tab::Couriers => rsx!(CouriersTab { scope }),
        Tab::Organizations => rsx!(OrganizationsTab {}),
        Tab::Families => rsx!(FamiliesTab {}),
        Tab::Alerts => rsx!(AlertsTab { scope }),
        Tab::Users => rsx!(UsersTab {}),
    }
}

/// Opens a modal, reporting the attempt if no dashboard is open.
pub(crate) fn open_modal(mut session: Signal<Session>, log: Signal<ErrorLog>, modal: Modal) {
    if let Err(e) = session.write().open_modal(modal) {
        report_error(log, ErrorReport::new(e, "DashboardView", now()));
    }
}

#[component]
pub(crate) fn SectionHeader(title: &'static str, children: Element) -> Element {
    rsx!(
        div { class: "flex flex-wrap justify-between items-center gap-2",
            h2 { class: "text-xl font-semibold", "{title}" }
            div { class: "flex flex-wrap items-center gap-2", {children} }
        }
    )
}

#[component]
pub(crate) fn EmptyState(message: &'static str) -> Element {
    rsx!(
        p { class: "text-center opacity-60 p-6", "{message}" }
    )
}
