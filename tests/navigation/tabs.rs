use aidhub::{
    error::navigation::NavigationError,
    navigation::{Dashboard, Modal, Screen, Tab},
    store::EntityStore,
};

use crate::setup::sign_in;

/// Expect switching tabs to close an open modal
#[test]
fn tab_switch_closes_modal() {
    let mut store = EntityStore::seeded();
    let mut session = sign_in(&mut store, "admin@aidhub.org");

    session.open_modal(Modal::NewBeneficiary).unwrap();
    session.select_tab(Tab::Alerts).unwrap();

    assert_eq!(session.active_tab(), Some(Tab::Alerts));
    assert!(session.modal().is_none());
}

/// Expect a family account to be refused the users tab
#[test]
fn family_cannot_open_users() {
    let mut store = EntityStore::seeded();
    let mut session = sign_in(&mut store, "abuahmad@aidhub.org");

    let result = session.select_tab(Tab::Users);

    assert!(matches!(result, Err(NavigationError::TabNotAvailable { .. })));
    assert_eq!(session.active_tab(), Some(Tab::Overview));
}

/// Expect a dashboard reopened from the public pages to start on the overview, modal closed
#[test]
fn reentry_starts_on_overview() {
    let mut store = EntityStore::seeded();
    let mut session = sign_in(&mut store, "admin@aidhub.org");
    session.select_tab(Tab::Alerts).unwrap();
    session.open_modal(Modal::NewBeneficiary).unwrap();

    session.leave_dashboard();
    let screen = session.open_dashboard(Dashboard::Admin).clone();

    assert!(matches!(screen, Screen::Dashboard { .. }));
    assert_eq!(session.active_tab(), Some(Tab::Overview));
    assert!(session.modal().is_none());
}

/// Expect a router refresh on the open dashboard to keep the selected tab
#[test]
fn same_dashboard_keeps_tab() {
    let mut store = EntityStore::seeded();
    let mut session = sign_in(&mut store, "admin@aidhub.org");
    session.select_tab(Tab::Alerts).unwrap();

    session.open_dashboard(Dashboard::Admin);

    assert_eq!(session.active_tab(), Some(Tab::Alerts));
}
