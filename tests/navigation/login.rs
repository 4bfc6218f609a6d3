//! Sign-in through to the first dashboard view.

use aidhub::{
    error::navigation::LoginError,
    navigation::{
        login::{authenticate, Credentials},
        Dashboard, Screen, Session, Tab,
    },
    scope::Scope,
    store::EntityStore,
};
use aidhub_test_utils::constant::test_timestamp;

use crate::setup::sign_in;

/// Expect the seeded admin to land on the admin overview with an unfiltered scope
#[test]
fn admin_lands_on_overview() {
    let mut store = EntityStore::seeded();

    let session = sign_in(&mut store, "admin@aidhub.org");

    assert_eq!(session.dashboard(), Some(Dashboard::Admin));
    assert_eq!(session.active_tab(), Some(Tab::Overview));
    assert_eq!(session.scope(), Some(Scope::Admin));
    assert!(session.modal().is_none());
}

/// Expect an organization coordinator to be scoped to their organization
#[test]
fn organization_user_is_scoped() {
    let mut store = EntityStore::seeded();

    let session = sign_in(&mut store, "redcrescent@aidhub.org");

    assert_eq!(session.dashboard(), Some(Dashboard::Organizations));
    assert_eq!(session.scope(), Some(Scope::Organization("org-1".to_string())));
}

/// Expect signing in to stamp the account's last login
#[test]
fn records_last_login() {
    let mut store = EntityStore::seeded();

    let session = sign_in(&mut store, "admin@aidhub.org");
    let user_id = session.user().map(|u| u.id.clone()).unwrap();

    assert_eq!(
        store.users.find_by_id(&user_id).unwrap().last_login,
        Some(test_timestamp())
    );
}

/// Expect an unknown e-mail to be refused and the session left signed out
#[test]
fn refuses_unknown_account() {
    let mut store = EntityStore::seeded();
    let mut session = Session::new();

    let result = authenticate(
        &mut store,
        &Credentials::new("nobody@aidhub.org", "password"),
        test_timestamp(),
    );

    assert!(matches!(result, Err(LoginError::UnknownAccount(_))));

    let screen = session.open_dashboard(Dashboard::Admin).clone();
    assert_eq!(
        screen,
        Screen::Login {
            requested: Some(Dashboard::Admin)
        }
    );
}

/// Expect a signed-in user asking for another dashboard to be sent to their own
#[test]
fn redirects_to_own_dashboard() {
    let mut store = EntityStore::seeded();
    let mut session = sign_in(&mut store, "redcrescent@aidhub.org");

    session.open_dashboard(Dashboard::Admin);

    assert_eq!(session.dashboard(), Some(Dashboard::Organizations));
}

/// Expect logout to clear the identity and return to the landing page
#[test]
fn logout_clears_session() {
    let mut store = EntityStore::seeded();
    let mut session = sign_in(&mut store, "admin@aidhub.org");

    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(session.screen(), &Screen::Landing);
    assert_eq!(session.scope(), None);
}
