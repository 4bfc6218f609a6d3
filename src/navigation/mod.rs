//! Role-based navigation.
//!
//! [`Session`] is the view-state machine behind the client router:
//! `Landing → Login → {Admin | Organizations | Families}`. Which dashboard a user lands on
//! is decided by [`Dashboard::for_user`], which tabs it offers by [`Dashboard::tabs`], and
//! which records it sees by [`Dashboard::scope`]. Entering or leaving a dashboard always
//! resets the tab to [`Tab::Overview`] and closes any modal.

pub mod login;
pub mod modal;

pub use login::{authenticate, Credentials};
pub use modal::Modal;

use dioxus_logger::tracing;
use entity::prelude::{Association, Role, SystemUser};
use serde::{Deserialize, Serialize};

use crate::{error::navigation::NavigationError, scope::Scope};

/// Dashboard variant a signed-in user works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dashboard {
    Admin,
    Organizations,
    Families,
}

impl Dashboard {
    /// Picks the dashboard for a user.
    ///
    /// Admins and users without an association get the admin dashboard; otherwise the
    /// association decides.
    pub fn for_user(user: &SystemUser) -> Self {
        if user.role == Role::Admin {
            return Self::Admin;
        }

        match &user.association {
            None => Self::Admin,
            Some(Association::Organization(_)) => Self::Organizations,
            Some(Association::Family(_)) => Self::Families,
        }
    }

    /// The slice of the entity graph this dashboard shows for `user`.
    ///
    /// Falls back to admin scope when the user's association does not match the dashboard.
    pub fn scope(&self, user: &SystemUser) -> Scope {
        match (self, &user.association) {
            (Self::Organizations, Some(Association::Organization(id))) => {
                Scope::Organization(id.clone())
            }
            (Self::Families, Some(Association::Family(id))) => Scope::Family(id.clone()),
            _ => Scope::Admin,
        }
    }

    /// Tabs reachable on this dashboard, in display order.
    pub fn tabs(&self) -> &'static [Tab] {
        match self {
            Self::Admin => &[
                Tab::Overview,
                Tab::Beneficiaries,
                Tab::Packages,
                Tab::Tasks,
                Tab::Couriers,
                Tab::Organizations,
                Tab::Families,
                Tab::Alerts,
                Tab::Users,
            ],
            Self::Organizations => &[
                Tab::Overview,
                Tab::Beneficiaries,
                Tab::Packages,
                Tab::Templates,
                Tab::Tasks,
                Tab::Alerts,
            ],
            Self::Families => &[Tab::Overview, Tab::Members, Tab::Packages, Tab::Alerts],
        }
    }

    pub fn has_tab(&self, tab: Tab) -> bool {
        self.tabs().contains(&tab)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Admin => "لوحة الإدارة",
            Self::Organizations => "لوحة المؤسسات",
            Self::Families => "لوحة العائلات",
        }
    }
}

/// A section of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Beneficiaries,
    Members,
    Packages,
    Templates,
    Tasks,
    Couriers,
    Organizations,
    Families,
    Alerts,
    Users,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "نظرة عامة",
            Self::Beneficiaries => "المستفيدون",
            Self::Members => "أفراد العائلة",
            Self::Packages => "الطرود",
            Self::Templates => "قوالب الطرود",
            Self::Tasks => "المهام",
            Self::Couriers => "المندوبون",
            Self::Organizations => "المؤسسات",
            Self::Families => "العائلات",
            Self::Alerts => "التنبيهات",
            Self::Users => "المستخدمون",
        }
    }
}

/// Where the user currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Landing,
    /// Signing in; `requested` is the dashboard the user tried to open, if any.
    Login { requested: Option<Dashboard> },
    Dashboard {
        dashboard: Dashboard,
        tab: Tab,
        modal: Option<Modal>,
    },
}

/// Identity and view state for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    screen: Screen,
    user: Option<SystemUser>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn user(&self) -> Option<&SystemUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Dashboard currently open, if any.
    pub fn dashboard(&self) -> Option<Dashboard> {
        match self.screen {
            Screen::Dashboard { dashboard, .. } => Some(dashboard),
            _ => None,
        }
    }

    pub fn active_tab(&self) -> Option<Tab> {
        match self.screen {
            Screen::Dashboard { tab, .. } => Some(tab),
            _ => None,
        }
    }

    pub fn modal(&self) -> Option<&Modal> {
        match &self.screen {
            Screen::Dashboard { modal, .. } => modal.as_ref(),
            _ => None,
        }
    }

    /// Scope of the open dashboard for the signed-in user.
    pub fn scope(&self) -> Option<Scope> {
        let dashboard = self.dashboard()?;
        let user = self.user.as_ref()?;

        Some(dashboard.scope(user))
    }

    /// Requests a protected dashboard.
    ///
    /// Unauthenticated users are sent to login. Signed-in users always go to their own
    /// dashboard, whichever one they asked for.
    pub fn open_dashboard(&mut self, requested: Dashboard) -> &Screen {
        match &self.user {
            None => {
                tracing::debug!(?requested, "Protected page requested without a session");
                self.screen = Screen::Login {
                    requested: Some(requested),
                };
            }
            Some(user) => {
                let dashboard = Dashboard::for_user(user);
                if self.dashboard() != Some(dashboard) {
                    self.enter(dashboard);
                }
            }
        }

        &self.screen
    }

    /// Opens the login screen.
    ///
    /// Keeps the dashboard a visitor was sent away from, so it can be reopened after login.
    pub fn open_login(&mut self) {
        if self.user.is_none() && !matches!(self.screen, Screen::Login { .. }) {
            self.screen = Screen::Login { requested: None };
        }
    }

    /// Leaves the open dashboard for the public pages, keeping the user signed in.
    ///
    /// The next [`Session::open_dashboard`] starts again on the overview tab.
    pub fn leave_dashboard(&mut self) {
        if let Screen::Dashboard { dashboard, .. } = self.screen {
            tracing::debug!(?dashboard, "Left dashboard");
            self.screen = Screen::Landing;
        }
    }

    /// Restarts the open dashboard on the overview tab with no modal.
    pub fn reload_dashboard(&mut self) {
        if let Screen::Dashboard { dashboard, .. } = self.screen {
            tracing::info!(?dashboard, "Reloading dashboard");
            self.enter(dashboard);
        }
    }

    /// Signs a user in and routes them to their dashboard on the overview tab.
    pub fn login(&mut self, user: SystemUser) -> Dashboard {
        let dashboard = Dashboard::for_user(&user);

        tracing::info!(user_id = %user.id, ?dashboard, "User signed in");

        self.user = Some(user);
        self.enter(dashboard);

        dashboard
    }

    /// Signs out, clearing identity and all view state.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "User signed out");
        }

        self.screen = Screen::Landing;
    }

    /// Switches tab on the open dashboard, closing any modal.
    ///
    /// # Returns
    /// - `Ok(())` - Tab switched
    /// - `Err(NavigationError::NotOnDashboard)` - No dashboard is open
    /// - `Err(NavigationError::TabNotAvailable)` - The dashboard does not offer that tab
    pub fn select_tab(&mut self, next: Tab) -> Result<(), NavigationError> {
        match &mut self.screen {
            Screen::Dashboard {
                dashboard,
                tab,
                modal,
            } => {
                if !dashboard.has_tab(next) {
                    return Err(NavigationError::TabNotAvailable {
                        dashboard: *dashboard,
                        tab: next,
                    });
                }
                *tab = next;
                *modal = None;
                Ok(())
            }
            _ => Err(NavigationError::NotOnDashboard),
        }
    }

    /// Opens a modal over the current tab, replacing any open one.
    pub fn open_modal(&mut self, next: Modal) -> Result<(), NavigationError> {
        match &mut self.screen {
            Screen::Dashboard { modal, .. } => {
                *modal = Some(next);
                Ok(())
            }
            _ => Err(NavigationError::NotOnDashboard),
        }
    }

    pub fn close_modal(&mut self) {
        if let Screen::Dashboard { modal, .. } = &mut self.screen {
            *modal = None;
        }
    }

    fn enter(&mut self, dashboard: Dashboard) {
        self.screen = Screen::Dashboard {
            dashboard,
            tab: Tab::Overview,
            modal: None,
        };
    }
}

#[cfg(test)]
mod tests {
    mod for_user {
        use aidhub_test_utils::prelude::*;
        use entity::prelude::*;

        use crate::navigation::Dashboard;

        /// Expect admin role to land on the admin dashboard regardless of association
        #[test]
        fn admin_role_is_admin() {
            let user = factory::user(
                "user-1",
                Role::Admin,
                Some(Association::Organization("org-1".to_string())),
            );

            assert_eq!(Dashboard::for_user(&user), Dashboard::Admin);
        }

        /// Expect a non-admin without association to fall back to admin
        #[test]
        fn unassociated_user_is_admin() {
            let user = factory::user("user-1", Role::Organization, None);

            assert_eq!(Dashboard::for_user(&user), Dashboard::Admin);
        }

        /// Expect the association to pick the dashboard
        #[test]
        fn association_decides() {
            let organization = factory::user(
                "user-1",
                Role::Organization,
                Some(Association::Organization("org-1".to_string())),
            );
            let family = factory::user(
                "user-2",
                Role::Family,
                Some(Association::Family("fam-1".to_string())),
            );

            assert_eq!(Dashboard::for_user(&organization), Dashboard::Organizations);
            assert_eq!(Dashboard::for_user(&family), Dashboard::Families);
        }
    }

    mod scope {
        use aidhub_test_utils::prelude::*;
        use entity::prelude::*;

        use crate::{navigation::Dashboard, scope::Scope};

        /// Expect the association id to become the scope id
        #[test]
        fn scope_follows_association() {
            let user = factory::user(
                "user-1",
                Role::Organization,
                Some(Association::Organization("org-1".to_string())),
            );

            assert_eq!(
                Dashboard::Organizations.scope(&user),
                Scope::Organization("org-1".to_string())
            );
            assert_eq!(Dashboard::Admin.scope(&user), Scope::Admin);
        }
    }

    mod session {
        use aidhub_test_utils::prelude::*;
        use entity::prelude::*;

        use crate::{
            error::navigation::NavigationError,
            navigation::{Dashboard, Modal, Screen, Session, Tab},
        };

        fn family_user() -> SystemUser {
            factory::user(
                "user-4",
                Role::Family,
                Some(Association::Family("fam-1".to_string())),
            )
        }

        /// Expect admin login to land on the admin dashboard's overview tab
        #[test]
        fn admin_login_lands_on_overview() {
            let mut session = Session::new();

            let dashboard = session.login(factory::user("user-1", Role::Admin, None));

            assert_eq!(dashboard, Dashboard::Admin);
            assert_eq!(session.active_tab(), Some(Tab::Overview));
        }

        /// Expect protected navigation without a session to go to login
        #[test]
        fn protected_page_requires_login() {
            let mut session = Session::new();

            let screen = session.open_dashboard(Dashboard::Admin).clone();

            assert_eq!(
                screen,
                Screen::Login {
                    requested: Some(Dashboard::Admin)
                }
            );
        }

        /// Expect a signed-in user asking for another dashboard to stay on their own
        #[test]
        fn cannot_open_foreign_dashboard() {
            let mut session = Session::new();
            session.login(family_user());

            session.open_dashboard(Dashboard::Admin);

            assert_eq!(session.dashboard(), Some(Dashboard::Families));
        }

        /// Expect a reload to return to the overview tab and close the modal
        #[test]
        fn reload_resets_view_state() {
            let mut session = Session::new();
            session.login(factory::user("user-1", Role::Admin, None));
            session.select_tab(Tab::Packages).unwrap();
            session.open_modal(Modal::NewPackage).unwrap();

            session.reload_dashboard();

            assert_eq!(
                session.screen(),
                &Screen::Dashboard {
                    dashboard: Dashboard::Admin,
                    tab: Tab::Overview,
                    modal: None,
                }
            );
        }

        /// Expect reloading outside a dashboard to change nothing
        #[test]
        fn reload_ignored_outside_dashboard() {
            let mut session = Session::new();

            session.reload_dashboard();

            assert_eq!(session.screen(), &Screen::Landing);
        }

        /// Expect leaving and reopening a dashboard to reset the tab and close the modal
        #[test]
        fn reentry_resets_view_state() {
            let mut session = Session::new();
            session.login(factory::user("user-1", Role::Admin, None));
            session.select_tab(Tab::Alerts).unwrap();
            session.open_modal(Modal::NewBeneficiary).unwrap();

            session.leave_dashboard();
            assert_eq!(session.screen(), &Screen::Landing);
            assert!(session.is_authenticated());

            session.open_dashboard(Dashboard::Admin);

            assert_eq!(session.active_tab(), Some(Tab::Overview));
            assert_eq!(session.modal(), None);
        }

        /// Expect the login screen to keep the dashboard that was requested
        #[test]
        fn open_login_keeps_requested_dashboard() {
            let mut session = Session::new();
            session.open_dashboard(Dashboard::Families);

            session.open_login();

            assert_eq!(
                session.screen(),
                &Screen::Login {
                    requested: Some(Dashboard::Families)
                }
            );
        }

        /// Expect a signed-in user to stay on their dashboard when the login page is opened
        #[test]
        fn open_login_ignored_when_signed_in() {
            let mut session = Session::new();
            session.login(family_user());

            session.open_login();

            assert_eq!(session.dashboard(), Some(Dashboard::Families));
        }

        /// Expect Error for a tab the dashboard does not offer
        #[test]
        fn refuses_unavailable_tab() {
            let mut session = Session::new();
            session.login(family_user());

            let result = session.select_tab(Tab::Users);

            assert_eq!(
                result,
                Err(NavigationError::TabNotAvailable {
                    dashboard: Dashboard::Families,
                    tab: Tab::Users
                })
            );
            assert_eq!(session.active_tab(), Some(Tab::Overview));
        }

        /// Expect switching tab to close the open modal
        #[test]
        fn tab_switch_closes_modal() {
            let mut session = Session::new();
            session.login(family_user());
            session
                .open_modal(Modal::BeneficiaryDetails {
                    id: "ben-6".to_string(),
                })
                .unwrap();

            session.select_tab(Tab::Packages).unwrap();

            assert!(session.modal().is_none());
            assert_eq!(session.active_tab(), Some(Tab::Packages));
        }

        /// Expect logout to clear identity and tab state, and the next login to start fresh
        #[test]
        fn logout_resets_everything() {
            let mut session = Session::new();
            session.login(family_user());
            session.select_tab(Tab::Alerts).unwrap();

            session.logout();

            assert_eq!(session.screen(), &Screen::Landing);
            assert!(session.user().is_none());
            assert!(session.active_tab().is_none());

            session.login(family_user());
            assert_eq!(session.active_tab(), Some(Tab::Overview));
        }

        /// Expect Error when selecting a tab with no dashboard open
        #[test]
        fn select_tab_requires_dashboard() {
            let mut session = Session::new();

            assert_eq!(
                session.select_tab(Tab::Overview),
                Err(NavigationError::NotOnDashboard)
            );
        }
    }
}
