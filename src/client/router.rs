use aidhub::navigation::Dashboard;
use dioxus::prelude::*;

use crate::client::{
    components::{DashboardLayout, Navbar},
    routes::{
        dashboard::{AdminDashboard, FamiliesDashboard, OrganizationsDashboard},
        Landing, Login, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Landing {},

    #[route("/login")]
    Login {},

    #[end_layout]

    #[layout(DashboardLayout)]

    #[route("/admin")]
    AdminDashboard {},

    #[route("/organizations")]
    OrganizationsDashboard {},

    #[route("/families")]
    FamiliesDashboard {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Dashboard a protected route shows, `None` for public routes.
    pub fn dashboard(&self) -> Option<Dashboard> {
        match self {
            Self::AdminDashboard {} => Some(Dashboard::Admin),
            Self::OrganizationsDashboard {} => Some(Dashboard::Organizations),
            Self::FamiliesDashboard {} => Some(Dashboard::Families),
            _ => None,
        }
    }
}

impl From<Dashboard> for Route {
    fn from(dashboard: Dashboard) -> Self {
        match dashboard {
            Dashboard::Admin => Self::AdminDashboard {},
            Dashboard::Organizations => Self::OrganizationsDashboard {},
            Dashboard::Families => Self::FamiliesDashboard {},
        }
    }
}
