use thiserror::Error;

use crate::navigation::{Dashboard, Tab};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Tab {tab:?} is not available on the {dashboard:?} dashboard")]
    TabNotAvailable { dashboard: Dashboard, tab: Tab },
    #[error("No dashboard is open")]
    NotOnDashboard,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoginError {
    #[error("E-mail and password are both required")]
    MissingCredentials,
    #[error("No account registered for {0}")]
    UnknownAccount(String),
    #[error("Account {0} is suspended")]
    AccountSuspended(String),
}

impl LoginError {
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredentials => "يرجى إدخال البريد الإلكتروني وكلمة المرور".to_string(),
            // Unknown accounts get the same wording as a wrong password would.
            Self::UnknownAccount(_) => "بيانات الدخول غير صحيحة".to_string(),
            Self::AccountSuspended(_) => "هذا الحساب موقوف، يرجى التواصل مع الإدارة".to_string(),
        }
    }
}
