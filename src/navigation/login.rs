//! Stub sign-in.
//!
//! There is no password check: an account is identified by e-mail alone. The password is
//! only required to be non-empty so the form behaves like a real one.

use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use entity::prelude::{AccountStatus, SystemUser};

use crate::{error::navigation::LoginError, store::EntityStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Resolves credentials to a system user and stamps their last login.
///
/// The e-mail match is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// - `Ok(SystemUser)` - The signed-in user, with `last_login` set to `at`
/// - `Err(LoginError::MissingCredentials)` - E-mail or password left empty
/// - `Err(LoginError::UnknownAccount)` - No user with that e-mail
/// - `Err(LoginError::AccountSuspended)` - The account is suspended
pub fn authenticate(
    store: &mut EntityStore,
    credentials: &Credentials,
    at: NaiveDateTime,
) -> Result<SystemUser, LoginError> {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }

    let Some(user) = store
        .users
        .iter()
        .find(|user| user.email.eq_ignore_ascii_case(email))
    else {
        tracing::warn!(email = %email, "Sign-in attempted for unknown account");
        return Err(LoginError::UnknownAccount(email.to_string()));
    };

    if user.status == AccountStatus::Suspended {
        tracing::warn!(user_id = %user.id, "Sign-in refused for suspended account");
        return Err(LoginError::AccountSuspended(user.id.clone()));
    }

    let user_id = user.id.clone();
    store.record_login(&user_id, at);

    store
        .users
        .find_by_id(&user_id)
        .cloned()
        .ok_or(LoginError::UnknownAccount(email.to_string()))
}
