//! Error types for the aidhub core.
//!
//! Each domain has its own error enum (configuration, lifecycle transitions, navigation and
//! login, form validation). They are aggregated into [`Error`] with `#[from]` conversions so
//! callers can propagate any of them with `?`. Data derivations in the core never fail; these
//! errors only arise from state-changing operations and user input.

pub mod config;
pub mod form;
pub mod lifecycle;
pub mod navigation;

use thiserror::Error;

use crate::error::{
    config::ConfigError,
    form::FormError,
    lifecycle::LifecycleError,
    navigation::{LoginError, NavigationError},
};

/// Main error type for the aidhub core.
///
/// # Error Categories
/// - Configuration errors (invalid environment values)
/// - Lifecycle errors (illegal task or identity transitions)
/// - Navigation and login errors (unreachable tabs, unknown accounts)
/// - Form errors (required-field validation)
/// - Export errors (serialization of a composed view)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A task or identity transition that the lifecycle does not allow.
    #[error(transparent)]
    LifecycleError(#[from] LifecycleError),
    /// A navigation request the current dashboard cannot satisfy.
    #[error(transparent)]
    NavigationError(#[from] NavigationError),
    /// Login stub rejected the credentials.
    #[error(transparent)]
    LoginError(#[from] LoginError),
    /// Submitted form failed required-field checks.
    #[error(transparent)]
    FormError(#[from] FormError),
    /// Failed to serialize a composed view for export.
    #[error("Failed to serialize export document: {0}")]
    ExportError(#[from] serde_json::Error),
}

impl Error {
    /// Message shown inline to the user for this error.
    ///
    /// Domain errors carry their own wording; anything else is reported generically so
    /// internal details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::LifecycleError(err) => err.user_message(),
            Self::NavigationError(err) => err.to_string(),
            Self::LoginError(err) => err.user_message(),
            Self::FormError(err) => err.user_message(),
            Self::ConfigError(_) | Self::ExportError(_) => {
                "حدث خطأ غير متوقع، يرجى المحاولة مرة أخرى".to_string()
            }
        }
    }
}
