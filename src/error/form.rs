use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidationErrors;

/// Fallback inline message for a rule without its own wording.
pub const FIELD_INVALID: &str = "قيمة غير صالحة";

/// Required-field failures collected from a submitted form.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    /// Field name → inline message, one entry per failing field.
    #[error("Form has invalid fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    InvalidFields(BTreeMap<String, String>),
}

impl FormError {
    /// Inline message for a single field, if it failed.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            Self::InvalidFields(fields) => fields.get(field).map(String::as_str),
        }
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        match self {
            Self::InvalidFields(fields) => fields,
        }
    }

    pub fn user_message(&self) -> String {
        "يرجى تصحيح الحقول المشار إليها".to_string()
    }
}

/// Collects the first message of each failing field.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, failures)| {
            let message = failures
                .first()?
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| FIELD_INVALID.to_string());

            Some((field.to_string(), message))
        })
        .collect()
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidFields(field_messages(&errors))
    }
}
