//! Export of a composed view as a JSON document.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDateTime;
use entity::prelude::*;
use serde::Serialize;

use crate::{
    scope::{ComposedScope, Scope},
    stats::ScopeStatistics,
    Error,
};

/// A dashboard's visible records and statistics at one point in time.
///
/// Borrows the records from the composed view; nothing is copied until serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    pub scope: Scope,
    pub generated_at: NaiveDateTime,
    pub statistics: ScopeStatistics,
    pub beneficiaries: Vec<&'a Beneficiary>,
    pub packages: Vec<&'a Package>,
    pub tasks: Vec<&'a Task>,
    pub alerts: Vec<&'a Alert>,
}

impl<'a> ExportDocument<'a> {
    pub fn from_scope(composed: &ComposedScope<'a>, generated_at: NaiveDateTime) -> Self {
        Self {
            scope: composed.scope.clone(),
            generated_at,
            statistics: ScopeStatistics::compute(composed),
            beneficiaries: composed.beneficiaries.clone(),
            packages: composed.packages.clone(),
            tasks: composed.tasks.clone(),
            alerts: composed.alerts.clone(),
        }
    }

    /// Serializes the document, indented when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String, Error> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        Ok(json)
    }

    /// The serialized document as a `data:` URL, for a download link.
    pub fn to_data_url(&self, pretty: bool) -> Result<String, Error> {
        let json = self.to_json(pretty)?;

        Ok(format!(
            "data:application/json;charset=utf-8;base64,{}",
            STANDARD.encode(json)
        ))
    }

    /// Download name, e.g. `aidhub-organization-org-1-20250301-142500.json`.
    pub fn file_name(&self) -> String {
        format!(
            "aidhub-{}-{}.json",
            self.scope,
            self.generated_at.format("%Y%m%d-%H%M%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|d| d.and_hms_opt(14, 25, 0))
            .unwrap()
    }

    mod file_name {
        use super::generated_at;
        use crate::{
            export::ExportDocument,
            scope::{compose_scope, Scope},
            store::EntityStore,
        };

        /// Expect scope and timestamp in the file name
        #[test]
        fn names_scope_and_time() {
            let store = EntityStore::default();
            let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));

            let document = ExportDocument::from_scope(&composed, generated_at());

            assert_eq!(
                document.file_name(),
                "aidhub-organization-org-1-20250301-142500.json"
            );
        }
    }

    mod to_json {
        use super::generated_at;
        use crate::{
            export::ExportDocument,
            scope::{compose_scope, Scope},
            store::EntityStore,
        };

        /// Expect the document to carry the scope's records and statistics
        #[test]
        fn serializes_scope_contents() {
            let store = EntityStore::seeded();
            let composed = compose_scope(&store, &Scope::Family("fam-1".to_string()));
            let document = ExportDocument::from_scope(&composed, generated_at());

            let json = document.to_json(false).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();

            assert_eq!(value["scope"]["type"], "family");
            assert_eq!(value["scope"]["id"], "fam-1");
            assert_eq!(
                value["beneficiaries"].as_array().unwrap().len(),
                composed.beneficiaries.len()
            );
            assert_eq!(
                value["statistics"]["total_beneficiaries"],
                composed.beneficiaries.len()
            );
        }

        /// Expect pretty output to be indented and compact output not
        #[test]
        fn honours_pretty_flag() {
            let store = EntityStore::default();
            let composed = compose_scope(&store, &Scope::Admin);
            let document = ExportDocument::from_scope(&composed, generated_at());

            assert!(document.to_json(true).unwrap().contains('\n'));
            assert!(!document.to_json(false).unwrap().contains('\n'));
        }
    }

    mod to_data_url {
        use base64::{engine::general_purpose::STANDARD, Engine};

        use super::generated_at;
        use crate::{
            export::ExportDocument,
            scope::{compose_scope, Scope},
            store::EntityStore,
        };

        /// Expect the URL payload to decode back to the JSON document
        #[test]
        fn embeds_json_payload() {
            let store = EntityStore::seeded();
            let composed = compose_scope(&store, &Scope::Admin);
            let document = ExportDocument::from_scope(&composed, generated_at());

            let url = document.to_data_url(false).unwrap();
            let payload = url
                .strip_prefix("data:application/json;charset=utf-8;base64,")
                .unwrap();

            let decoded = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
            assert_eq!(decoded, document.to_json(false).unwrap());
        }
    }
}
