use dioxus_logger::tracing;

use crate::{
    scope::{compose_scope, Scope},
    store::EntityStore,
};

impl EntityStore {
    /// Marks a single alert as read.
    ///
    /// # Returns
    /// - `true` - Alert existed and was unread
    /// - `false` - Alert missing or already read
    pub fn mark_alert_read(&mut self, alert_id: &str) -> bool {
        let was_unread = self
            .alerts
            .find_by_id(alert_id)
            .map(|alert| !alert.is_read)
            .unwrap_or(false);

        if was_unread {
            self.alerts.update_by_id(alert_id, |alert| alert.is_read = true);
        }

        was_unread
    }

    /// Marks every unread alert visible in `scope` as read.
    ///
    /// Idempotent: a second call changes nothing and returns 0.
    ///
    /// # Returns
    /// The number of alerts that changed from unread to read.
    pub fn mark_all_alerts_read(&mut self, scope: &Scope) -> usize {
        let unread: Vec<String> = compose_scope(self, scope)
            .alerts
            .iter()
            .filter(|alert| !alert.is_read)
            .map(|alert| alert.id.clone())
            .collect();

        for id in &unread {
            self.alerts.update_by_id(id, |alert| alert.is_read = true);
        }

        tracing::debug!(scope = %scope, marked = unread.len(), "Marked alerts as read");

        unread.len()
    }

    /// Number of unread alerts visible in `scope`.
    pub fn unread_alert_count(&self, scope: &Scope) -> usize {
        compose_scope(self, scope)
            .alerts
            .iter()
            .filter(|alert| !alert.is_read)
            .count()
    }
}
