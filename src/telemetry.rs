//! Error telemetry.
//!
//! Rendering failures and rejected operations are described as an [`ErrorReport`] and
//! handed to a [`TelemetrySink`]. Reporting is fire-and-forget: a sink never hands anything
//! back to the caller.

use std::collections::{BTreeMap, VecDeque};

use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

/// One reported failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    /// UI component or core operation the failure surfaced in.
    pub component: String,
    pub context: BTreeMap<String, String>,
    pub reported_at: NaiveDateTime,
}

impl ErrorReport {
    pub fn new(
        error: impl ToString,
        component: impl Into<String>,
        reported_at: NaiveDateTime,
    ) -> Self {
        Self {
            error: error.to_string(),
            component: component.into(),
            context: BTreeMap::new(),
            reported_at,
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }
}

pub trait TelemetrySink {
    fn report(&mut self, report: ErrorReport);
}

/// Writes every report to the log at `error` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn report(&mut self, report: ErrorReport) {
        tracing::error!(
            component = %report.component,
            context = ?report.context,
            "{}",
            report.error
        );
    }
}

/// Keeps the most recent reports for the in-app error console.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLog {
    capacity: usize,
    reports: VecDeque<ErrorReport>,
}

impl ErrorLog {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            capacity,
            reports: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Reports from newest to oldest.
    pub fn recent(&self) -> impl Iterator<Item = &ErrorReport> {
        self.reports.iter().rev()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl TelemetrySink for ErrorLog {
    fn report(&mut self, report: ErrorReport) {
        if self.reports.len() == self.capacity {
            self.reports.pop_front();
        }
        self.reports.push_back(report);
    }
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for &mut T {
    fn report(&mut self, report: ErrorReport) {
        (**self).report(report);
    }
}

impl<A: TelemetrySink, B: TelemetrySink> TelemetrySink for (A, B) {
    fn report(&mut self, report: ErrorReport) {
        self.0.report(report.clone());
        self.1.report(report);
    }
}
