use aidhub::telemetry::{ErrorLog, ErrorReport, TelemetrySink, TracingSink};
use dioxus::prelude::*;

/// Sends a report to the log and to the in-app error console.
pub fn report_error(mut log: Signal<ErrorLog>, report: ErrorReport) {
    (TracingSink, &mut *log.write()).report(report);
}
