pub mod delay;
pub mod telemetry;

pub use delay::sleep;
pub use telemetry::report_error;

use chrono::{NaiveDateTime, Utc};

/// Current UTC time, as stamped on records.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
