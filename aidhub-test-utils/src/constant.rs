//! Fixed values shared by all fixtures so test records compare deterministically.

use chrono::{NaiveDate, NaiveDateTime};

/// Creation and update time stamped on every factory record.
pub fn test_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap()
}

/// Domain used for factory user e-mail addresses.
pub static TEST_EMAIL_DOMAIN: &str = "test.aidhub.org";
