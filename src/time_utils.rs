// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// English name of the calendar month of `date`, in whatever zone it carries.
pub fn month_name(date: &impl Datelike) -> &'static str {
    MONTHS[date.month0() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_name_bounds() {
        let jan = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let dec = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(month_name(&jan), "January");
        assert_eq!(month_name(&dec), "December");
    }

    #[test]
    fn test_format_utc_rfc3339() {
        let date = Utc.with_ymd_and_hms(2024, 3, 2, 8, 15, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-03-02T08:15:00Z");
    }

    #[test]
    fn test_month_name_follows_zone() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        let tokyo = utc.with_timezone(&chrono::FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(month_name(&utc), "January");
        assert_eq!(month_name(&tokyo), "February");
    }
}
