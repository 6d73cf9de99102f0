//! # Calendar Dates and Age Arithmetic
//!
//! Age is measured in whole days between the date of birth and a reference
//! date, then divided by a fixed year length (365 days by default). Leap
//! days are not accounted for, so an employee turns "18" a few days before
//! their calendar birthday.
//!
//! The reference date is always an argument. Nothing here reads the clock;
//! callers decide what "today" means.

use chrono::NaiveDate;

use crate::error::DateParseError;

/// Parse an ISO 8601 calendar date of the form `YYYY-MM-DD`.
///
/// Only the extended, zero-padded form is accepted. Week dates, ordinal
/// dates, datetimes and signed years are rejected.
///
/// # Errors
///
/// Returns [`DateParseError`] carrying the rejected text.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(DateParseError(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DateParseError(s.to_string()))
}

/// Whole days elapsed from `date_of_birth` to `today`.
///
/// Negative when the birth date lies after the reference date.
pub fn age_in_days(date_of_birth: NaiveDate, today: NaiveDate) -> i64 {
    (today - date_of_birth).num_days()
}

/// True when `age_in_days / days_per_year >= min_years`, with exact division.
///
/// Evaluated as `age_in_days >= min_years * days_per_year` so no rounding
/// can creep in. With a `days_per_year` of zero any birth date on or before
/// `today` qualifies; a future birth date still fails.
pub fn meets_minimum_age(
    date_of_birth: NaiveDate,
    today: NaiveDate,
    min_years: u32,
    days_per_year: u32,
) -> bool {
    age_in_days(date_of_birth, today) >= i64::from(min_years) * i64::from(days_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("1998-04-02").unwrap(), date(1998, 4, 2));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_iso_date("1998-4-2").is_err());
        assert!(parse_iso_date("02/04/1998").is_err());
        assert!(parse_iso_date("1998-04-02T00:00:00Z").is_err());
        assert!(parse_iso_date("").is_err());
        assert!(parse_iso_date("1998-02-30").is_err());
        assert!(parse_iso_date("+998-04-02").is_err());
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = parse_iso_date("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_age_in_days() {
        assert_eq!(age_in_days(date(2024, 1, 1), date(2024, 1, 31)), 30);
        assert_eq!(age_in_days(date(2024, 1, 31), date(2024, 1, 1)), -30);
    }

    #[test]
    fn test_minimum_age_boundary_uses_365_day_years() {
        let today = date(2024, 1, 1);
        // 18 * 365 = 6570 days.
        let exactly = today - chrono::Duration::days(6570);
        let one_short = today - chrono::Duration::days(6569);
        assert!(meets_minimum_age(exactly, today, 18, 365));
        assert!(!meets_minimum_age(one_short, today, 18, 365));
    }

    #[test]
    fn test_leap_days_not_counted() {
        // Calendar 18th birthday is 2024-01-01, but 18 * 365 days have
        // already elapsed a few days earlier because of leap days.
        let dob = date(2006, 1, 1);
        assert!(meets_minimum_age(dob, date(2023, 12, 28), 18, 365));
        assert!(!meets_minimum_age(dob, date(2023, 12, 26), 18, 365));
    }

    #[test]
    fn test_zero_year_length_still_rejects_future_birth_dates() {
        let today = date(2024, 1, 1);
        assert!(meets_minimum_age(date(2024, 1, 1), today, 18, 0));
        assert!(meets_minimum_age(date(1990, 6, 1), today, 18, 0));
        assert!(!meets_minimum_age(date(2024, 1, 2), today, 18, 0));
    }

    #[test]
    fn test_future_birth_date_never_qualifies() {
        assert!(!meets_minimum_age(date(2030, 1, 1), date(2024, 1, 1), 18, 365));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The integer comparison agrees with truncating division.
            #[test]
            fn minimum_age_matches_division(
                age in -1000i64..40_000,
                min_years in 0u32..80,
                days_per_year in 1u32..400,
            ) {
                let today = date(2024, 1, 1);
                let dob = today - chrono::Duration::days(age);
                let by_division = age >= 0 && (age / i64::from(days_per_year)) >= i64::from(min_years);
                let by_product = meets_minimum_age(dob, today, min_years, days_per_year);
                prop_assert_eq!(by_product, by_division);
            }

            /// Every formatted calendar date parses back to itself.
            #[test]
            fn formatted_dates_parse(days in 0i64..3_000_000) {
                let d = date(1, 1, 1) + chrono::Duration::days(days);
                let text = d.format("%Y-%m-%d").to_string();
                prop_assert_eq!(parse_iso_date(&text).unwrap(), d);
            }
        }
    }
}
