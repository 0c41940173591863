//! Reservation date ceiling rule
//!
//! A table can be reserved at most one calendar month ahead. The ceiling is
//! the same day-of-month in the next month, clamped to that month's last
//! valid day (Jan 31 → Feb 28/29), and is itself bookable.

use chrono::{Months, NaiveDate, NaiveTime};
use thiserror::Error;

use crate::{ReserveError, ReserveResult};

/// Rejection of a candidate reservation date beyond the ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The maximum possible date for reservation is {ceiling}")]
pub struct DateRejected {
    /// Latest bookable date, one calendar month after "today"
    pub ceiling: NaiveDate,
}

/// Latest bookable date: `today` shifted forward one calendar month.
///
/// `checked_add_months` clamps the day-of-month when the target month is
/// shorter; overflow past `NaiveDate::MAX` cannot occur for host-clock input.
pub fn reservation_ceiling(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Validate a candidate reservation date against the ceiling.
///
/// Pure in `(candidate, today)`. The ceiling is inclusive: a candidate equal
/// to it is accepted. On rejection the caller must keep `chosen_date` unset.
pub fn evaluate_date(candidate: NaiveDate, today: NaiveDate) -> Result<NaiveDate, DateRejected> {
    let ceiling = reservation_ceiling(today);
    if candidate > ceiling {
        Err(DateRejected { ceiling })
    } else {
        Ok(candidate)
    }
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> ReserveResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ReserveError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a time string (HH:MM)
pub fn parse_time(time: &str) -> ReserveResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ReserveError::validation(format!("Invalid time format: {}", time)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ceiling_plain_month() {
        assert_eq!(reservation_ceiling(date(2024, 3, 10)), date(2024, 4, 10));
    }

    #[test]
    fn test_ceiling_clamps_to_short_month() {
        // Leap year February
        assert_eq!(reservation_ceiling(date(2024, 1, 31)), date(2024, 2, 29));
        // Non-leap February
        assert_eq!(reservation_ceiling(date(2023, 1, 31)), date(2023, 2, 28));
        // 31st into a 30-day month
        assert_eq!(reservation_ceiling(date(2024, 3, 31)), date(2024, 4, 30));
    }

    #[test]
    fn test_ceiling_year_rollover() {
        assert_eq!(reservation_ceiling(date(2024, 12, 5)), date(2025, 1, 5));
    }

    #[test]
    fn test_evaluate_accepts_up_to_ceiling() {
        let today = date(2024, 3, 10);
        assert_eq!(evaluate_date(date(2024, 3, 10), today), Ok(date(2024, 3, 10)));
        assert_eq!(evaluate_date(date(2024, 3, 25), today), Ok(date(2024, 3, 25)));
        // Ceiling itself is inclusive
        assert_eq!(evaluate_date(date(2024, 4, 10), today), Ok(date(2024, 4, 10)));
    }

    #[test]
    fn test_evaluate_rejects_beyond_ceiling() {
        let today = date(2024, 3, 10);
        let rejected = evaluate_date(date(2024, 4, 11), today).unwrap_err();
        assert_eq!(rejected.ceiling, date(2024, 4, 10));
        assert_eq!(
            rejected.to_string(),
            "The maximum possible date for reservation is 2024-04-10"
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-15").unwrap(), date(2024, 3, 15));
        assert!(parse_date("15/03/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("18:00").unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
        assert!(parse_time("6pm").is_err());
    }
}
