//! Hire-date filter used by the teacher list page.
//!
//! The filter compares calendar dates only; the time of day stored with a
//! hire date is ignored.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::CoreError;

/// Wire format of the `HireDate` query parameter (what `<input type="date">` sends).
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an optional `HireDate` query value.
///
/// Missing and empty values both mean "no filter".
pub fn parse_hire_date(raw: Option<&str>) -> Result<Option<NaiveDate>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, HIRE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            CoreError::Validation(format!("HireDate must be a date in YYYY-MM-DD form, got '{raw}'"))
        })
}

/// Whether a stored hire timestamp falls on the given calendar date.
pub fn hired_on(hired_at: NaiveDateTime, date: NaiveDate) -> bool {
    hired_at.date() == date
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_and_empty_mean_no_filter() {
        assert_eq!(parse_hire_date(None).unwrap(), None);
        assert_eq!(parse_hire_date(Some("")).unwrap(), None);
        assert_eq!(parse_hire_date(Some("  ")).unwrap(), None);
    }

    #[test]
    fn iso_date_parses() {
        assert_eq!(
            parse_hire_date(Some("2022-01-01")).unwrap(),
            Some(date(2022, 1, 1))
        );
    }

    #[test]
    fn garbage_is_a_validation_error() {
        assert_matches!(
            parse_hire_date(Some("01/01/2022")),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            parse_hire_date(Some("2022-13-01")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn time_of_day_is_ignored() {
        let hired_at = date(2022, 1, 1).and_hms_opt(17, 45, 0).unwrap();
        assert!(hired_on(hired_at, date(2022, 1, 1)));
        assert!(!hired_on(hired_at, date(2022, 1, 2)));
    }
}
