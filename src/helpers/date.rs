//! Publish date helpers
//!
//! Posts carry their publish date as a `DD/MM/YYYY` string in front-matter.
//! These helpers turn that string into a calendar date and back.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Why a `publishDate` string could not be read as a calendar date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishDateError {
    #[error("expected DD/MM/YYYY, found {0} '/'-separated component(s)")]
    ComponentCount(usize),

    #[error("{component} component '{value}' is not a number")]
    NotNumeric {
        component: &'static str,
        value: String,
    },

    #[error("{component} component '{value}' is too large")]
    TooLarge {
        component: &'static str,
        value: String,
    },

    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    OutOfRange { day: u32, month: u32, year: i32 },
}

/// Parse a `DD/MM/YYYY` publish date.
///
/// Day and month may be written with or without a leading zero. Every
/// component must be non-empty ASCII digits and the result must be a real
/// calendar day, so `31/02/2024` is rejected rather than rolled over.
///
/// # Examples
/// ```ignore
/// parse_publish_date("5/3/2023") // -> 2023-03-05
/// ```
pub fn parse_publish_date(s: &str) -> Result<NaiveDate, PublishDateError> {
    let parts: Vec<&str> = s.trim().split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(PublishDateError::ComponentCount(parts.len()));
    };

    let day: u32 = numeric("day", day)?;
    let month: u32 = numeric("month", month)?;
    let year: i32 = numeric("year", year)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(PublishDateError::OutOfRange { day, month, year })
}

/// Format a calendar date back into the `DD/MM/YYYY` front-matter form
pub fn format_publish_date(date: &NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

fn numeric<T: std::str::FromStr>(
    component: &'static str,
    value: &str,
) -> Result<T, PublishDateError> {
    let not_numeric = || PublishDateError::NotNumeric {
        component,
        value: value.to_string(),
    };

    // `str::parse` accepts a leading '+', which is not a digit
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric());
    }
    // All digits, so the only way left to fail is overflow
    value.parse().map_err(|_| PublishDateError::TooLarge {
        component,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_padded() {
        let date = parse_publish_date("01/03/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_unpadded() {
        let date = parse_publish_date("5/3/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 5).unwrap());
    }

    #[test]
    fn test_day_comes_first() {
        // 15 can only be a day, so this pins the DD/MM reading
        let date = parse_publish_date("15/01/2023").unwrap();
        assert_eq!(date.day(), 15);
        assert_eq!(date.month(), 1);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(parse_publish_date(" 20/06/2023\n").is_ok());
    }

    #[test]
    fn test_wrong_component_count() {
        assert_eq!(
            parse_publish_date("2023-06-20"),
            Err(PublishDateError::ComponentCount(1))
        );
        assert_eq!(
            parse_publish_date("20/06"),
            Err(PublishDateError::ComponentCount(2))
        );
        assert_eq!(
            parse_publish_date("1/2/3/4"),
            Err(PublishDateError::ComponentCount(4))
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(
            parse_publish_date(""),
            Err(PublishDateError::ComponentCount(1))
        );
    }

    #[test]
    fn test_non_numeric() {
        assert!(matches!(
            parse_publish_date("aa/06/2023"),
            Err(PublishDateError::NotNumeric { component: "day", .. })
        ));
        assert!(matches!(
            parse_publish_date("20/+6/2023"),
            Err(PublishDateError::NotNumeric { component: "month", .. })
        ));
        assert!(matches!(
            parse_publish_date("20/06/"),
            Err(PublishDateError::NotNumeric { component: "year", .. })
        ));
    }

    #[test]
    fn test_oversized_component() {
        assert_eq!(
            parse_publish_date("01/01/99999999999"),
            Err(PublishDateError::TooLarge {
                component: "year",
                value: "99999999999".to_string(),
            })
        );
        assert!(matches!(
            parse_publish_date("99999999999/01/2024"),
            Err(PublishDateError::TooLarge { component: "day", .. })
        ));
        // fits in the integer type but not in the calendar
        assert!(matches!(
            parse_publish_date("01/01/999999"),
            Err(PublishDateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_not_a_calendar_day() {
        assert_eq!(
            parse_publish_date("31/02/2024"),
            Err(PublishDateError::OutOfRange {
                day: 31,
                month: 2,
                year: 2024
            })
        );
        assert!(parse_publish_date("01/13/2024").is_err());
        assert!(parse_publish_date("29/02/2024").is_ok());
    }

    #[test]
    fn test_format_publish_date() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 5).unwrap();
        assert_eq!(format_publish_date(&date), "05/05/2020");
        assert_eq!(parse_publish_date(&format_publish_date(&date)), Ok(date));
    }
}
