//! Rendering with the built-in date/time patterns.

use std::fmt::Write;

use chrono::format::StrftimeItems;
use chrono::NaiveDateTime;

use crate::builtin_formats::builtin_date_pattern;
use crate::date_serial::try_convert_to_date;
use crate::error::DateError;
use crate::options::DateSystem;

/// Render a date-time with the pattern of a built-in date/time format.
///
/// Returns `None` if `id` is not a built-in date/time format.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use xldate::formatter::format_builtin;
///
/// let dt = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap().and_hms_opt(18, 5, 0).unwrap();
/// assert_eq!(format_builtin(22, &dt).as_deref(), Some("1/9/26 18:05"));
/// assert_eq!(format_builtin(2, &dt), None);
/// ```
pub fn format_builtin(id: u16, dt: &NaiveDateTime) -> Option<String> {
    let pattern = builtin_date_pattern(id)?;
    let mut out = String::new();
    write!(out, "{}", dt.format_with_items(StrftimeItems::new(pattern))).ok()?;
    Some(out)
}

/// Convert a serial number and render it with a built-in date/time format.
///
/// # Errors
/// * [`DateError::NotADateFormat`] if `id` has no date/time pattern
/// * any error from [`try_convert_to_date`]
pub fn format_with_id(
    value: f64,
    id: u16,
    system: impl Into<DateSystem>,
) -> Result<String, DateError> {
    if builtin_date_pattern(id).is_none() {
        return Err(DateError::NotADateFormat { id });
    }

    let dt = try_convert_to_date(value, system)?;
    format_builtin(id, &dt).ok_or(DateError::OutOfRange { serial: value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 9)
            .unwrap()
            .and_hms_opt(18, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_format_builtin_standard() {
        let dt = sample();
        assert_eq!(format_builtin(14, &dt).as_deref(), Some("01-09-26"));
        assert_eq!(format_builtin(15, &dt).as_deref(), Some("9-Jan-26"));
        assert_eq!(format_builtin(18, &dt).as_deref(), Some("6:05 PM"));
        assert_eq!(format_builtin(21, &dt).as_deref(), Some("18:05:07"));
    }

    #[test]
    fn test_format_builtin_day_first() {
        let dt = sample();
        assert_eq!(format_builtin(71, &dt).as_deref(), Some("9/1/2026"));
        assert_eq!(format_builtin(81, &dt).as_deref(), Some("9/1/26"));
    }

    #[test]
    fn test_format_builtin_cjk() {
        let dt = sample();
        assert_eq!(format_builtin(31, &dt).as_deref(), Some("2026年1月9日"));
        assert_eq!(format_builtin(33, &dt).as_deref(), Some("18时05分07秒"));
        // Period of day is left as the literal prefix
        assert_eq!(format_builtin(34, &dt).as_deref(), Some("上午/下午 6时05分"));
    }

    #[test]
    fn test_format_with_id_not_a_date() {
        assert_eq!(
            format_with_id(1.0, 2, DateSystem::Date1900),
            Err(DateError::NotADateFormat { id: 2 })
        );
    }
}
