//! xldate - spreadsheet serial dates and date/time format detection
//!
//! Spreadsheet files store dates as plain numbers (days since an epoch, with
//! the time of day in the fraction) and mark them as dates only through the
//! cell's number format. This crate decides whether a number format is a
//! date/time format and converts serial numbers to `chrono` date-times,
//! reproducing the 1900 leap year bug and the 1904 date system.

pub mod builtin_formats;
pub mod classify;
pub mod date_serial;
pub mod error;
pub mod formatter;
pub mod options;

pub use builtin_formats::{
    builtin_date_kind, builtin_date_pattern, is_builtin_date_format, DateTimeKind,
};
pub use classify::format_is_date_time;
pub use date_serial::{convert_to_date, date_to_serial, try_convert_to_date};
pub use error::DateError;
pub use formatter::{format_builtin, format_with_id};
pub use options::DateSystem;

use chrono::NaiveDateTime;

/// Convert a serial number if its number format is a date/time format.
///
/// Returns `None` when the format is not a date/time format, whatever the
/// value. Otherwise returns the result of [`convert_to_date`].
///
/// # Examples
/// ```
/// use xldate::get_date_time;
///
/// let dt = get_date_time(14, "", 46_031.0, false).unwrap();
/// assert_eq!(dt.to_string(), "2026-01-09 00:00:00");
///
/// assert_eq!(get_date_time(164, "0.00", 46_031.0, false), None);
/// ```
pub fn get_date_time(
    id: u16,
    format_code: &str,
    value: f64,
    system: impl Into<DateSystem>,
) -> Option<NaiveDateTime> {
    format_is_date_time(id, format_code).then(|| convert_to_date(value, system))
}
