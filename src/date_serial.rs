//! Date serial number conversion.
//!
//! Spreadsheets store dates as serial numbers counting days from an epoch:
//! - 1900 system: serial 1 = January 1, 1900 (Windows default)
//! - 1904 system: serial 0 = January 1, 1904 (Mac legacy)
//!
//! The 1900 system inherits the leap year bug from Lotus 1-2-3: 1900 is
//! treated as a leap year, so serial 60 names the non-existent 1900-02-29
//! and every serial from 61 onwards is one day "late". Serials below 61 are
//! therefore converted through Julian Day Numbers with their own offset,
//! while the rest are plain day offsets from 1899-12-30.
//!
//! Time is stored as the fractional part of the serial number:
//! - 0.5 = 12:00:00 (noon)
//! - 0.75 = 18:00:00 (6 PM)

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::DateError;
use crate::options::DateSystem;

/// Serials whose whole part is below this go through the Julian path.
const LEAP_BUG_CUTOFF: f64 = 61.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const NANOS_PER_DAY: f64 = 86_400_000_000_000.0;

/// Keeps the Julian Day arithmetic clear of `i64` overflow. Well beyond the
/// range `NaiveDate` can represent.
const MAX_JULIAN_DAY: i64 = 100_000_000;

/// Upper bound for whole days on the linear path, same reasoning.
const MAX_SERIAL_DAYS: f64 = 100_000_000.0;

/// Convert a serial number to a naive date-time, reporting inputs that
/// cannot be represented.
///
/// # Arguments
/// * `value` - The serial number (integer part is the day, fraction the time)
/// * `system` - A [`DateSystem`], or the workbook's `date1904` flag
///
/// # Errors
/// * [`DateError::NonFinite`] for NaN and infinities
/// * [`DateError::OutOfRange`] if the result falls outside `NaiveDateTime`
pub fn try_convert_to_date(
    value: f64,
    system: impl Into<DateSystem>,
) -> Result<NaiveDateTime, DateError> {
    if !value.is_finite() {
        return Err(DateError::NonFinite { value });
    }

    let system = system.into();
    if value.trunc() < LEAP_BUG_CUTOFF {
        convert_julian(value, system)
    } else {
        convert_linear(value, system)
    }
}

/// Convert a serial number to a naive date-time.
///
/// Never fails. Results that `NaiveDateTime` cannot hold saturate to
/// [`NaiveDateTime::MAX`] for positive input and [`NaiveDateTime::MIN`]
/// otherwise (NaN included). Use [`try_convert_to_date`] to tell them apart.
///
/// # Examples
/// ```
/// use xldate::date_serial::convert_to_date;
///
/// let dt = convert_to_date(45_000.5, false);
/// assert_eq!(dt.to_string(), "2023-03-15 12:00:00");
/// ```
pub fn convert_to_date(value: f64, system: impl Into<DateSystem>) -> NaiveDateTime {
    try_convert_to_date(value, system).unwrap_or_else(|err| {
        log::debug!("saturating serial {value}: {err}");
        if value > 0.0 {
            NaiveDateTime::MAX
        } else {
            NaiveDateTime::MIN
        }
    })
}

fn convert_julian(value: f64, system: DateSystem) -> Result<NaiveDateTime, DateError> {
    let out_of_range = || DateError::OutOfRange { serial: value };

    let jdate = value + 0.5 + system.julian_offset();
    let jdn = jdate.trunc();
    if jdn.abs() > MAX_JULIAN_DAY as f64 {
        return Err(out_of_range());
    }

    let date = julian_day_to_date(jdn as i64).ok_or_else(out_of_range)?;
    add_day_fraction(date.and_time(NaiveTime::MIN), jdate - jdn).ok_or_else(out_of_range)
}

fn convert_linear(value: f64, system: DateSystem) -> Result<NaiveDateTime, DateError> {
    let days = value.trunc();
    if days > MAX_SERIAL_DAYS {
        return Err(DateError::OutOfRange { serial: value });
    }

    system
        .epoch()
        .checked_add_days(Days::new(days as u64))
        .and_then(|date| add_day_fraction(date.and_time(NaiveTime::MIN), value - days))
        .ok_or(DateError::OutOfRange { serial: value })
}

/// Add a fraction of a day, truncated to whole nanoseconds.
fn add_day_fraction(dt: NaiveDateTime, fraction: f64) -> Option<NaiveDateTime> {
    let nanos = (fraction * NANOS_PER_DAY) as i64;
    dt.checked_add_signed(TimeDelta::nanoseconds(nanos))
}

/// Convert a Julian Day Number to a proleptic Gregorian date.
///
/// Uses the Fliegel–Van Flandern integer algorithm (the one printed in the
/// Explanatory Supplement to the Astronomical Almanac). All divisions
/// truncate toward zero.
///
/// Returns `None` if the date cannot be represented.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use xldate::date_serial::julian_day_to_date;
///
/// assert_eq!(julian_day_to_date(2_451_545), NaiveDate::from_ymd_opt(2000, 1, 1));
/// ```
pub fn julian_day_to_date(jdn: i64) -> Option<NaiveDate> {
    if !(-MAX_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&jdn) {
        return None;
    }

    let mut l = jdn + 68_569;
    let n = 4 * l / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = 4_000 * (l + 1) / 1_461_001;
    l = l - 1_461 * i / 4 + 31;
    let j = 80 * l / 2_447;
    let day = l - 2_447 * j / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;

    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
}

/// Convert a naive date-time back to a serial number.
///
/// Inverse of [`convert_to_date`]. In the 1900 system, dates before
/// 1900-03-01 count from 1899-12-31 and later dates from 1899-12-30, so the
/// phantom 1900-02-29 (serial 60) is never produced.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use xldate::date_serial::date_to_serial;
/// use xldate::DateSystem;
///
/// let dt = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap().and_hms_opt(18, 0, 0).unwrap();
/// assert_eq!(date_to_serial(dt, DateSystem::Date1900), 46_031.75);
/// ```
pub fn date_to_serial(dt: NaiveDateTime, system: impl Into<DateSystem>) -> f64 {
    let system = system.into();
    let base = match system {
        DateSystem::Date1900 if dt.date() < first_linear_day_1900() => system
            .epoch()
            .succ_opt()
            .expect("1899-12-31 is representable"),
        _ => system.epoch(),
    };

    let delta = dt.signed_duration_since(base.and_time(NaiveTime::MIN));
    delta.num_seconds() as f64 / SECONDS_PER_DAY + f64::from(delta.subsec_nanos()) / NANOS_PER_DAY
}

fn first_linear_day_1900() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 3, 1).expect("valid date")
}
