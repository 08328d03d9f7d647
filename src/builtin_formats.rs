//! Built-in date/time number format IDs.
//!
//! Spreadsheet files reference built-in formats by numeric ID (`numFmtId`)
//! without storing the format code. This module knows which of those IDs
//! are dates or times, and which rendering pattern belongs to each.
//!
//! IDs 27-36 and 50-58 are the East Asian (zh-CN) built-ins, 71-81 are
//! the day-first variants used by several European locales.

/// Date/time category of a built-in format.
///
/// The discriminants are a 2-bit flag: bit 0 = date part, bit 1 = time part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DateTimeKind {
    Date = 0b01,
    Time = 0b10,
    DateTime = 0b11,
}

impl DateTimeKind {
    /// Returns the 2-bit flag value.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Builds a kind from its flag value. `0` and anything above `3` yield `None`.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b01 => Some(DateTimeKind::Date),
            0b10 => Some(DateTimeKind::Time),
            0b11 => Some(DateTimeKind::DateTime),
            _ => None,
        }
    }

    /// Returns true if the format shows a calendar date.
    pub fn has_date(self) -> bool {
        self.bits() & 0b01 != 0
    }

    /// Returns true if the format shows a time of day.
    pub fn has_time(self) -> bool {
        self.bits() & 0b10 != 0
    }
}

/// Every built-in format ID that denotes a date or time, ascending.
pub const BUILTIN_DATE_FORMAT_IDS: &[u16] = &[
    14, 15, 16, 17, 18, 19, 20, 21, 22, // standard date/time
    27, 28, 29, 30, 31, 32, 33, 34, 35, 36, // zh-CN
    45, 46, 47, // mm:ss, [h]:mm:ss, mmss.0
    50, 51, 52, 53, 54, 55, 56, 57, 58, // zh-CN extended
    71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, // day-first
];

/// Get the date/time category of a built-in format ID.
///
/// # Examples
/// ```
/// use xldate::builtin_formats::{builtin_date_kind, DateTimeKind};
///
/// assert_eq!(builtin_date_kind(14), Some(DateTimeKind::Date));
/// assert_eq!(builtin_date_kind(22), Some(DateTimeKind::DateTime));
/// assert_eq!(builtin_date_kind(2), None); // 0.00
/// ```
pub fn builtin_date_kind(id: u16) -> Option<DateTimeKind> {
    use DateTimeKind::*;

    match id {
        14..=17 => Some(Date),
        18..=21 => Some(Time),
        22 => Some(DateTime),
        27..=31 => Some(Date),
        32..=35 => Some(Time),
        36 => Some(Date),
        45..=47 => Some(Time),
        50..=54 => Some(Date),
        55 | 56 => Some(Time),
        57 | 58 => Some(Date),
        71..=74 => Some(Date),
        75 | 76 => Some(Time),
        77 => Some(DateTime),
        78..=80 => Some(Time),
        81 => Some(Date),
        _ => None,
    }
}

/// Check if a format ID is a built-in date/time format.
pub fn is_builtin_date_format(id: u16) -> bool {
    builtin_date_kind(id).is_some()
}

/// Get the display pattern (chrono `strftime` syntax) for a built-in
/// date/time format ID.
///
/// The zh-CN patterns carry their literal text (年, 月, 日, 时, 分, 秒)
/// inline.
///
/// IDs 34, 35, 55 and 56 print the literal `上午/下午` prefix followed by a
/// 12-hour clock: the period of day is not resolved for them.
///
/// # Examples
/// ```
/// use xldate::builtin_formats::builtin_date_pattern;
///
/// assert_eq!(builtin_date_pattern(21), Some("%H:%M:%S"));
/// assert_eq!(builtin_date_pattern(31), Some("%Y年%-m月%-d日"));
/// assert_eq!(builtin_date_pattern(164), None);
/// ```
pub fn builtin_date_pattern(id: u16) -> Option<&'static str> {
    match id {
        14 => Some("%m-%d-%y"),
        15 => Some("%-d-%b-%y"),
        16 => Some("%-d-%b"),
        17 => Some("%b-%y"),
        18 => Some("%-I:%M %p"),
        19 => Some("%-I:%M:%S %p"),
        20 => Some("%H:%M"),
        21 => Some("%H:%M:%S"),
        22 => Some("%-m/%-d/%y %H:%M"),
        45 => Some("%M:%S"),
        46 => Some("%-I:%M:%S"),
        47 => Some("%M%S%.f"),

        27 => Some("%Y年%-m月"),
        28 | 29 => Some("%-m月%-d日"),
        30 => Some("%-m-%-d-%y"),
        31 => Some("%Y年%-m月%-d日"),
        32 => Some("%H时%M分"),
        33 => Some("%H时%M分%S秒"),
        34 => Some("上午/下午 %-I时%M分"),
        35 => Some("上午/下午 %-I时%M分%S秒"),
        // Day of month in the 月 slot, as the legacy table has it
        36 | 50 => Some("%Y年%-d月"),
        51 => Some("%-m月%-d日"),
        52 => Some("%Y年%-m月"),
        53 | 54 => Some("%-m月%-d日"),
        55 => Some("上午/下午 %-I时%M分"),
        56 => Some("上午/下午 %-I时%M分%S秒"),
        57 => Some("%Y年%-m月"),
        58 => Some("%-m月%-d日"),

        71 => Some("%-d/%-m/%Y"),
        72 => Some("%-d-%b-%y"),
        73 => Some("%-d-%b"),
        74 => Some("%b-%y"),
        75 => Some("%H:%M"),
        76 => Some("%H:%M:%S"),
        77 => Some("%-d/%-m/%Y %H:%M"),
        78 => Some("%M:%S"),
        79 => Some("%H:%M:%S"),
        80 => Some("%M:%S%.f"),
        81 => Some("%-d/%-m/%y"),
        _ => None,
    }
}
