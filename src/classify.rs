//! Date/time detection for number formats.
//!
//! A number format shows a date or time when its ID is a built-in date/time
//! format, or when its format code still contains one of the tokens `y`,
//! `m`, `d`, `h`, `s` after everything that is printed verbatim has been
//! removed: `[...]` color and condition tags, `\x` escapes and `"..."`
//! literal text.

use std::sync::OnceLock;

use regex::Regex;

use crate::builtin_formats::is_builtin_date_format;

const DATE_TIME_TOKENS: &[char] = &['y', 'm', 'd', 'h', 's'];

struct LiteralPatterns {
    brackets: Regex,
    escaped: Regex,
    quoted: Regex,
}

fn literal_patterns() -> &'static LiteralPatterns {
    static PATTERNS: OnceLock<LiteralPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| LiteralPatterns {
        brackets: Regex::new(r"\[[^\]]*\]").expect("valid regex"),
        escaped: Regex::new(r"\\.").expect("valid regex"),
        quoted: Regex::new(r#""[^"]*""#).expect("valid regex"),
    })
}

fn contains_date_time_token(code: &str) -> bool {
    code.contains(DATE_TIME_TOKENS)
}

/// Remove bracketed tags, backslash escapes and quoted literals, in that
/// order.
///
/// # Examples
/// ```
/// use xldate::classify::strip_literals;
///
/// assert_eq!(strip_literals(r#"[Red]0.0 "days""#), "0.0 ");
/// assert_eq!(strip_literals(r"0\h"), "0");
/// ```
pub fn strip_literals(format_code: &str) -> String {
    let patterns = literal_patterns();
    let without_brackets = patterns.brackets.replace_all(format_code, "");
    let without_escapes = patterns.escaped.replace_all(&without_brackets, "");
    patterns
        .quoted
        .replace_all(&without_escapes, "")
        .into_owned()
}

/// Check whether a number format displays a date or time.
///
/// Built-in date/time IDs short-circuit and the format code is not looked
/// at. Otherwise the code is inspected; tokens are matched case-sensitively.
///
/// # Arguments
/// * `id` - The `numFmtId` from the spreadsheet file
/// * `format_code` - The format code string (may be empty for built-ins)
///
/// # Examples
/// ```
/// use xldate::classify::format_is_date_time;
///
/// assert!(format_is_date_time(14, ""));
/// assert!(format_is_date_time(164, "yyyy-mm-dd"));
/// assert!(format_is_date_time(164, "[Red]h:mm"));
/// assert!(!format_is_date_time(164, r#""ymd""#));
/// assert!(!format_is_date_time(164, "#,##0.00"));
/// ```
pub fn format_is_date_time(id: u16, format_code: &str) -> bool {
    if is_builtin_date_format(id) {
        return true;
    }

    // fast path
    if !contains_date_time_token(format_code) {
        return false;
    }

    log::trace!("format {id}: inspecting format code {format_code:?}");
    contains_date_time_token(&strip_literals(format_code))
}
