//! Typed scalar conversions.
//!
//! INI values are stored as text; this module provides the conversion pairs
//! the typed document accessors are built on, one pair per supported scalar
//! type: boolean, integer (`i64`), and floating-point (`f64`).
//!
//! All conversions are locale-independent and canonical, so repeated
//! get/set cycles are idempotent: formatting always emits a single
//! representation (`true`/`false`, decimal integers, shortest
//! round-trippable floats), and parsing accepts it back.
//!
//! Parsing is best-effort by design: a failure is `None`, never an error,
//! and the document accessors map it to the caller's default.

/// Parses a boolean value.
///
/// Accepts `true`/`false`, `yes`/`no`, `on`/`off`, and `1`/`0`,
/// case-insensitively. Anything else is `None`.
///
/// # Examples
///
/// ```rust
/// use ini_edit::value::parse_bool;
///
/// assert_eq!(parse_bool("true"), Some(true));
/// assert_eq!(parse_bool("Off"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if ["true", "yes", "on", "1"]
        .iter()
        .any(|t| s.eq_ignore_ascii_case(t))
    {
        Some(true)
    } else if ["false", "no", "off", "0"]
        .iter()
        .any(|t| s.eq_ignore_ascii_case(t))
    {
        Some(false)
    } else {
        None
    }
}

/// Formats a boolean as its canonical text, `true` or `false`.
#[inline]
#[must_use]
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parses a decimal integer.
#[must_use]
pub fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Formats an integer as canonical decimal text.
#[must_use]
pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Parses a floating-point value.
#[must_use]
pub fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}

/// Formats a float as the shortest text that parses back to the same value.
#[must_use]
pub fn format_float(value: f64) -> String {
    value.to_string()
}
