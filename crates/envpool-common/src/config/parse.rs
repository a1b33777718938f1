//! Lenient coercion of optional environment values
//!
//! Optional tuning values never fail configuration: anything that cannot be
//! read falls back to the caller's default.

/// Values treated as `false`, compared after trimming and lowercasing
const FALSY: [&str; 4] = ["false", "0", "no", "off"];

/// Parse a boolean flag.
///
/// `None` yields `default`. Any set value is `true` unless it is one of
/// `false`, `0`, `no` or `off` (case-insensitive, surrounding whitespace ignored).
pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) => {
            let v = v.trim().to_lowercase();
            !FALSY.contains(&v.as_str())
        }
    }
}

/// Parse a leading decimal integer.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits is read and anything after it is ignored (`"12abc"` is 12).
/// Returns `default` when the value is unset, has no digits, or overflows.
pub fn parse_int(value: Option<&str>, default: i64) -> i64 {
    value.and_then(leading_int).unwrap_or(default)
}

pub(super) fn leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
