//! Small extraction utilities shared by the recognizers.

use regex::Captures;

/// Parse capture group `idx` as an integer. Missing or overflowing groups yield `None`.
pub fn group_int(caps: &Captures<'_>, idx: usize) -> Option<i64> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Capture group `idx` as a string slice, if it participated in the match.
pub fn group_str<'t>(caps: &Captures<'t>, idx: usize) -> Option<&'t str> {
    caps.get(idx).map(|m| m.as_str())
}

/// Convert a 12-hour clock reading to 24-hour.
///
/// `pm` adds 12 unless the hour is 12; `12am` becomes 0. Without a marker the
/// hour is taken as-is. Results outside `0..24` are rejected.
pub fn to_24h(hour: i64, ampm: Option<&str>) -> Option<u32> {
    let hour_24 = match ampm {
        Some("pm") if hour != 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    };
    if (0..24).contains(&hour_24) { Some(hour_24 as u32) } else { None }
}

/// Minutes must be a valid clock reading.
pub fn valid_minutes(minutes: i64) -> Option<u32> {
    if (0..60).contains(&minutes) { Some(minutes as u32) } else { None }
}

/// UTC offset in whole hours for a timezone label.
///
/// Accepts common abbreviations and explicit offsets such as `gmt+2`,
/// `utc-5` or `+3`.
pub fn tz_offset_hours(label: &str) -> Option<i32> {
    let upper = label.to_ascii_uppercase();
    let named = match upper.as_str() {
        "UTC" | "GMT" | "Z" => Some(0),
        "BST" | "CET" | "WAT" => Some(1),
        "CEST" | "EET" | "SAST" => Some(2),
        "EEST" | "MSK" => Some(3),
        "IST" => Some(5), // actually UTC+5:30, whole hours only
        "JST" | "KST" => Some(9),
        "AEST" => Some(10),
        "EST" => Some(-5),
        "EDT" | "AST" => Some(-4),
        "CST" => Some(-6),
        "CDT" => Some(-5),
        "MST" => Some(-7),
        "MDT" => Some(-6),
        "PST" => Some(-8),
        "PDT" => Some(-7),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    let caps = regex!(r"(?i)^(?:utc|gmt)?([+-])(\d{1,2})$").captures(label)?;
    let hours: i32 = caps.get(2)?.as_str().parse().ok()?;
    if hours > 14 {
        return None;
    }
    Some(if &caps[1] == "-" { -hours } else { hours })
}

/// Leading-integer parse: `"12abc"` -> 12, `"abc"` -> `None`.
pub fn leading_int(text: &str) -> Option<i64> {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}
