//! Display text for suggestions.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::{ClockTime, Offsets, TimeOfDay, TimeUnit};

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Zero-padded `HH:MM`.
pub fn clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// `GMT+2`, `GMT-5`, `GMT+0`.
pub fn timezone(offset: i32) -> String {
    let sign = if offset >= 0 { '+' } else { '-' };
    format!("GMT{sign}{}", offset.unsigned_abs())
}

/// Short common-time label as typed by users: `9:00`, `15:00`.
pub fn common_time(time: ClockTime) -> String {
    format!("{}:{:02}", time.hours, time.minutes)
}

/// `HH:MM` plus a timezone label when one was given.
pub fn time_of_day(t: &TimeOfDay) -> String {
    match t.timezone {
        Some(offset) => format!("{} {}", clock(t.hours, t.minutes), timezone(offset)),
        None => clock(t.hours, t.minutes),
    }
}

/// `Today`, `Tomorrow`, or `In N days` for larger offsets.
pub fn day_label(days: u32) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("In {n} days"),
    }
}

/// `3 days and 2 hours`; zero amounts are left out.
pub fn units(offsets: &Offsets) -> String {
    offsets
        .iter()
        .filter(|&(_, amount)| amount != 0)
        .map(|(unit, amount)| format!("{amount} {}", unit.name_for(amount)))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// `In 3 days`, `In 1 week at 09:00`.
pub fn numeric(offsets: &Offsets) -> String {
    let mut text = format!("In {}", units(offsets));
    if let Some(at) = offsets.at_time {
        let _ = write!(text, " at {}", clock(at.hours, at.minutes));
    }
    text
}

/// `Random amount of weeks`. Names the unit instead of joining offsets,
/// since a random value has no amount to show.
pub fn random(unit: TimeUnit) -> String {
    format!("Random amount of {}", unit.plural())
}

/// Format `date` with a chrono format string, falling back to ISO dates when
/// the format string is invalid.
pub fn date(date: NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_ok() {
        return out;
    }
    tracing::warn!(format, "invalid date format, falling back to {FALLBACK_DATE_FORMAT}");
    date.format(FALLBACK_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn clock_and_timezone() {
        assert_eq!(clock(9, 5), "09:05");
        assert_eq!(timezone(2), "GMT+2");
        assert_eq!(timezone(-5), "GMT-5");
        assert_eq!(timezone(0), "GMT+0");
        let t = TimeOfDay { days: 0, hours: 15, minutes: 0, timezone: Some(-8) };
        assert_eq!(time_of_day(&t), "15:00 GMT-8");
    }

    #[test]
    fn units_join_and_pluralize() {
        let offsets = Offsets::of(TimeUnit::Day, 3).with(TimeUnit::Hour, 0).with(TimeUnit::Minute, 1);
        assert_eq!(units(&offsets), "3 days and 1 minute");
        assert_eq!(numeric(&Offsets::of(TimeUnit::Week, 1).at(ClockTime::new(9, 0))), "In 1 week at 09:00");
    }

    #[test]
    fn date_uses_format_or_falls_back() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(date(d, "%-m/%-d/%Y"), "12/5/2025");
        assert_eq!(date(d, "%Q"), "2025-12-05");
    }
}
