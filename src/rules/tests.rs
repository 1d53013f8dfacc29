use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use crate::{
    CalendarDate, ClockTime, Context, DateKind, DateParser, DateValue, Offsets, ParsedDate, TimeOfDay, TimeUnit,
};

fn reference_context() -> Context {
    Context::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(10, 15, 0).unwrap())
}

fn parse(input: &str) -> Vec<ParsedDate> {
    DateParser::new().parse(input, &reference_context())
}

fn find(input: &str, kind: DateKind) -> Option<ParsedDate> {
    parse(input).into_iter().find(|p| p.kind() == kind)
}

fn time(days: u32, hours: u32, minutes: u32) -> DateValue {
    DateValue::SpecificTime(TimeOfDay { days, hours, minutes, timezone: None })
}

#[test]
fn specific_time_examples() {
    let cases: Vec<(DateValue, &str)> = vec![
        (time(0, 15, 30), "15:30"),
        (time(0, 15, 0), "3pm"),
        (time(0, 15, 0), "3 pm"),
        (time(0, 0, 0), "12am"),
        (time(0, 12, 0), "12pm"),
        (time(0, 9, 0), "at 9"),
        (time(0, 9, 45), "at 9:45am"),
        (time(0, 21, 5), "Today at 9:05 PM"),
        (time(1, 8, 0), "tomorrow at 8"),
        (time(1, 18, 30), "tomorrow 6:30pm"),
        (time(0, 0, 0), "0:00"),
        (time(1, 15, 0), "3pm tomorrow"),
        (time(1, 9, 30), "at 9:30 tomorrow"),
        (time(0, 15, 0), "meet at 3pm"),
        (time(0, 9, 0), "call me at 9"),
        (time(0, 9, 0), "at 9 in the morning"),
        (time(1, 20, 0), "dinner tomorrow at 8pm"),
    ];

    for (expected, input) in cases {
        let parsed = find(input, DateKind::SpecificTime).unwrap_or_else(|| panic!("no time parsed from {input:?}"));
        assert_eq!(parsed.value, expected, "input: {input:?}");
        assert_eq!(parsed.confidence, 0.9);
    }
}

#[test]
fn specific_time_with_timezone() {
    let cases: Vec<(i32, &str)> = vec![
        (0, "15:00 gmt"),
        (-8, "9am pst"),
        (2, "at 18:00 gmt+2"),
        (-5, "7pm utc-5"),
        (1, "3pm cet tomorrow"),
        (9, "call at 8 jst"),
    ];

    for (offset, input) in cases {
        let parsed = find(input, DateKind::SpecificTime).unwrap_or_else(|| panic!("no time parsed from {input:?}"));
        let DateValue::SpecificTime(t) = parsed.value else { unreachable!() };
        assert_eq!(t.timezone, Some(offset), "input: {input:?}");
    }
}

#[test]
fn specific_time_rejections() {
    for input in ["25:00", "9:75", "13pm", "3 days", "in 3 days", "in 2", "9:", "at 9:", "meet at 25", "at 123", "3pm later"] {
        assert!(find(input, DateKind::SpecificTime).is_none(), "unexpected time for {input:?}");
    }
}

#[test]
fn specific_date_examples() {
    let cases: Vec<(CalendarDate, &str)> = vec![
        (CalendarDate { day: 25, month: 11, year: 2025 }, "25.12.2025"),
        (CalendarDate { day: 1, month: 0, year: 2026 }, "1/1/26"),
        (CalendarDate { day: 7, month: 6, year: 2025 }, "7.7"),
        (CalendarDate { day: 31, month: 1, year: 2024 }, "31/02/2024"),
        (CalendarDate { day: 3, month: 4, year: 2027 }, "meet on 3.5.2027"),
    ];

    for (expected, input) in cases {
        let parsed = find(input, DateKind::SpecificDate).unwrap_or_else(|| panic!("no date parsed from {input:?}"));
        assert_eq!(parsed.value, DateValue::SpecificDate(expected), "input: {input:?}");
        assert_eq!(parsed.confidence, 0.9);
    }
}

#[test]
fn specific_date_rejections() {
    for input in ["32.1.2025", "12.13", "0/5", "15:30"] {
        assert!(find(input, DateKind::SpecificDate).is_none(), "unexpected date for {input:?}");
    }
}

#[test]
fn numeric_examples() {
    let cases: Vec<(Offsets, &str)> = vec![
        (Offsets::of(TimeUnit::Day, 3), "in 3 days"),
        (Offsets::of(TimeUnit::Day, 1), "in 1 day"),
        (Offsets::of(TimeUnit::Minute, 45), "in 45 minutes"),
        (Offsets::of(TimeUnit::Year, 2), "remind me in 2 years"),
        (Offsets::of(TimeUnit::Week, 1).at(ClockTime::new(9, 0)), "in 1 week at 9"),
        (Offsets::of(TimeUnit::Month, 6).at(ClockTime::new(17, 30)), "in 6 months at 5:30pm"),
        (Offsets::of(TimeUnit::Hour, 2).at(ClockTime::new(0, 0)), "in 2 hours at 12am"),
    ];

    for (expected, input) in cases {
        let parsed = find(input, DateKind::Numeric).unwrap_or_else(|| panic!("nothing numeric in {input:?}"));
        assert_eq!(parsed.value, DateValue::Numeric(expected), "input: {input:?}");
        assert_eq!(parsed.confidence, 0.8);
    }
}

#[test]
fn numeric_rejections() {
    for input in ["in 2 d", "in two days", "in 99999999999999999999 days", "in 3 fortnights", "in 2 days at 25"] {
        assert!(find(input, DateKind::Numeric).is_none(), "unexpected numeric for {input:?}");
    }
}

#[test]
fn time_words_after_at_are_not_timezones() {
    let parsed = find("meet at 3pm with bob", DateKind::SpecificTime).unwrap();
    assert_eq!(parsed.value, time(0, 15, 0));

    let parsed = find("3pm tomorrow", DateKind::SpecificTime).unwrap();
    let DateValue::SpecificTime(t) = parsed.value else { unreachable!() };
    assert_eq!(t.timezone, None);
}

#[test]
fn tomorrow_is_relative_one_day() {
    let parsed = parse("tomorrow");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].value, DateValue::Relative(Offsets::of(TimeUnit::Day, 1)));
    assert_eq!(parsed[0].confidence, 1.0);

    assert!(find("tomorrow morning", DateKind::Relative).is_none());
    assert!(find("  TOMORROW ", DateKind::Relative).is_some());
}

#[test]
fn random_amount_examples() {
    let parsed = find("random amount of weeks", DateKind::Random).unwrap();
    assert_eq!(parsed.value, DateValue::Random { unit: TimeUnit::Week });
    assert_eq!(parsed.confidence, 0.7);

    assert!(find("pick a random amount of days please", DateKind::Random).is_some());
    assert!(find("random amount of week", DateKind::Random).is_none());
    assert!(find("random", DateKind::Random).is_none());
}

#[test]
fn recognizers_do_not_short_circuit() {
    let kinds: Vec<DateKind> = parse("in 2 days on 25.12").iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, vec![DateKind::SpecificDate, DateKind::Numeric]);

    let kinds: Vec<DateKind> = parse("in 2 days at 9").iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, vec![DateKind::SpecificTime, DateKind::Numeric]);
}
