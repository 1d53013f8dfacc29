use std::fmt;

/// Calendar unit understood by relative expressions ("in 3 days").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// All units, smallest first. This is also the order used for completions.
    pub const ALL: [TimeUnit; 6] =
        [TimeUnit::Minute, TimeUnit::Hour, TimeUnit::Day, TimeUnit::Week, TimeUnit::Month, TimeUnit::Year];

    pub fn singular(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
        }
    }

    /// Singular name for an amount of exactly one, plural otherwise.
    pub fn name_for(self, amount: i64) -> &'static str {
        if amount == 1 { self.singular() } else { self.plural() }
    }

    /// Accepts either the singular or the plural name.
    pub fn from_name(name: &str) -> Option<TimeUnit> {
        TimeUnit::ALL.into_iter().find(|u| u.singular() == name || u.plural() == name)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Wall-clock time without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }
}

/// "today/tomorrow at HH:MM", optionally tagged with a fixed UTC offset label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Day offset from the reference date: 0 (today) or 1 (tomorrow).
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    /// Offset in hours; only used for display.
    pub timezone: Option<i32>,
}

/// Explicit date. `month` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// Ordered unit amounts plus an optional time-of-day override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Offsets {
    amounts: Vec<(TimeUnit, i64)>,
    pub at_time: Option<ClockTime>,
}

impl Offsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-unit offset, e.g. `Offsets::of(TimeUnit::Day, 3)`.
    pub fn of(unit: TimeUnit, amount: i64) -> Self {
        Self::new().with(unit, amount)
    }

    /// Set `unit` to `amount`. An existing entry keeps its position.
    pub fn with(mut self, unit: TimeUnit, amount: i64) -> Self {
        self.set(unit, amount);
        self
    }

    pub fn at(mut self, time: ClockTime) -> Self {
        self.at_time = Some(time);
        self
    }

    pub fn set(&mut self, unit: TimeUnit, amount: i64) {
        match self.amounts.iter_mut().find(|(u, _)| *u == unit) {
            Some(slot) => slot.1 = amount,
            None => self.amounts.push((unit, amount)),
        }
    }

    pub fn get(&self, unit: TimeUnit) -> Option<i64> {
        self.amounts.iter().find(|(u, _)| *u == unit).map(|(_, a)| *a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, i64)> + '_ {
        self.amounts.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// The payload of a parse result. One variant per interpretation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    SpecificTime(TimeOfDay),
    SpecificDate(CalendarDate),
    /// "in N unit" style offsets.
    Numeric(Offsets),
    /// Named relative phrases ("tomorrow").
    Relative(Offsets),
    Random {
        unit: TimeUnit,
    },
    /// Lowercased, trimmed input that no recognizer understood.
    Partial(String),
}

impl DateValue {
    pub fn kind(&self) -> DateKind {
        match self {
            DateValue::SpecificTime(_) => DateKind::SpecificTime,
            DateValue::SpecificDate(_) => DateKind::SpecificDate,
            DateValue::Numeric(_) => DateKind::Numeric,
            DateValue::Relative(_) => DateKind::Relative,
            DateValue::Random { .. } => DateKind::Random,
            DateValue::Partial(_) => DateKind::Partial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKind {
    SpecificTime,
    SpecificDate,
    Numeric,
    Relative,
    Random,
    Partial,
}

impl DateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DateKind::SpecificTime => "specific_time",
            DateKind::SpecificDate => "specific_date",
            DateKind::Numeric => "numeric",
            DateKind::Relative => "relative",
            DateKind::Random => "random",
            DateKind::Partial => "partial",
        }
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One interpretation of the input with the parser's self-reported certainty.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDate {
    pub value: DateValue,
    /// In `[0, 1]`.
    pub confidence: f64,
}

impl ParsedDate {
    pub fn new(value: DateValue, confidence: f64) -> Self {
        Self { value, confidence: confidence.clamp(0.0, 1.0) }
    }

    pub fn kind(&self) -> DateKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_overwrite_in_place() {
        let offsets = Offsets::of(TimeUnit::Day, 1).with(TimeUnit::Hour, 2).with(TimeUnit::Day, 5);
        let entries: Vec<_> = offsets.iter().collect();
        assert_eq!(entries, vec![(TimeUnit::Day, 5), (TimeUnit::Hour, 2)]);
    }

    #[test]
    fn unit_names_round_trip() {
        for unit in TimeUnit::ALL {
            assert_eq!(TimeUnit::from_name(unit.singular()), Some(unit));
            assert_eq!(TimeUnit::from_name(unit.plural()), Some(unit));
        }
        assert_eq!(TimeUnit::from_name("fortnight"), None);
    }

    #[test]
    fn kind_tags_match_payload() {
        assert_eq!(DateValue::Partial("x".into()).kind().as_str(), "partial");
        assert_eq!(DateValue::Random { unit: TimeUnit::Week }.kind(), DateKind::Random);
        assert_eq!(ParsedDate::new(DateValue::Relative(Offsets::new()), 1.5).confidence, 1.0);
    }
}
