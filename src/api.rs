use crate::engine::{self, DateGenerator, DateParser, SuggestionEngine};
use crate::{ClockTime, DateValue, Error, ParsedDate};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_ENGINE: Lazy<SuggestionEngine> = Lazy::new(|| SuggestionEngine::new(DateParser::new()));

/// Parsing context.
///
/// This holds the reference instant ("now") used to resolve relative expressions.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference datetime used to resolve relative expressions.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
            let time = NaiveTime::from_hms_opt(10, 15, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

impl Context {
    pub fn new(reference_time: NaiveDateTime) -> Self {
        Self { reference_time }
    }

    /// Build a context from a `YYYY-MM-DDTHH:MM:SS` timestamp.
    pub fn from_reference_str(value: &str) -> Result<Self, Error> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .map(Self::new)
            .map_err(|_| Error::InvalidReference(value.to_string()))
    }
}

/// Options that affect suggestion text and ranking.
#[derive(Debug, Clone)]
pub struct Options {
    /// chrono format string for explicit dates.
    pub date_format: String,
    /// Times offered after a bare "at".
    pub common_times: Vec<ClockTime>,
    /// Suggestions shown when nothing better can be derived from the input.
    pub default_suggestions: Vec<String>,
    /// Multiplier applied to "tomorrow" variants of common times.
    pub tomorrow_weight: f64,
    /// Upper bound, in days, for "random amount of ..." phrases.
    pub max_random_days: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            common_times: vec![ClockTime::new(9, 0), ClockTime::new(12, 0), ClockTime::new(15, 0), ClockTime::new(18, 0)],
            default_suggestions: ["in 1 hour", "in 1 day", "in 1 week", "at 9:00", "at 12:00", "at 15:00", "at 18:00"]
                .into_iter()
                .map(String::from)
                .collect(),
            tomorrow_weight: 0.9,
            max_random_days: engine::DEFAULT_MAX_RANDOM_DAYS,
        }
    }
}

/// A ranked candidate for the input field.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSuggestion {
    /// Display text, e.g. `"Tomorrow at 09:00"`.
    pub text: String,
    /// The point in time selecting this suggestion would set.
    pub date: NaiveDateTime,
    /// Ranking score in `[0, 1]`, derived from textual similarity to the input.
    pub probability: f64,
}

impl DateSuggestion {
    pub fn new(text: impl Into<String>, date: NaiveDateTime, probability: f64) -> Self {
        Self { text: text.into(), date, probability }
    }
}

/// How the suggestions were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionMode {
    /// At least one real interpretation was found.
    Parsed,
    /// Input was too fragmentary; completions and defaults were offered.
    Partial,
}

/// Extra details returned by [`suggest_verbose_with`].
#[derive(Debug, Clone)]
pub struct SuggestionDetails {
    pub parsed: Vec<ParsedDate>,
    pub mode: SuggestionMode,
    /// Built-in recognizers that passed gating for this input.
    pub active_recognizers: Vec<String>,
    /// Recognizers and custom phrases that produced a value.
    pub matched: Vec<String>,
    /// Time spent in the parser.
    pub parse: Duration,
    /// Total elapsed time.
    pub total: Duration,
}

/// Result from [`suggest_verbose_with`].
#[derive(Debug, Clone)]
pub struct VerboseSuggestions {
    pub text: String,
    pub suggestions: Vec<DateSuggestion>,
    pub details: SuggestionDetails,
}

/// Parse `text` with the built-in recognizers and a default [`Context`].
///
/// # Example
/// ```
/// use datehint::{DateKind, parse};
///
/// let out = parse("tomorrow");
/// assert_eq!(out[0].kind(), DateKind::Relative);
/// ```
pub fn parse(text: &str) -> Vec<ParsedDate> {
    parse_with(text, &Context::default())
}

/// Parse `text` relative to `context`.
pub fn parse_with(text: &str, context: &Context) -> Vec<ParsedDate> {
    DEFAULT_ENGINE.parser().parse(text, context)
}

/// Ranked suggestions for `text` using a default [`Context`] and [`Options`].
pub fn suggest(text: &str) -> Vec<DateSuggestion> {
    suggest_with(text, &Context::default(), &Options::default())
}

/// Ranked suggestions for `text` with an explicit reference time and options.
pub fn suggest_with(text: &str, context: &Context, options: &Options) -> Vec<DateSuggestion> {
    suggest_verbose_with(text, context, options).suggestions
}

/// Like [`suggest_with`], also returning what the parser and engine did.
pub fn suggest_verbose_with(text: &str, context: &Context, options: &Options) -> VerboseSuggestions {
    let (suggestions, details) = DEFAULT_ENGINE.run_with(text, context, options);
    VerboseSuggestions { text: text.to_string(), suggestions, details }
}

/// A date field's brain: a parser with its custom phrases plus the suggestion
/// engine on top of it.
///
/// ```
/// use datehint::{Context, DateTimePicker, DateValue, Offsets, TimeUnit};
///
/// let mut picker = DateTimePicker::new();
/// picker
///     .add_custom_phrase("next week", |_| Some(DateValue::Relative(Offsets::of(TimeUnit::Week, 1))))
///     .unwrap();
///
/// let ctx = Context::from_reference_str("2025-03-14T10:15:00").unwrap();
/// let out = picker.generate_suggestions("next week", &ctx);
/// assert_eq!(out[0].text, "1 week");
/// ```
#[derive(Debug, Default)]
pub struct DateTimePicker {
    engine: SuggestionEngine,
}

impl DateTimePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { engine: SuggestionEngine::with_options(DateParser::new(), options) }
    }

    /// Ranked suggestions for the current field text.
    pub fn generate_suggestions(&self, text: &str, context: &Context) -> Vec<DateSuggestion> {
        self.engine.generate_suggestions(text, context)
    }

    /// See [`DateParser::add_custom_phrase`].
    pub fn add_custom_phrase<F>(&mut self, phrase: &str, handler: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<DateValue> + Send + Sync + 'static,
    {
        self.engine.parser_mut().add_custom_phrase(phrase, handler)
    }

    pub fn parse(&self, text: &str, context: &Context) -> Vec<ParsedDate> {
        self.engine.parser().parse(text, context)
    }

    pub fn generate_date(&self, parsed: &ParsedDate, context: &Context) -> NaiveDateTime {
        self.generator().generate_date(parsed, context.reference_time)
    }

    pub fn generator(&self) -> &DateGenerator {
        self.engine.generator()
    }

    pub fn options(&self) -> &Options {
        self.engine.options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateKind, Offsets, TimeUnit};

    fn reference_context() -> Context {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let time = NaiveTime::from_hms_opt(10, 15, 0).unwrap();
        Context { reference_time: NaiveDateTime::new(date, time) }
    }

    #[test]
    fn reference_str_round_trip() {
        let ctx = Context::from_reference_str("2025-03-14T10:15:00").unwrap();
        assert_eq!(ctx.reference_time, reference_context().reference_time);
        assert_eq!(
            Context::from_reference_str("yesterday").unwrap_err(),
            Error::InvalidReference("yesterday".to_string())
        );
    }

    #[test]
    fn suggest_with_ranks_exact_phrase_first() {
        let res = suggest_with("in 3 days", &reference_context(), &Options::default());
        assert_eq!(res[0].text, "In 3 days");
        assert_eq!(res[0].probability, 1.0);
        assert_eq!(res[0].date, NaiveDate::from_ymd_opt(2025, 3, 17).unwrap().and_hms_opt(10, 15, 0).unwrap());
    }

    #[test]
    fn suggest_verbose_includes_details() {
        let res = suggest_verbose_with("tomorrow", &reference_context(), &Options::default());
        assert_eq!(res.text, "tomorrow");
        assert_eq!(res.details.mode, SuggestionMode::Parsed);
        assert_eq!(res.details.matched, vec!["tomorrow".to_string()]);
        assert!(res.details.parse <= res.details.total);

        let res = suggest_verbose_with("soon", &reference_context(), &Options::default());
        assert_eq!(res.details.mode, SuggestionMode::Partial);
        assert_eq!(res.suggestions.len(), 7);
    }

    #[test]
    fn picker_custom_phrase_flows_through() {
        let mut picker = DateTimePicker::new();
        picker
            .add_custom_phrase("payday", |_| {
                Some(DateValue::Relative(Offsets::of(TimeUnit::Week, 2).with(TimeUnit::Day, 1)))
            })
            .unwrap();

        let ctx = reference_context();
        let parsed = picker.parse("payday", &ctx);
        assert_eq!(parsed[0].kind(), DateKind::Relative);

        let out = picker.generate_suggestions("payday", &ctx);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "2 weeks and 1 day");
        assert_eq!(out[0].date, picker.generate_date(&parsed[0], &ctx));
    }

    #[test]
    fn picker_options_are_applied() {
        let options = Options { date_format: "%Y-%m-%d".to_string(), ..Options::default() };
        let picker = DateTimePicker::with_options(options);
        let out = picker.generate_suggestions("25.12.2025", &reference_context());
        assert!(out.iter().any(|s| s.text == "2025-12-25"));
    }
}
