//! Natural-language date parsing with as-you-type suggestions.
//!
//! The crate turns short fragments typed into a date field ("tomorrow at 9am",
//! "in 3 days", "25.12.2025", "in 2 d") into a ranked list of
//! [`DateSuggestion`]s. Three pieces form a one-way pipeline:
//!
//! ```text
//! text ──▶ DateParser ──▶ Vec<ParsedDate> ──▶ SuggestionEngine ──▶ Vec<DateSuggestion>
//!                                  │                 ▲
//!                                  └─ DateGenerator ─┘  (ParsedDate -> NaiveDateTime)
//! ```
//!
//! "Now" is always passed in through a [`Context`], so every run is
//! reproducible given the same reference time.
//!
//! ```
//! use datehint::{Context, Options, suggest_with};
//!
//! let ctx = Context::from_reference_str("2025-03-14T10:15:00").unwrap();
//! let out = suggest_with("in 3 days", &ctx, &Options::default());
//! assert!(out.iter().any(|s| s.text == "In 3 days"));
//! ```

extern crate self as datehint;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod parsed_date;
mod rules;

pub use api::{
    Context, DateSuggestion, DateTimePicker, Options, SuggestionDetails, SuggestionMode, VerboseSuggestions, parse,
    parse_with, suggest, suggest_verbose_with, suggest_with,
};
pub use engine::{DateGenerator, DateParser, PhraseHandler, SuggestionEngine, reverse_similarity};
pub use error::Error;
pub use parsed_date::{CalendarDate, ClockTime, DateKind, DateValue, Offsets, ParsedDate, TimeOfDay, TimeUnit};

// --- Internal types ---------------------------------------------------------

pub(crate) type Extractor = Box<dyn Fn(&str, &Context) -> Option<DateValue> + Send + Sync>;

/// A built-in recognizer: a cheap gate (buckets + phrases) and an extractor
/// that turns the normalized input into a typed value.
///
/// Recognizers are independent of each other. The parser runs every active
/// recognizer in order and keeps each match.
pub(crate) struct Recognizer {
    pub name: &'static str,
    /// Confidence attached to every value this recognizer produces.
    pub confidence: f64,
    pub extract: Extractor,
    /// Phrases that must ALL appear in the input for this recognizer to run.
    pub required_phrases: &'static [&'static str],
    /// Bucket mask (see `engine::BucketMask`) that must be present in the input.
    pub buckets: u32,
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recognizer")
            .field("name", &self.name)
            .field("confidence", &self.confidence)
            .field("extract", &"<function>")
            .field("required_phrases", &self.required_phrases)
            .field("buckets", &self.buckets)
            .finish()
    }
}
