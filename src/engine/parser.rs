//! Recognizer-driven parser.
//!
//! Parsing an input is a single pass over independent recognizers:
//!
//! ```text
//! input ── lowercase + trim ──┬─ custom phrases (registry, confidence 1)
//!                             ├─ TriggerInfo::scan -> active built-ins
//!                             │    each active recognizer: Some(value) -> push
//!                             └─ nothing matched -> Partial(input), confidence 0.5
//! ```
//!
//! Recognizers never short-circuit each other; a single input can produce
//! several interpretations ("in 3 days at 5pm" is both a time of day and a
//! numeric offset). Only the partial fallback depends
//! on the others having produced nothing.

use std::time::Instant;

use once_cell::sync::Lazy;

use super::metrics::ParseRun;
use super::trigger::TriggerInfo;
use crate::{Context, DateValue, Error, ParsedDate, Recognizer};

static BUILTIN_RECOGNIZERS: Lazy<Vec<Recognizer>> = Lazy::new(crate::rules::get);

const PARTIAL_CONFIDENCE: f64 = 0.5;
const CUSTOM_PHRASE_CONFIDENCE: f64 = 1.0;

/// Caller-supplied interpretation for a custom phrase.
///
/// Receives the normalized (lowercased, trimmed) input.
pub type PhraseHandler = Box<dyn Fn(&str) -> Option<DateValue> + Send + Sync>;

/// Turns raw text into zero or more typed, confidence-scored interpretations.
///
/// The custom-phrase registry is plain data: registering takes `&mut self`, so
/// all registrations have to happen before the parser is shared. There is no
/// internal locking.
pub struct DateParser {
    /// Registered phrases in insertion order; re-registering replaces in place.
    custom_phrases: Vec<(String, PhraseHandler)>,
    recognizers: &'static [Recognizer],
}

impl std::fmt::Debug for DateParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateParser")
            .field("custom_phrases", &self.custom_phrases.iter().map(|(p, _)| p.as_str()).collect::<Vec<_>>())
            .field("recognizers", &self.recognizers.len())
            .finish()
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DateParser {
    /// Parser with the built-in recognizers and an empty phrase registry.
    pub fn new() -> Self {
        DateParser { custom_phrases: Vec::new(), recognizers: &BUILTIN_RECOGNIZERS }
    }

    /// Register `handler` for inputs containing `phrase` (case-insensitive).
    ///
    /// The last registration for a phrase wins.
    pub fn add_custom_phrase<F>(&mut self, phrase: &str, handler: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<DateValue> + Send + Sync + 'static,
    {
        if phrase.trim().is_empty() {
            return Err(Error::EmptyPhrase);
        }

        let key = phrase.to_lowercase();
        let handler: PhraseHandler = Box::new(handler);
        match self.custom_phrases.iter_mut().find(|(p, _)| *p == key) {
            Some(slot) => {
                tracing::debug!(phrase = %key, "replacing custom phrase");
                slot.1 = handler;
            }
            None => {
                tracing::debug!(phrase = %key, "registering custom phrase");
                self.custom_phrases.push((key, handler));
            }
        }
        Ok(())
    }

    /// Registered phrases, in registration order.
    pub fn custom_phrases(&self) -> impl Iterator<Item = &str> {
        self.custom_phrases.iter().map(|(p, _)| p.as_str())
    }

    /// Parse `input` into interpretations.
    ///
    /// Empty or whitespace-only input yields no interpretations at all.
    pub fn parse(&self, input: &str, context: &Context) -> Vec<ParsedDate> {
        self.run(input, context).parsed
    }

    /// Parse and keep track of which recognizers ran and matched.
    pub(crate) fn run(&self, input: &str, context: &Context) -> ParseRun {
        let started = Instant::now();
        let mut run = ParseRun::default();

        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            run.elapsed = started.elapsed();
            return run;
        }

        for (phrase, handler) in &self.custom_phrases {
            if !normalized.contains(phrase.as_str()) {
                continue;
            }
            if let Some(value) = handler(&normalized) {
                tracing::trace!(phrase = %phrase, kind = %value.kind(), "custom phrase matched");
                run.matched.push(format!("custom: {phrase}"));
                run.parsed.push(ParsedDate::new(value, CUSTOM_PHRASE_CONFIDENCE));
            }
        }

        let trigger = TriggerInfo::scan(&normalized);
        tracing::trace!(input = %normalized, buckets = ?trigger.buckets, "trigger scan");

        for recognizer in self.recognizers {
            if !trigger.allows(recognizer.buckets)
                || !recognizer.required_phrases.iter().all(|&p| normalized.contains(p))
            {
                continue;
            }
            run.active.push(recognizer.name);

            if let Some(value) = (recognizer.extract)(&normalized, context) {
                tracing::trace!(recognizer = recognizer.name, kind = %value.kind(), "recognizer matched");
                run.matched.push(recognizer.name.to_string());
                run.parsed.push(ParsedDate::new(value, recognizer.confidence));
            }
        }

        if run.parsed.is_empty() {
            tracing::debug!(input = %normalized, "no recognizer matched, treating as partial input");
            run.parsed.push(ParsedDate::new(DateValue::Partial(normalized), PARTIAL_CONFIDENCE));
        }

        run.elapsed = started.elapsed();
        run
    }
}
