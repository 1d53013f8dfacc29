//! Suggestion engine: parser + generator + ranking.
//!
//! ```text
//! input ── DateParser::run ──┬─ empty / first is Partial ──▶ partial completion (partial.rs)
//!                            └─ otherwise, per ParsedDate:
//!                                  text  = format.rs
//!                                  date  = DateGenerator
//!                                  score = reverse_similarity(input, text)
//!                                            │
//!                                            ▼
//!                               stable sort by score, descending
//! ```
//!
//! The parser's confidence only decides between the two modes; ranking is
//! driven purely by how well the display text matches what was typed.

use std::time::Instant;

use super::format;
use super::generate::DateGenerator;
use super::parser::DateParser;
use super::similarity::reverse_similarity;
use crate::{
    Context, DateSuggestion, DateValue, Options, ParsedDate, SuggestionDetails, SuggestionMode, TimeOfDay,
};

/// Produces ranked [`DateSuggestion`]s for free text.
#[derive(Debug)]
pub struct SuggestionEngine {
    parser: DateParser,
    generator: DateGenerator,
    options: Options,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(DateParser::new())
    }
}

/// Per-run state shared by the parsed and partial paths.
pub(super) struct Run<'a> {
    pub input: &'a str,
    pub context: &'a Context,
    pub options: &'a Options,
    pub generator: DateGenerator,
}

impl SuggestionEngine {
    pub fn new(parser: DateParser) -> Self {
        Self::with_options(parser, Options::default())
    }

    pub fn with_options(parser: DateParser, options: Options) -> Self {
        let generator = DateGenerator::new(options.max_random_days);
        Self { parser, generator, options }
    }

    pub fn parser(&self) -> &DateParser {
        &self.parser
    }

    /// Mutable access for registering custom phrases before the engine is shared.
    pub fn parser_mut(&mut self) -> &mut DateParser {
        &mut self.parser
    }

    pub fn generator(&self) -> &DateGenerator {
        &self.generator
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Ranked suggestions for `input`, best first.
    pub fn generate_suggestions(&self, input: &str, context: &Context) -> Vec<DateSuggestion> {
        self.run_with(input, context, &self.options).0
    }

    /// Full run with explicit options, returning details for debugging.
    pub(crate) fn run_with(
        &self,
        input: &str,
        context: &Context,
        options: &Options,
    ) -> (Vec<DateSuggestion>, SuggestionDetails) {
        let started = Instant::now();
        let parse_run = self.parser.run(input, context);

        let run = Run { input, context, options, generator: DateGenerator::new(options.max_random_days) };

        let partial = parse_run.parsed.first().is_none_or(|p| matches!(p.value, DateValue::Partial(_)));
        let (mode, mut suggestions) = if partial {
            (SuggestionMode::Partial, self.partial_suggestions(&run))
        } else {
            (SuggestionMode::Parsed, parse_run.parsed.iter().flat_map(|p| run.suggestions_for(p)).collect())
        };

        // `sort_by` is stable: equal scores keep generation order.
        suggestions.sort_by(|a, b| b.probability.partial_cmp(&a.probability).unwrap_or(std::cmp::Ordering::Equal));

        tracing::debug!(
            input,
            mode = ?mode,
            parsed = parse_run.parsed.len(),
            suggestions = suggestions.len(),
            "generated suggestions"
        );

        let details = SuggestionDetails {
            parsed: parse_run.parsed,
            mode,
            active_recognizers: parse_run.active.iter().map(|s| s.to_string()).collect(),
            matched: parse_run.matched,
            parse: parse_run.elapsed,
            total: started.elapsed(),
        };
        (suggestions, details)
    }
}

impl Run<'_> {
    pub fn suggestion(&self, text: String, parsed: &ParsedDate) -> DateSuggestion {
        let date = self.generator.generate_date(parsed, self.context.reference_time);
        let probability = reverse_similarity(self.input, &text);
        DateSuggestion { text, date, probability }
    }

    /// Display candidates for one real interpretation.
    fn suggestions_for(&self, parsed: &ParsedDate) -> Vec<DateSuggestion> {
        match &parsed.value {
            DateValue::SpecificTime(t) => {
                let time_text = format::time_of_day(t);
                let mut out = vec![self.suggestion(format!("{} at {time_text}", format::day_label(t.days)), parsed)];

                // A bare time is ambiguous: offer tomorrow as well.
                if t.days == 0 && !self.input.to_lowercase().contains("today") {
                    let tomorrow =
                        ParsedDate::new(DateValue::SpecificTime(TimeOfDay { days: 1, ..*t }), parsed.confidence);
                    out.push(self.suggestion(format!("Tomorrow at {time_text}"), &tomorrow));
                }
                out
            }
            DateValue::SpecificDate(_) => {
                let date = self.generator.generate_date(parsed, self.context.reference_time);
                let text = format::date(date, &self.options.date_format);
                let probability = reverse_similarity(self.input, &text);
                vec![DateSuggestion { text, date, probability }]
            }
            DateValue::Numeric(offsets) => vec![self.suggestion(format::numeric(offsets), parsed)],
            DateValue::Relative(offsets) => vec![self.suggestion(format::units(offsets), parsed)],
            DateValue::Random { unit } => vec![self.suggestion(format::random(*unit), parsed)],
            DateValue::Partial(_) => Vec::new(),
        }
    }
}
