//! Partial-completion mode.
//!
//! Used when the parser found nothing real. The leading keyword decides what
//! to complete:
//!
//! ```text
//! "in"            -> In 1 minute .. In 1 year               (probability 1)
//! "in 2"          -> In 2 minutes .. In 2 years             (probability 1)
//! "in 2 da"       -> units starting with "da", scored against the unit name
//! "at"            -> common times today (1) and tomorrow (tomorrow_weight)
//! "at 1"          -> common times starting with "1", scored against the time
//! anything else   -> default suggestions, scored against the raw input
//! ```
//!
//! Whenever a branch yields nothing the defaults are used instead.

use super::format;
use super::shift::{at_clock, shift_datetime};
use super::similarity::reverse_similarity;
use super::suggest::{Run, SuggestionEngine};
use crate::rules::helpers::leading_int;
use crate::{DateSuggestion, DateValue, Offsets, ParsedDate, TimeUnit};

impl SuggestionEngine {
    pub(super) fn partial_suggestions(&self, run: &Run<'_>) -> Vec<DateSuggestion> {
        let lowered = run.input.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        let suggestions = match words.as_slice() {
            ["in"] => unit_suggestions(run, 1, None),
            ["in", amount] => leading_int(amount).map(|n| unit_suggestions(run, n, None)).unwrap_or_default(),
            ["in", amount, rest @ ..] => leading_int(amount)
                .map(|n| unit_suggestions(run, n, Some(&rest.join(" "))))
                .unwrap_or_default(),
            ["at"] => at_time_suggestions(run, None),
            ["at", rest @ ..] => at_time_suggestions(run, Some(&rest.join(" "))),
            _ => Vec::new(),
        };

        if suggestions.is_empty() {
            tracing::trace!(input = run.input, "no completion, offering defaults");
            return self.default_suggestions(run);
        }
        suggestions
    }

    fn default_suggestions(&self, run: &Run<'_>) -> Vec<DateSuggestion> {
        run.options
            .default_suggestions
            .iter()
            .map(|text| {
                let date = match self.parser().parse(text, run.context).first() {
                    Some(parsed) => run.generator.generate_date(parsed, run.context.reference_time),
                    None => run.context.reference_time,
                };
                DateSuggestion::new(text.as_str(), date, reverse_similarity(run.input, text))
            })
            .collect()
    }
}

/// `In <amount> <unit>` for every unit, or only those starting with `unit_prefix`.
fn unit_suggestions(run: &Run<'_>, amount: i64, unit_prefix: Option<&str>) -> Vec<DateSuggestion> {
    TimeUnit::ALL
        .into_iter()
        .filter(|unit| unit_prefix.is_none_or(|prefix| unit.singular().starts_with(prefix)))
        .map(|unit| {
            let parsed = ParsedDate::new(DateValue::Numeric(Offsets::of(unit, amount)), 1.0);
            let date = run.generator.generate_date(&parsed, run.context.reference_time);
            let probability = unit_prefix.map_or(1.0, |prefix| reverse_similarity(prefix, unit.singular()));
            DateSuggestion::new(format!("In {amount} {}", unit.name_for(amount)), date, probability)
        })
        .collect()
}

/// Common times today and tomorrow, optionally filtered by a typed prefix.
fn at_time_suggestions(run: &Run<'_>, time_prefix: Option<&str>) -> Vec<DateSuggestion> {
    let reference = run.context.reference_time;
    let mut out = Vec::new();

    for &time in &run.options.common_times {
        let label = format::common_time(time);
        if time_prefix.is_some_and(|prefix| !label.starts_with(prefix)) {
            continue;
        }
        let Some(today) = at_clock(reference, time.hours, time.minutes) else {
            tracing::warn!(time = %label, "skipping invalid common time");
            continue;
        };
        let score = time_prefix.map_or(1.0, |prefix| reverse_similarity(prefix, &label));

        out.push(DateSuggestion::new(format!("Today at {label}"), today, score));
        if let Some(tomorrow) = shift_datetime(today, 1, TimeUnit::Day) {
            out.push(DateSuggestion::new(format!("Tomorrow at {label}"), tomorrow, score * run.options.tomorrow_weight));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    use crate::{Context, DateParser, DateSuggestion, SuggestionEngine, reverse_similarity};

    fn ctx() -> Context {
        Context::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(10, 15, 0).unwrap())
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn suggest(input: &str) -> Vec<DateSuggestion> {
        SuggestionEngine::new(DateParser::new()).generate_suggestions(input, &ctx())
    }

    fn texts(out: &[DateSuggestion]) -> Vec<&str> {
        out.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn bare_in_offers_every_unit() {
        let out = suggest("in");
        assert_eq!(
            texts(&out),
            vec!["In 1 minute", "In 1 hour", "In 1 day", "In 1 week", "In 1 month", "In 1 year"]
        );
        assert!(out.iter().all(|s| s.probability == 1.0));
        assert_eq!(out[2].date, dt(2025, 3, 15, 10, 15));
    }

    #[test]
    fn in_with_amount_uses_plural_units() {
        let out = suggest("in 30");
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].text, "In 30 minutes");
        assert_eq!(out[0].date, dt(2025, 3, 14, 10, 45));
        assert!(out.iter().all(|s| s.probability == 1.0));
    }

    #[test]
    fn in_with_unit_prefix_filters_units() {
        let out = suggest("in 2 mo");
        assert_eq!(texts(&out), vec!["In 2 months"]);
        assert_eq!(out[0].probability, reverse_similarity("mo", "month"));
        assert_eq!(out[0].date, dt(2025, 5, 14, 10, 15));

        let out = suggest("in 2 m");
        assert_eq!(texts(&out), vec!["In 2 minutes", "In 2 months"]);
    }

    #[test]
    fn in_with_non_numeric_amount_falls_back_to_defaults() {
        let out = suggest("in two");
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn bare_at_offers_common_times() {
        let out = suggest("at");
        assert_eq!(out.len(), 8);
        assert_eq!(out[0].text, "Today at 9:00");
        assert_eq!(out[0].probability, 1.0);
        assert_eq!(out[0].date, dt(2025, 3, 14, 9, 0));
        // today entries (1.0) are all ranked above tomorrow entries (0.9)
        assert!(out[..4].iter().all(|s| s.text.starts_with("Today")));
        assert!(out[4..].iter().all(|s| s.text.starts_with("Tomorrow") && (s.probability - 0.9).abs() < 1e-9));
        assert_eq!(out[4].date, dt(2025, 3, 15, 9, 0));
    }

    #[test]
    fn at_with_time_prefix_filters_and_scores() {
        let out = suggest("at 9:");
        assert_eq!(texts(&out), vec!["Today at 9:00", "Tomorrow at 9:00"]);
        let today = reverse_similarity("9:", "9:00");
        assert_eq!(out[0].probability, today);
        assert!((out[1].probability - today * 0.9).abs() < 1e-9);
    }

    #[test]
    fn nonsense_gets_seven_sorted_defaults() {
        let out = suggest("xyz-nonsense");
        assert_eq!(out.len(), 7);
        assert!(out.windows(2).all(|w| w[0].probability >= w[1].probability));
        let mut sorted_texts = texts(&out);
        sorted_texts.sort_unstable();
        assert_eq!(
            sorted_texts,
            vec!["at 12:00", "at 15:00", "at 18:00", "at 9:00", "in 1 day", "in 1 hour", "in 1 week"]
        );
    }

    #[test]
    fn defaults_are_dated_through_the_parser() {
        let out = suggest("hour");
        let hour = out.iter().find(|s| s.text == "in 1 hour").unwrap();
        assert_eq!(hour.date, dt(2025, 3, 14, 11, 15));
        assert_eq!(out[0].text, "in 1 hour");

        let nine = out.iter().find(|s| s.text == "at 9:00").unwrap();
        assert_eq!(nine.date, dt(2025, 3, 14, 9, 0));
    }

    #[test]
    fn empty_input_gets_zero_scored_defaults() {
        let out = suggest("");
        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|s| s.probability == 0.0));
        assert_eq!(out[0].text, "in 1 hour");
    }
}
