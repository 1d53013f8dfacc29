//! Interpretation -> point in time.

use chrono::NaiveDateTime;
use rand::Rng;

use super::shift::{at_clock, date_with_rollover, shift_datetime};
use crate::{DateValue, Offsets, ParsedDate, TimeUnit};

/// Upper bound (inclusive) for random offsets, in days.
pub const DEFAULT_MAX_RANDOM_DAYS: u32 = 100;

/// Computes a concrete date for a [`ParsedDate`] relative to a reference instant.
///
/// Generation never fails: values that cannot be placed on the calendar
/// (out-of-range clock readings from custom handlers, arithmetic overflow) and
/// partial inputs resolve to the reference itself.
#[derive(Debug, Clone)]
pub struct DateGenerator {
    max_random_days: u32,
}

impl Default for DateGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RANDOM_DAYS)
    }
}

impl DateGenerator {
    pub fn new(max_random_days: u32) -> Self {
        Self { max_random_days: max_random_days.max(1) }
    }

    pub fn generate_date(&self, parsed: &ParsedDate, reference: NaiveDateTime) -> NaiveDateTime {
        self.generate_date_with_rng(parsed, reference, &mut rand::thread_rng())
    }

    /// Like [`generate_date`](Self::generate_date) with an explicit random source.
    pub fn generate_date_with_rng<R: Rng>(
        &self,
        parsed: &ParsedDate,
        reference: NaiveDateTime,
        rng: &mut R,
    ) -> NaiveDateTime {
        let generated = match &parsed.value {
            DateValue::SpecificTime(t) => at_clock(reference, t.hours, t.minutes)
                .and_then(|dt| shift_datetime(dt, i64::from(t.days), TimeUnit::Day)),
            DateValue::SpecificDate(d) => date_with_rollover(d.year, d.month, d.day),
            DateValue::Numeric(offsets) | DateValue::Relative(offsets) => apply_offsets(reference, offsets),
            // Always days: the parsed unit only shows up in the suggestion text.
            DateValue::Random { .. } => {
                let amount = rng.gen_range(1..=self.max_random_days);
                shift_datetime(reference, i64::from(amount), TimeUnit::Day)
            }
            DateValue::Partial(_) => Some(reference),
        };

        generated.unwrap_or_else(|| {
            tracing::warn!(kind = %parsed.kind(), value = ?parsed.value, "cannot place value on the calendar, using reference");
            reference
        })
    }
}

fn apply_offsets(reference: NaiveDateTime, offsets: &Offsets) -> Option<NaiveDateTime> {
    let mut result = reference;
    for (unit, amount) in offsets.iter() {
        result = shift_datetime(result, amount, unit)?;
    }
    match offsets.at_time {
        Some(time) => at_clock(result, time.hours, time.minutes),
        None => Some(result),
    }
}
