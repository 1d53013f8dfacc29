//! Built-in recognizers.
//!
//! Order matters only for the order of the parse results: every recognizer is
//! tried on every input (subject to bucket/phrase gating) and each one appends
//! at most one value.

pub mod dates;
pub mod helpers;
pub mod offsets;
pub mod time_of_day;

#[cfg(test)]
mod tests;

use crate::Recognizer;

/// All built-in recognizers, in evaluation order.
pub fn get() -> Vec<Recognizer> {
    vec![
        time_of_day::rule_specific_time(),
        dates::rule_day_month_year(),
        offsets::rule_in_n_units(),
        offsets::rule_tomorrow(),
        offsets::rule_random_amount(),
    ]
}
