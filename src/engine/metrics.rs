//! Run bookkeeping.
//!
//! The plain entry points (`DateParser::parse`, `SuggestionEngine::generate_suggestions`)
//! throw this away; the verbose path surfaces it for the CLI report.

use std::time::Duration;

use crate::ParsedDate;

/// Parser output plus what the parser did to get there.
#[derive(Debug, Clone, Default)]
pub struct ParseRun {
    pub parsed: Vec<ParsedDate>,
    /// Built-in recognizers that passed bucket/phrase gating.
    pub active: Vec<&'static str>,
    /// Recognizers (and `custom: <phrase>` entries) that produced a value.
    pub matched: Vec<String>,
    pub elapsed: Duration,
}
