//! Parsing, date generation and suggestion ranking.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (all built-ins)          (src/rules/**)
//!        │
//! input ─┼─ TriggerInfo::scan     (trigger.rs)   buckets gate recognizers
//!        v
//!   DateParser::run              (parser.rs)    custom phrases, recognizers,
//!        │                                      partial fallback
//!        v
//!   SuggestionEngine::run_with   (suggest.rs)
//!        ├─ parsed:  text (format.rs) + date (generate.rs, shift.rs)
//!        └─ partial: completions / defaults (partial.rs)
//!        │
//!        v
//!   reverse_similarity           (similarity.rs) -> stable sort, best first
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: cheap input classification (`BucketMask`) so recognizers that
//!   cannot match are skipped.
//! - `parser.rs`: the custom-phrase registry and the recognizer loop.
//! - `generate.rs` / `shift.rs`: turn an interpretation into a `NaiveDateTime`
//!   using explicit calendar arithmetic.
//! - `suggest.rs` / `partial.rs` / `format.rs`: display text and ranking.
//! - `similarity.rs`: the ranking score.
//! - `metrics.rs`: bookkeeping surfaced by the verbose API.
//!
//! ## Adding recognizers
//!
//! New recognizers live under `src/rules/` and are listed in `rules::get`. If a
//! recognizer needs a new coarse trigger, add a `BucketMask` bit and teach
//! `TriggerInfo::scan` to set it.
//!
//! ## Debugging
//!
//! Everything interesting is logged through `tracing` at `debug`/`trace` level.

#[path = "engine/format.rs"]
mod format;
#[path = "engine/generate.rs"]
mod generate;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/partial.rs"]
mod partial;
#[path = "engine/shift.rs"]
mod shift;
#[path = "engine/similarity.rs"]
mod similarity;
#[path = "engine/suggest.rs"]
mod suggest;
#[path = "engine/trigger.rs"]
mod trigger;

pub use generate::{DEFAULT_MAX_RANDOM_DAYS, DateGenerator};
pub use parser::{DateParser, PhraseHandler};
pub use similarity::reverse_similarity;
pub use suggest::SuggestionEngine;
pub use trigger::BucketMask;
