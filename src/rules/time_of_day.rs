//! Time-of-day recognizer (HAS_DIGITS bucket).

use regex::Captures;

use crate::engine::BucketMask;
use crate::rules::helpers::*;
use crate::{DateValue, Recognizer, TimeOfDay};

/// Two shapes are accepted:
///
/// - the whole input is a time: `[today|tomorrow] [at] H[:MM][am|pm] [tz] [today|tomorrow]`.
///   A trailing word must name a timezone or a day, so "3 days" and "in 2"
///   are left to the other recognizers and to partial completion;
/// - `at H[:MM][am|pm]` anywhere in the input ("meet at 3pm"), where a
///   following word is used as a timezone only when it names one.
///
/// `days` is 1 whenever the word "tomorrow" appears.
pub fn rule_specific_time() -> Recognizer {
    recognizer! {
        name: "[today|tomorrow] [at] hh[:mm][am|pm] [tz]",
        confidence: 0.9,
        buckets: BucketMask::HAS_DIGITS.bits(),
        extract: |input: &str, _ctx: &Context| -> Option<DateValue> {
            whole_input_time(input).or_else(|| time_after_at(input))
        }
    }
}

fn whole_input_time(input: &str) -> Option<DateValue> {
    let caps = regex!(
        r"^(?:(?:today|tomorrow)\s+)?(?:at\s+)?(\d{1,2})(?::(\d{2}))?(?:\s*(am|pm))?(?:\s+([\w+\-]+))?(?:\s+(?:today|tomorrow))?$"
    )
    .captures(input)?;

    let timezone = match group_str(&caps, 4) {
        None | Some("today" | "tomorrow") => None,
        Some(label) => Some(tz_offset_hours(label)?),
    };
    time_value(input, &caps, timezone)
}

fn time_after_at(input: &str) -> Option<DateValue> {
    let caps = regex!(r"(?:^|\s)at\s+(\d{1,2})(?::(\d{2}))?(?:\s*(am|pm))?(?:\s+([\w+\-]+))?(?:\s|$)").captures(input)?;

    let timezone = group_str(&caps, 4).and_then(tz_offset_hours);
    time_value(input, &caps, timezone)
}

/// Groups 1-3 are hour, minutes and am/pm in both shapes.
fn time_value(input: &str, caps: &Captures<'_>, timezone: Option<i32>) -> Option<DateValue> {
    let hours = to_24h(group_int(caps, 1)?, group_str(caps, 3))?;
    let minutes = match caps.get(2) {
        Some(_) => valid_minutes(group_int(caps, 2)?)?,
        None => 0,
    };
    let days = u32::from(input.split_whitespace().any(|word| word == "tomorrow"));

    Some(DateValue::SpecificTime(TimeOfDay { days, hours, minutes, timezone }))
}
