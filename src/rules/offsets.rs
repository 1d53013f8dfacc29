//! Offset recognizers: "in N units", "tomorrow", "random amount of units".

use crate::engine::BucketMask;
use crate::rules::helpers::*;
use crate::{ClockTime, DateValue, Offsets, Recognizer, TimeUnit};

/// in <n> <unit>[s] [at hh[:mm][am|pm]]
pub fn rule_in_n_units() -> Recognizer {
    recognizer! {
        name: "in <n> <unit> [at <time>]",
        confidence: 0.8,
        required_phrases: ["in"],
        buckets: BucketMask::HAS_DIGITS.bits(),
        extract: |input: &str, _ctx: &Context| -> Option<DateValue> {
            let caps = regex!(
                r"\bin\s+(\d+)\s+(minute|hour|day|week|month|year)s?\b(?:\s+at\s+(\d{1,2})(?::(\d{2}))?(?:\s*(am|pm))?\b)?"
            )
            .captures(input)?;

            let amount = group_int(&caps, 1)?;
            let unit = TimeUnit::from_name(group_str(&caps, 2)?)?;
            let mut offsets = Offsets::of(unit, amount);

            if caps.get(3).is_some() {
                let hours = to_24h(group_int(&caps, 3)?, group_str(&caps, 5))?;
                let minutes = match caps.get(4) {
                    Some(_) => valid_minutes(group_int(&caps, 4)?)?,
                    None => 0,
                };
                offsets = offsets.at(ClockTime::new(hours, minutes));
            }

            Some(DateValue::Numeric(offsets))
        }
    }
}

/// The bare word "tomorrow".
pub fn rule_tomorrow() -> Recognizer {
    recognizer! {
        name: "tomorrow",
        confidence: 1.0,
        required_phrases: ["tomorrow"],
        extract: |input: &str, _ctx: &Context| -> Option<DateValue> {
            if input != "tomorrow" {
                return None;
            }
            Some(DateValue::Relative(Offsets::of(TimeUnit::Day, 1)))
        }
    }
}

/// random amount of <unit>s
pub fn rule_random_amount() -> Recognizer {
    recognizer! {
        name: "random amount of <unit>s",
        confidence: 0.7,
        required_phrases: ["random"],
        buckets: BucketMask::RANDOMISH.bits(),
        extract: |input: &str, _ctx: &Context| -> Option<DateValue> {
            let caps = regex!(r"random amount of (minute|hour|day|week|month|year)s").captures(input)?;
            let unit = TimeUnit::from_name(group_str(&caps, 1)?)?;
            Some(DateValue::Random { unit })
        }
    }
}
