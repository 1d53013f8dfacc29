//! Explicit date recognizer (HAS_DIGITS + HAS_DATE_SEPARATOR buckets).

use chrono::Datelike;

use crate::engine::BucketMask;
use crate::rules::helpers::*;
use crate::{CalendarDate, DateValue, Recognizer};

/// `D.M[.YY[YY]]` or `D/M[/YY[YY]]`, day first.
///
/// A missing year takes the reference year; years below 100 are 2000-based.
pub fn rule_day_month_year() -> Recognizer {
    recognizer! {
        name: "dd.mm[.yyyy]",
        confidence: 0.9,
        buckets: (BucketMask::HAS_DIGITS | BucketMask::HAS_DATE_SEPARATOR).bits(),
        extract: |input: &str, ctx: &Context| -> Option<DateValue> {
            let caps = regex!(r"\b(\d{1,2})[./](\d{1,2})(?:[./](\d{2,4}))?\b").captures(input)?;

            let day = group_int(&caps, 1)?;
            let month = group_int(&caps, 2)?;
            if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
                return None;
            }

            let year = match caps.get(3) {
                Some(_) => {
                    let y = group_int(&caps, 3)?;
                    if y < 100 { 2000 + y } else { y }
                }
                None => i64::from(ctx.reference_time.year()),
            };

            Some(DateValue::SpecificDate(CalendarDate {
                day: day as u32,
                month: (month - 1) as u32,
                year: i32::try_from(year).ok()?,
            }))
        }
    }
}
