use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::TimeUnit;

/// Add `amount` units to `dt`.
///
/// Minutes, hours, days and weeks are exact. Months and years step the
/// calendar and keep the day of month; a day the target month does not have
/// overflows into the next one (Jan 31 + 1 month = Mar 3, or Mar 2 in leap
/// years). `None` on overflow.
pub fn shift_datetime(dt: NaiveDateTime, amount: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    match unit {
        TimeUnit::Minute => dt.checked_add_signed(TimeDelta::try_minutes(amount)?),
        TimeUnit::Hour => dt.checked_add_signed(TimeDelta::try_hours(amount)?),
        TimeUnit::Day => dt.checked_add_signed(TimeDelta::try_days(amount)?),
        TimeUnit::Week => dt.checked_add_signed(TimeDelta::try_days(amount.checked_mul(7)?)?),
        TimeUnit::Month => add_months(dt, amount),
        TimeUnit::Year => add_months(dt, amount.checked_mul(12)?),
    }
}

/// Replace the time-of-day, zeroing seconds.
pub fn at_clock(dt: NaiveDateTime, hours: u32, minutes: u32) -> Option<NaiveDateTime> {
    dt.date().and_hms_opt(hours, minutes, 0)
}

/// Midnight on `day` of zero-based `month0` in `year`.
///
/// Out-of-calendar days roll forward into the next month (Feb 31 -> Mar 2/3),
/// and months past December roll into the next year.
pub fn date_with_rollover(year: i32, month0: u32, day: u32) -> Option<NaiveDateTime> {
    let january = NaiveDate::from_ymd_opt(year, 1, 1)?.and_time(NaiveTime::MIN);
    let first_of_month = add_months(january, i64::from(month0))?;
    first_of_month.checked_add_signed(TimeDelta::try_days(i64::from(day) - 1)?)
}

fn add_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let zero_based = i64::from(dt.month0()).checked_add(months)?;
    let year = i64::from(dt.year()).checked_add(zero_based.div_euclid(12))?;
    let year = i32::try_from(year).ok()?;
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_signed(TimeDelta::try_days(i64::from(dt.day()) - 1)?)?;
    Some(NaiveDateTime::new(date, dt.time()))
}
