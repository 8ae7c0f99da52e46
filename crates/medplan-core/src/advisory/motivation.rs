//! Daily motivation message.

use chrono::{Datelike, NaiveDate};

use super::MessagePool;

/// Pick the message for a calendar date.
///
/// Index is `days_from_ce mod pool.len()`: stable for a whole day, cycling
/// through the pool on consecutive days.
pub fn daily_motivation(date: NaiveDate, pool: &MessagePool) -> &str {
    let ordinal = i64::from(date.num_days_from_ce());
    let len = pool.len() as i64;
    pool.pick(ordinal.rem_euclid(len) as usize)
}
