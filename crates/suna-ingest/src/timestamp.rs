//! Timestamp derivation from the SUNA date/time fields.
//!
//! The sensor stamps each frame with a `YYYYDDD` date (year + 1-based day of
//! year) and the time of day as decimal hours. Records carry the result as
//! seconds since the NTP epoch, 1900-01-01T00:00:00Z.

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use crate::classify::char_slice;
use crate::error::TimestampError;

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch (1970-01-01).
pub const NTP_UNIX_OFFSET_SECONDS: i64 = 2_208_988_800;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Converts Unix seconds to NTP seconds.
pub fn unix_to_ntp(unix_seconds: i64) -> f64 {
    (unix_seconds + NTP_UNIX_OFFSET_SECONDS) as f64
}

/// Derive an NTP timestamp from a `YYYYDDD` date and a decimal-hour time.
///
/// The hour offset is resolved to microseconds and the resulting UTC datetime
/// is truncated to whole seconds. Day 0 and hour values past 24 roll over
/// into the neighbouring days rather than failing.
///
/// # Errors
///
/// Returns [`TimestampError`] when either string is not numeric or the result
/// leaves the calendar range.
pub fn derive_timestamp(date: &str, time: &str) -> Result<f64, TimestampError> {
    let invalid_date = || TimestampError::InvalidDate(date.to_string());

    let year: i32 = char_slice(date, 0, 4)
        .parse()
        .map_err(|_| invalid_date())?;
    let day_of_year: i64 = char_slice(date, 4, 7)
        .parse()
        .map_err(|_| invalid_date())?;

    let hours: f64 = time
        .trim()
        .parse()
        .ok()
        .filter(|hours: &f64| hours.is_finite())
        .ok_or_else(|| TimestampError::InvalidTime(time.to_string()))?;

    let out_of_range = || TimestampError::OutOfRange {
        date: date.to_string(),
        hours,
    };

    let year_start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(invalid_date)?
        .and_time(NaiveTime::MIN);

    // `as` saturates; anything that large fails the checked adds below.
    let micros = (hours * MICROS_PER_HOUR).round() as i64;
    let offset = TimeDelta::try_days(day_of_year - 1)
        .and_then(|days| days.checked_add(&TimeDelta::microseconds(micros)))
        .ok_or_else(out_of_range)?;

    let civil = year_start
        .checked_add_signed(offset)
        .ok_or_else(out_of_range)?;

    Ok(unix_to_ntp(civil.and_utc().timestamp()))
}
