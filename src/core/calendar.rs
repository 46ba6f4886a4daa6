use chrono::{DateTime, Datelike, Days, Months, Utc};

use crate::core::TimeRangeMode;
use crate::error::{PickerError, PickerResult};

/// Adds `delta` whole units of `unit` to `instant`.
///
/// Day and week steps move by calendar days, month and year steps by calendar
/// months. When the target month is shorter than the source day-of-month the
/// result is clamped to the last day of that month (Jan 31 + 1 month lands on
/// Feb 28/29), which is chrono's month arithmetic.
///
/// Results outside years 0000..=9999 have no four-digit wire form and are
/// reported as [`PickerError::OutOfRange`].
pub fn add_units(
    instant: DateTime<Utc>,
    delta: i64,
    unit: TimeRangeMode,
) -> PickerResult<DateTime<Utc>> {
    let out_of_range = || PickerError::OutOfRange {
        instant,
        delta,
        unit,
    };

    let shifted = match unit {
        TimeRangeMode::Custom => return Err(PickerError::NoCalendarUnit),
        TimeRangeMode::Day => shift_days(instant, delta),
        TimeRangeMode::Week => delta
            .checked_mul(7)
            .and_then(|days| shift_days(instant, days)),
        TimeRangeMode::Month => shift_months(instant, delta),
        TimeRangeMode::Year => delta
            .checked_mul(12)
            .and_then(|months| shift_months(instant, months)),
    };

    shifted
        .filter(|shifted| WIRE_YEARS.contains(&shifted.year()))
        .ok_or_else(out_of_range)
}

const WIRE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

fn shift_days(instant: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        instant.checked_add_days(magnitude)
    } else {
        instant.checked_sub_days(magnitude)
    }
}

fn shift_months(instant: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        instant.checked_add_months(magnitude)
    } else {
        instant.checked_sub_months(magnitude)
    }
}
