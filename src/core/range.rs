use chrono::{DateTime, Utc};

use crate::core::TimeRangeMode;
use crate::core::calendar::add_units;
use crate::core::wire;
use crate::error::PickerResult;

/// Half-open interval `[from, to)`; either bound may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TimeRange {
    #[must_use]
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// One-unit range starting at `anchor`.
    pub fn anchored(anchor: DateTime<Utc>, unit: TimeRangeMode) -> PickerResult<Self> {
        let to = add_units(anchor, 1, unit)?;
        Ok(Self {
            from: Some(anchor),
            to: Some(to),
        })
    }

    /// Moves the start by `delta` units and re-derives the end as one unit
    /// later. Returns `Ok(None)` when there is no start to move.
    pub fn shifted(&self, delta: i64, unit: TimeRangeMode) -> PickerResult<Option<Self>> {
        let Some(from) = self.from else {
            return Ok(None);
        };
        let from = add_units(from, delta, unit)?;
        Self::anchored(from, unit).map(Some)
    }

    /// Whether `to` is exactly one `unit` after `from`.
    ///
    /// Diagnostic only: a range can be aligned to a unit while the picker is
    /// in custom mode.
    #[must_use]
    pub fn is_aligned_to(&self, unit: TimeRangeMode) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => add_units(from, 1, unit).is_ok_and(|end| end == to),
            _ => false,
        }
    }

    /// Bounds in wire form.
    #[must_use]
    pub fn serialized(&self) -> (Option<String>, Option<String>) {
        (wire::serialize(self.from), wire::serialize(self.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn anchored_range_spans_one_unit() {
        let range = TimeRange::anchored(utc(2024, 3, 10), TimeRangeMode::Week).expect("week");
        assert_eq!(range.from, Some(utc(2024, 3, 10)));
        assert_eq!(range.to, Some(utc(2024, 3, 17)));
        assert!(range.is_aligned_to(TimeRangeMode::Week));
        assert!(!range.is_aligned_to(TimeRangeMode::Day));
        assert!(!range.is_aligned_to(TimeRangeMode::Custom));
    }

    #[test]
    fn shifted_without_start_is_none() {
        let range = TimeRange::new(None, Some(utc(2024, 1, 1)));
        assert_eq!(range.shifted(1, TimeRangeMode::Day).expect("no-op"), None);
    }

    #[test]
    fn shifted_rederives_end_from_new_start() {
        // A hand-edited end is discarded by a step.
        let range = TimeRange::new(Some(utc(2024, 1, 15)), Some(utc(2024, 6, 1)));
        let shifted = range
            .shifted(1, TimeRangeMode::Month)
            .expect("shift")
            .expect("has start");
        assert_eq!(shifted.from, Some(utc(2024, 2, 15)));
        assert_eq!(shifted.to, Some(utc(2024, 3, 15)));
    }

    #[test]
    fn empty_range_serializes_to_empty() {
        assert!(TimeRange::empty().is_empty());
        assert_eq!(TimeRange::empty().serialized(), (None, None));
    }
}
