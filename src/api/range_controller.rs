use tracing::{debug, trace};

use crate::core::{Bound, TimeRange, TimeRangeMode, wire};
use crate::error::PickerResult;
use crate::extensions::RangeNotification;
use crate::form::{FieldHandle, FormHandle};

use super::{RangeController, RangeEvent};

impl<F: FieldHandle, G: FormHandle> RangeController<F, G> {
    /// Routes one user input to its handler. Runs to completion before
    /// returning; errors from range arithmetic are propagated untouched.
    pub fn dispatch(&mut self, event: RangeEvent) -> PickerResult<()> {
        trace!(?event, mode = %self.mode, "dispatch range event");
        match event {
            RangeEvent::BoundEdited { bound } => {
                self.on_bound_edited(bound);
                Ok(())
            }
            RangeEvent::UnitSelected { unit } => {
                if unit.is_custom() {
                    // The selector now reads custom; the bounds stay as they are.
                    let previous = self.switch_mode(TimeRangeMode::Custom);
                    self.notify_mode_change(previous);
                }
                self.set_range(unit)
            }
            RangeEvent::StepRequested { delta } => self.move_range(delta, self.mode),
        }
    }

    /// A direct edit of either bound always wins over unit derivation: the
    /// mode drops to custom and the other bound is left alone.
    pub fn on_bound_edited(&mut self, bound: Bound) {
        if !self.mode.is_custom() {
            debug!(?bound, previous = %self.mode, "manual bound edit, switching to custom");
        }
        let previous = self.switch_mode(TimeRangeMode::Custom);
        self.notify_mode_change(previous);
    }

    /// Selects a named unit and rewrites both bounds as `[anchor, anchor + 1 unit)`.
    ///
    /// The anchor is the current start bound, or "now" (truncated to the
    /// second) when the start is empty. Selecting custom is a no-op.
    pub fn set_range(&mut self, unit: TimeRangeMode) -> PickerResult<()> {
        if unit.is_custom() {
            trace!("custom selected, bounds left untouched");
            return Ok(());
        }

        let anchor = match wire::deserialize(self.from_field.get().as_deref())? {
            Some(from) => from,
            None => wire::truncate_to_second(self.clock.now()),
        };
        let range = TimeRange::anchored(anchor, unit)?;

        let previous = self.switch_mode(unit);
        self.write_bounds(range);
        self.notify_mode_change(previous);
        self.notify(RangeNotification::BoundsChanged { range });
        debug!(%unit, anchor = %wire::serialize_instant(&anchor), "unit selected");
        Ok(())
    }

    /// Steps to the previous range of the current unit.
    pub fn step_backward(&mut self) -> PickerResult<()> {
        self.dispatch(RangeEvent::StepRequested { delta: -1 })
    }

    /// Steps to the next range of the current unit.
    pub fn step_forward(&mut self) -> PickerResult<()> {
        self.dispatch(RangeEvent::StepRequested { delta: 1 })
    }

    /// Shifts the start by `delta` units and re-derives the end. Does nothing
    /// in custom mode or without a start bound. Never changes the mode.
    fn move_range(&mut self, delta: i64, unit: TimeRangeMode) -> PickerResult<()> {
        if unit.is_custom() {
            trace!(delta, "step ignored in custom mode");
            return Ok(());
        }

        let from = wire::deserialize(self.from_field.get().as_deref())?;
        let Some(range) = TimeRange::new(from, None).shifted(delta, unit)? else {
            trace!(delta, %unit, "step ignored without a start bound");
            return Ok(());
        };

        self.write_bounds(range);
        self.notify(RangeNotification::BoundsChanged { range });
        debug!(delta, %unit, "range stepped");
        Ok(())
    }

    fn write_bounds(&mut self, range: TimeRange) {
        let (from, to) = range.serialized();
        self.from_field.set(from.as_deref());
        self.to_field.set(to.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::api::{RangeController, RangePickerConfig};
    use crate::core::{FixedClock, TimeRangeMode};
    use crate::error::PickerError;
    use crate::form::{FieldHandle, MemoryField, MemoryForm};

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .expect("valid date")
    }

    fn controller() -> RangeController<MemoryField, MemoryForm> {
        RangeController::in_memory(RangePickerConfig::default())
            .expect("controller init")
            .with_clock(FixedClock(utc(2024, 6, 1)))
    }

    fn bounds(controller: &RangeController<MemoryField, MemoryForm>) -> (Option<String>, Option<String>) {
        (controller.from_value(), controller.to_value())
    }

    #[test]
    fn move_range_with_custom_unit_is_noop() {
        let mut controller = controller();
        controller.from_field.edit(Some("2024-01-15T00:00:00Z"));
        controller.to_field.edit(Some("2024-03-01T00:00:00Z"));

        controller
            .move_range(1, TimeRangeMode::Custom)
            .expect("custom step is a no-op");
        assert_eq!(
            bounds(&controller),
            (
                Some("2024-01-15T00:00:00Z".to_owned()),
                Some("2024-03-01T00:00:00Z".to_owned())
            )
        );
    }

    #[test]
    fn move_range_without_start_is_noop() {
        let mut controller = controller();
        controller.to_field.edit(Some("2024-03-01T00:00:00Z"));

        controller
            .move_range(1, TimeRangeMode::Day)
            .expect("missing anchor is a no-op");
        assert_eq!(
            bounds(&controller),
            (None, Some("2024-03-01T00:00:00Z".to_owned()))
        );
    }

    #[test]
    fn move_range_uses_given_unit_and_keeps_mode() {
        let mut controller = controller();
        controller.from_field.edit(Some("2024-01-15T00:00:00Z"));

        controller
            .move_range(2, TimeRangeMode::Week)
            .expect("step two weeks");
        assert_eq!(
            bounds(&controller),
            (
                Some("2024-01-29T00:00:00Z".to_owned()),
                Some("2024-02-05T00:00:00Z".to_owned())
            )
        );
        assert_eq!(controller.mode(), TimeRangeMode::Custom);
    }

    #[test]
    fn move_range_propagates_malformed_start() {
        let mut controller = controller();
        controller.from_field.set(Some("15/01/2024"));

        let err = controller
            .move_range(1, TimeRangeMode::Month)
            .expect_err("malformed start must propagate");
        assert!(matches!(err, PickerError::MalformedTimestamp { .. }));
        assert_eq!(controller.to_value(), None);
    }
}
