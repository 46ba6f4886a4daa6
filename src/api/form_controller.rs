use tracing::{debug, warn};

use crate::core::TimeRangeMode;
use crate::extensions::RangeNotification;
use crate::form::{FieldHandle, FormHandle, FormSnapshot};

use super::{RangeController, RestoreModePolicy};

impl<F: FieldHandle, G: FormHandle> RangeController<F, G> {
    /// Full field-value snapshot, including the current mode under the
    /// configured mode field.
    #[must_use]
    pub fn get(&self) -> FormSnapshot {
        let mut snapshot = self.form.get();
        snapshot.insert(
            self.config.mode_field.clone(),
            self.mode.as_str().to_owned(),
        );
        snapshot
    }

    /// Restores a snapshot into the form. `None` empties every field.
    ///
    /// The mode is handled by [`RestoreModePolicy`]; bounds are never
    /// recomputed from it.
    pub fn set(&mut self, data: Option<&FormSnapshot>) {
        let previous = self.restore(data);
        self.notify_mode_change(previous);
        self.notify(RangeNotification::Restored);
    }

    /// Empties every field. Equivalent to `set(None)`.
    pub fn clear(&mut self) {
        let previous = self.restore(None);
        self.notify_mode_change(previous);
        self.notify(RangeNotification::Cleared);
    }

    /// Whether any field, or the mode, changed since the last restore or
    /// [`Self::clear_dirty`].
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.form.is_dirty() || self.mode != self.clean_mode
    }

    pub fn clear_dirty(&mut self) {
        self.form.clear_dirty();
        self.clean_mode = self.mode;
    }

    /// Whether every field holds an acceptable value. Failure is reported as
    /// `false`, never as an error.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.form.validate()
    }

    /// Writes the snapshot and applies the restore policy. Returns the mode
    /// held before the restore; observers are told by the caller.
    fn restore(&mut self, data: Option<&FormSnapshot>) -> TimeRangeMode {
        self.form.set(data);

        let previous = self.mode;
        match self.config.restore_mode_policy {
            RestoreModePolicy::Preserve => self.flag_unaligned_restore(),
            RestoreModePolicy::ResetToCustom => {
                self.switch_mode(TimeRangeMode::Custom);
            }
            RestoreModePolicy::FromSnapshot => {
                let mode = self.snapshot_mode(data);
                self.switch_mode(mode);
            }
        }

        self.clean_mode = self.mode;
        debug!(
            restored = data.is_some(),
            mode = %self.mode,
            policy = ?self.config.restore_mode_policy,
            "form restored"
        );
        previous
    }

    fn snapshot_mode(&self, data: Option<&FormSnapshot>) -> TimeRangeMode {
        let Some(name) = data.and_then(|data| data.get(&self.config.mode_field)) else {
            return TimeRangeMode::Custom;
        };
        name.parse().unwrap_or_else(|err| {
            warn!(error = %err, "restored snapshot has an unknown mode, using custom");
            TimeRangeMode::Custom
        })
    }

    // The retained mode may no longer describe the restored bounds.
    fn flag_unaligned_restore(&self) {
        if self.mode.is_custom() {
            return;
        }
        let aligned = self
            .range()
            .is_ok_and(|range| range.is_aligned_to(self.mode));
        if !aligned {
            debug!(
                mode = %self.mode,
                "restored bounds do not span one unit of the retained mode"
            );
        }
    }
}
