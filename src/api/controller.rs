use tracing::debug;

use crate::core::{Clock, SystemClock, TimeRange, TimeRangeMode, wire};
use crate::error::PickerResult;
use crate::extensions::RangeObserver;
use crate::form::{FieldHandle, FieldKind, FormHandle, MemoryField, MemoryForm};

use super::RangePickerConfig;

/// Main facade consumed by host applications.
///
/// `RangeController` owns the selection mode and keeps the two bound fields
/// consistent with it under bound edits, unit selections and steps. Field
/// values are the source of truth for the bounds; they are read back and
/// parsed whenever range arithmetic needs them.
pub struct RangeController<F: FieldHandle, G: FormHandle> {
    pub(super) config: RangePickerConfig,
    pub(super) from_field: F,
    pub(super) to_field: F,
    pub(super) form: G,
    pub(super) mode: TimeRangeMode,
    /// Mode at the last restore or `clear_dirty`, for dirty tracking.
    pub(super) clean_mode: TimeRangeMode,
    pub(super) clock: Box<dyn Clock>,
    pub(super) observers: Vec<Box<dyn RangeObserver>>,
}

impl<F: FieldHandle, G: FormHandle> RangeController<F, G> {
    /// Binds a controller to its collaborators and applies the configured
    /// labels. The initial mode is custom.
    pub fn new(
        mut from_field: F,
        mut to_field: F,
        form: G,
        config: RangePickerConfig,
    ) -> PickerResult<Self> {
        config.validate()?;
        from_field.set_label(&config.from_label);
        to_field.set_label(&config.to_label);
        debug!(
            from_field = %config.from_field,
            to_field = %config.to_field,
            restore_policy = ?config.restore_mode_policy,
            "range controller attached"
        );

        Ok(Self {
            config,
            from_field,
            to_field,
            form,
            mode: TimeRangeMode::Custom,
            clean_mode: TimeRangeMode::Custom,
            clock: Box::new(SystemClock),
            observers: Vec::new(),
        })
    }

    /// Replaces the clock used to anchor unit selections on an empty start.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn config(&self) -> &RangePickerConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> TimeRangeMode {
        self.mode
    }

    /// Raw wire value of the start field.
    #[must_use]
    pub fn from_value(&self) -> Option<String> {
        self.from_field.get()
    }

    /// Raw wire value of the end field.
    #[must_use]
    pub fn to_value(&self) -> Option<String> {
        self.to_field.get()
    }

    /// Parses both bound fields.
    pub fn range(&self) -> PickerResult<TimeRange> {
        let from = wire::deserialize(self.from_field.get().as_deref())?;
        let to = wire::deserialize(self.to_field.get().as_deref())?;
        Ok(TimeRange::new(from, to))
    }

    #[must_use]
    pub fn from_field(&self) -> &F {
        &self.from_field
    }

    #[must_use]
    pub fn to_field(&self) -> &F {
        &self.to_field
    }

    #[must_use]
    pub fn form(&self) -> &G {
        &self.form
    }

    /// Releases the collaborators when the host tears the picker down.
    #[must_use]
    pub fn into_parts(self) -> (F, F, G) {
        (self.from_field, self.to_field, self.form)
    }
}

impl RangeController<MemoryField, MemoryForm> {
    /// Builds a headless controller over a fresh in-memory form holding the
    /// two date-time bound fields.
    pub fn in_memory(config: RangePickerConfig) -> PickerResult<Self> {
        config.validate()?;
        let mut form = MemoryForm::new();
        let from = form.add_field(config.from_field.clone(), FieldKind::DateTime);
        let to = form.add_field(config.to_field.clone(), FieldKind::DateTime);
        Self::new(from, to, form, config)
    }
}
