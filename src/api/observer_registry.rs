use crate::core::TimeRangeMode;
use crate::error::{PickerError, PickerResult};
use crate::extensions::{RangeContext, RangeNotification, RangeObserver};
use crate::form::{FieldHandle, FormHandle};

use super::RangeController;

impl<F: FieldHandle, G: FormHandle> RangeController<F, G> {
    /// Adds an observer. Ids must be non-empty and unique; observers are
    /// notified in the order they were added.
    pub fn register_observer(&mut self, observer: Box<dyn RangeObserver>) -> PickerResult<()> {
        let id = observer.id();
        if id.is_empty() {
            return Err(PickerError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(id) {
            return Err(PickerError::InvalidData(format!(
                "observer `{id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Removes an observer by id. Returns `true` when one was registered.
    pub fn remove_observer(&mut self, observer_id: &str) -> bool {
        let registered = self.has_observer(observer_id);
        self.observers.retain(|observer| observer.id() != observer_id);
        registered
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    pub(super) fn observer_context(&self) -> RangeContext {
        RangeContext {
            mode: self.mode,
            from: self.from_field.get(),
            to: self.to_field.get(),
        }
    }

    pub(super) fn notify(&mut self, event: RangeNotification) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, &context);
        }
    }

    /// Switches mode without notifying; returns the previous mode so the
    /// caller can report the change once the rest of its state is written.
    pub(super) fn switch_mode(&mut self, mode: TimeRangeMode) -> TimeRangeMode {
        std::mem::replace(&mut self.mode, mode)
    }

    /// Reports `previous -> self.mode` when it is a real change.
    pub(super) fn notify_mode_change(&mut self, previous: TimeRangeMode) {
        let current = self.mode;
        if previous != current {
            self.notify(RangeNotification::ModeChanged { previous, current });
        }
    }
}
