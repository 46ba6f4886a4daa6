use serde::{Deserialize, Serialize};

use crate::core::{TimeRange, TimeRangeMode};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeContext {
    pub mode: TimeRangeMode,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Changes reported to observers after the controller has committed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeNotification {
    ModeChanged {
        previous: TimeRangeMode,
        current: TimeRangeMode,
    },
    BoundsChanged {
        range: TimeRange,
    },
    Restored,
    Cleared,
}

/// Hook interface for hosts that react to range changes (reloading a search,
/// syncing a unit selector widget).
///
/// Observers run synchronously inside the controller call that produced the
/// notification and must not call back into the controller.
pub trait RangeObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: RangeNotification, context: &RangeContext);
}
