use serde::{Deserialize, Serialize};

use crate::core::{Bound, TimeRangeMode};

/// User input routed into [`super::RangeController::dispatch`].
///
/// Widget adapters translate toolkit signals into these commands so the
/// controller does not depend on any event system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeEvent {
    /// The user typed into, or picked a date for, one of the bound inputs.
    BoundEdited { bound: Bound },
    /// The user chose an entry in the unit selector.
    UnitSelected { unit: TimeRangeMode },
    /// The user pressed a step button; `-1` is previous, `+1` is next.
    StepRequested { delta: i64 },
}
