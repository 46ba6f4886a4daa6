use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::TimeRangeMode;
use crate::error::{PickerError, PickerResult};
use crate::extensions::RangeNotification;
use crate::form::{FieldHandle, FormHandle, FormSnapshot};

use super::RangeController;

pub const PICKER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Persistable picker state (a saved search's time filter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSnapshot {
    pub mode: TimeRangeMode,
    #[serde(default)]
    pub values: FormSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PickerSnapshot,
}

/// Shapes accepted when reading a snapshot back.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Versioned(PickerSnapshotJsonContractV1),
    Bare(PickerSnapshot),
}

impl PickerSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PickerResult<String> {
        let contract = PickerSnapshotJsonContractV1 {
            schema_version: PICKER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&contract)
            .map_err(|e| PickerError::InvalidData(format!("failed to write picker snapshot: {e}")))
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PickerResult<Self> {
        let payload: SnapshotPayload = serde_json::from_str(input)
            .map_err(|e| PickerError::InvalidData(format!("failed to read picker snapshot: {e}")))?;
        match payload {
            SnapshotPayload::Bare(snapshot) => Ok(snapshot),
            SnapshotPayload::Versioned(PickerSnapshotJsonContractV1 {
                schema_version: PICKER_SNAPSHOT_JSON_SCHEMA_V1,
                snapshot,
            }) => Ok(snapshot),
            SnapshotPayload::Versioned(contract) => Err(PickerError::InvalidData(format!(
                "picker snapshot schema version {} is not supported",
                contract.schema_version
            ))),
        }
    }
}

impl<F: FieldHandle, G: FormHandle> RangeController<F, G> {
    /// Captures field values and mode.
    #[must_use]
    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            mode: self.mode,
            values: self.form.get(),
        }
    }

    /// Restores field values and the saved mode verbatim. Unlike
    /// [`Self::set`], the mode always comes from the snapshot.
    pub fn restore_snapshot(&mut self, snapshot: &PickerSnapshot) {
        self.form.set(Some(&snapshot.values));
        let previous = self.switch_mode(snapshot.mode);
        self.clean_mode = self.mode;
        debug!(mode = %self.mode, "picker snapshot restored");
        self.notify_mode_change(previous);
        self.notify(RangeNotification::Restored);
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> PickerResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
