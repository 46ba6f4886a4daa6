mod controller;
mod events;
mod form_controller;
mod json_contract;
mod observer_registry;
mod picker_config;
mod range_controller;

pub use controller::RangeController;
pub use events::RangeEvent;
pub use json_contract::{
    PICKER_SNAPSHOT_JSON_SCHEMA_V1, PickerSnapshot, PickerSnapshotJsonContractV1,
};
pub use picker_config::{RangePickerConfig, RestoreModePolicy};
