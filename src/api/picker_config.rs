use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// What restoring a form snapshot does to the selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreModePolicy {
    /// Keep the mode that was active before the restore, even when the
    /// restored bounds do not span one unit of it.
    #[default]
    Preserve,
    /// Treat every restored range as hand-entered.
    ResetToCustom,
    /// Read the mode from the snapshot's mode field; missing or unknown names
    /// fall back to custom.
    FromSnapshot,
}

/// Public picker bootstrap configuration.
///
/// Serializable so hosts can keep picker setup next to the rest of their
/// persisted UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePickerConfig {
    #[serde(default = "default_from_label")]
    pub from_label: String,
    #[serde(default = "default_to_label")]
    pub to_label: String,
    #[serde(default = "default_from_field")]
    pub from_field: String,
    #[serde(default = "default_to_field")]
    pub to_field: String,
    #[serde(default = "default_mode_field")]
    pub mode_field: String,
    #[serde(default)]
    pub restore_mode_policy: RestoreModePolicy,
}

impl Default for RangePickerConfig {
    fn default() -> Self {
        Self {
            from_label: default_from_label(),
            to_label: default_to_label(),
            from_field: default_from_field(),
            to_field: default_to_field(),
            mode_field: default_mode_field(),
            restore_mode_policy: RestoreModePolicy::default(),
        }
    }
}

impl RangePickerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the labels shown next to the two bound inputs.
    #[must_use]
    pub fn with_labels(mut self, from_label: impl Into<String>, to_label: impl Into<String>) -> Self {
        self.from_label = from_label.into();
        self.to_label = to_label.into();
        self
    }

    /// Sets the snapshot keys used for the bounds and the mode.
    #[must_use]
    pub fn with_field_names(
        mut self,
        from_field: impl Into<String>,
        to_field: impl Into<String>,
        mode_field: impl Into<String>,
    ) -> Self {
        self.from_field = from_field.into();
        self.to_field = to_field.into();
        self.mode_field = mode_field.into();
        self
    }

    #[must_use]
    pub fn with_restore_mode_policy(mut self, policy: RestoreModePolicy) -> Self {
        self.restore_mode_policy = policy;
        self
    }

    pub fn validate(&self) -> PickerResult<()> {
        let names = [
            ("from_field", &self.from_field),
            ("to_field", &self.to_field),
            ("mode_field", &self.mode_field),
        ];
        for (key, name) in names {
            if name.trim().is_empty() {
                return Err(PickerError::InvalidConfig(format!("{key} must not be empty")));
            }
        }
        if self.from_field == self.to_field
            || self.from_field == self.mode_field
            || self.to_field == self.mode_field
        {
            return Err(PickerError::InvalidConfig(format!(
                "field names must be distinct: from={:?} to={:?} mode={:?}",
                self.from_field, self.to_field, self.mode_field
            )));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PickerError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PickerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PickerError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_from_label() -> String {
    "From".to_owned()
}

fn default_to_label() -> String {
    "To".to_owned()
}

fn default_from_field() -> String {
    "from".to_owned()
}

fn default_to_field() -> String {
    "to".to_owned()
}

fn default_mode_field() -> String {
    "range".to_owned()
}
