//! Contracts for the form collaborators a range controller drives.
//!
//! The controller never renders anything. It reads and writes bound values
//! through a [`FieldHandle`] per bound and delegates whole-form concerns
//! (snapshots, dirty tracking, validation) to a [`FormHandle`].

mod memory;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::wire;

pub use memory::{MemoryField, MemoryForm};

/// Field name to serialized value. An absent key means the field is empty.
pub type FormSnapshot = IndexMap<String, String>;

/// A single labeled input holding a bound in wire form.
pub trait FieldHandle {
    /// Current value, or `None` when the field is empty.
    fn get(&self) -> Option<String>;
    /// Writes a value; `None` clears the field.
    fn set(&mut self, value: Option<&str>);
    fn set_label(&mut self, text: &str);
}

/// Aggregate view over every field of the picker.
pub trait FormHandle {
    fn get(&self) -> FormSnapshot;
    /// Restores a snapshot; `None` clears every field.
    fn set(&mut self, data: Option<&FormSnapshot>);
    fn is_dirty(&self) -> bool;
    fn clear_dirty(&mut self);
    fn validate(&self) -> bool;
}

/// Value type a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    /// Wire-format timestamp, see [`crate::core::wire`].
    DateTime,
}

impl FieldKind {
    /// Whether `value` is acceptable for this kind of field.
    #[must_use]
    pub fn accepts(self, value: Option<&str>, required: bool) -> bool {
        match value {
            None | Some("") => !required,
            Some(text) => match self {
                Self::Text => true,
                Self::DateTime => wire::parse_instant(text).is_ok(),
            },
        }
    }
}

/// Normalizes a raw field value: empty strings are treated as no value.
pub(crate) fn normalize_value(value: Option<&str>) -> Option<String> {
    value.filter(|text| !text.is_empty()).map(str::to_owned)
}
