//! timerange-picker: headless date-time range picker controller.
//!
//! A picker holds a `[from, to)` pair of wire-format timestamps and a
//! selection mode. Bounds are either typed by hand (custom mode) or derived
//! from a calendar unit that can be stepped backward and forward. Rendering is
//! left to form collaborators behind the traits in [`form`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod form;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{RangeController, RangeEvent, RangePickerConfig};
pub use error::{PickerError, PickerResult};
