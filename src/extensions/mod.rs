//! Optional hook points live here.
//!
//! Keep extensions observational and avoid coupling them into core paths.

mod observers;

pub use observers::{RangeContext, RangeNotification, RangeObserver};
