pub mod calendar;
pub mod clock;
pub mod mode;
pub mod range;
pub mod wire;

pub use calendar::add_units;
pub use clock::{Clock, FixedClock, SystemClock};
pub use mode::{Bound, TimeRangeMode};
pub use range::TimeRange;
