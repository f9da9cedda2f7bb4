//! Scheduling utilities widely used in the room-booking module.

pub mod calendar;
pub mod format;
pub mod overlap;
pub mod period;
pub mod prelude;
pub mod text;
pub mod tz;

pub use self::{
    overlap::{overlap, periods_overlap},
    period::{Interval, Period},
};
