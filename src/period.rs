use std::fmt::{Debug, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::prelude::*;

/// A booked period of time: a pair of naive (timezone-less) boundaries.
#[derive(
    Copy, Clone, Eq, PartialEq, derive_more::Display, serde::Deserialize, serde::Serialize,
)]
#[display("{start}..{end}")]
pub struct Interval {
    /// Inclusive.
    pub start: NaiveDateTime,

    /// Exclusive.
    pub end: NaiveDateTime,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl Interval {
    /// Validated constructor.
    ///
    /// Equal boundaries are allowed (a degenerate, empty period).
    pub fn try_new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        ensure!(start <= end, "invalid interval: {start} is after {end}");
        Ok(Self { start, end })
    }

    /// Invariant: `start <= end` must already hold.
    pub(crate) const fn new_unchecked(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(self, instant: NaiveDateTime) -> bool {
        (self.start <= instant) && (instant < self.end)
    }

    /// Date-only projection of the boundaries.
    pub fn dates(self) -> (NaiveDate, NaiveDate) {
        (self.start.date(), self.end.date())
    }

    /// Time-of-day projection of the boundaries.
    pub fn times(self) -> (NaiveTime, NaiveTime) {
        (self.start.time(), self.end.time())
    }
}

/// A period-like object: anything exposing start and end timestamps.
///
/// Reservations and their occurrences implement this so that they can take
/// part in overlap computations without being converted to [`Interval`]
/// first.
pub trait Period {
    fn start_dt(&self) -> NaiveDateTime;
    fn end_dt(&self) -> NaiveDateTime;
}

impl Period for Interval {
    fn start_dt(&self) -> NaiveDateTime {
        self.start
    }

    fn end_dt(&self) -> NaiveDateTime {
        self.end
    }
}

impl Period for (NaiveDateTime, NaiveDateTime) {
    fn start_dt(&self) -> NaiveDateTime {
        self.0
    }

    fn end_dt(&self) -> NaiveDateTime {
        self.1
    }
}
