//! Period overlap computation.
//!
//! A pair of periods overlaps when both their date ranges and their
//! time-of-day ranges overlap, each checked independently. A booking that
//! spans several days is treated as the same daily time slot repeated over
//! its date span, not as one contiguous datetime range. Recurring bookings
//! rely on this, so the separable model must not be replaced with a true
//! datetime-range intersection.

use std::cmp::{max, min};

use chrono::NaiveDateTime;

use crate::period::{Interval, Period};

/// Returns true if the periods overlap.
///
/// Both the dates and the times must overlap. Dates compare inclusively,
/// times strictly: two periods that merely touch at a time boundary (one
/// ends at 10:00, the other starts at 10:00) do not overlap.
pub fn periods_overlap(first: &impl Period, second: &impl Period) -> bool {
    periods_overlap_bounds(first.start_dt(), first.end_dt(), second.start_dt(), second.end_dt())
}

/// The four-boundary shape of [`periods_overlap`].
pub fn periods_overlap_bounds(
    start_1: NaiveDateTime,
    end_1: NaiveDateTime,
    start_2: NaiveDateTime,
    end_2: NaiveDateTime,
) -> bool {
    if end_1.date() < start_2.date() || end_2.date() < start_1.date() {
        return false;
    }
    if end_1.time() <= start_2.time() || end_2.time() <= start_1.time() {
        return false;
    }
    true
}

/// Returns the common part of the two periods, or `None`.
///
/// The result is assembled from the overlapping date range and the
/// overlapping time-of-day range separately, consistent with
/// [`periods_overlap`].
pub fn overlap(first: &impl Period, second: &impl Period) -> Option<Interval> {
    overlap_bounds(first.start_dt(), first.end_dt(), second.start_dt(), second.end_dt())
}

/// The four-boundary shape of [`overlap`].
pub fn overlap_bounds(
    start_1: NaiveDateTime,
    end_1: NaiveDateTime,
    start_2: NaiveDateTime,
    end_2: NaiveDateTime,
) -> Option<Interval> {
    if !periods_overlap_bounds(start_1, end_1, start_2, end_2) {
        return None;
    }
    let (from_date, to_date) =
        range_overlap(start_1.date(), end_1.date(), start_2.date(), end_2.date());
    let (from_time, to_time) =
        range_overlap(start_1.time(), end_1.time(), start_2.time(), end_2.time());
    // The date ranges overlap inclusively and the time ranges strictly, so
    // the combined boundaries are ordered.
    Some(Interval::new_unchecked(from_date.and_time(from_time), to_date.and_time(to_time)))
}

/// True 1-D intersection of two ranges: `None` when they are disjoint.
///
/// Touching ranges count as overlapping here, unlike the time check in
/// [`periods_overlap`].
pub fn span_overlap<T: Ord>(start_1: T, end_1: T, start_2: T, end_2: T) -> Option<(T, T)> {
    let (start, end) = range_overlap(start_1, end_1, start_2, end_2);
    (start <= end).then_some((start, end))
}

/// Intersection of two 1-D ranges already known to overlap.
fn range_overlap<T: Ord>(lo_1: T, hi_1: T, lo_2: T, hi_2: T) -> (T, T) {
    (max(lo_1, lo_2), min(hi_1, hi_2))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn interval(start: NaiveDateTime, end: NaiveDateTime) -> Interval {
        Interval::try_new(start, end).unwrap()
    }

    #[test]
    fn test_symmetry() {
        let first = interval(dt(1, 9), dt(1, 11));
        let second = interval(dt(1, 10), dt(1, 12));
        assert_eq!(periods_overlap(&first, &second), periods_overlap(&second, &first));

        let disjoint = interval(dt(3, 9), dt(3, 11));
        assert_eq!(periods_overlap(&first, &disjoint), periods_overlap(&disjoint, &first));
    }

    #[test]
    fn test_reflexivity() {
        let first = interval(dt(1, 9), dt(2, 11));
        assert!(periods_overlap(&first, &first));
    }

    #[test]
    fn test_touching_time_boundary_does_not_overlap() {
        let first = interval(dt(1, 9), dt(1, 10));
        let second = interval(dt(1, 10), dt(1, 11));
        assert!(!periods_overlap(&first, &second));
        assert_eq!(overlap(&first, &second), None);
    }

    #[test]
    fn test_touching_date_boundary_overlaps() {
        // Dates compare inclusively: sharing a calendar day is enough.
        let first = interval(dt(1, 9), dt(2, 11));
        let second = interval(dt(2, 10), dt(3, 12));
        assert!(periods_overlap(&first, &second));
    }

    #[test]
    fn test_partial_overlap() {
        let first = interval(dt(1, 9), dt(1, 11));
        let second = interval(dt(1, 10), dt(1, 12));
        assert!(periods_overlap(&first, &second));
        assert_eq!(overlap(&first, &second), Some(interval(dt(1, 10), dt(1, 11))));
    }

    #[test]
    fn test_nested_overlap() {
        let first = interval(dt(1, 9), dt(1, 12));
        let second = interval(dt(1, 10), dt(1, 11));
        assert_eq!(overlap(&first, &second), Some(interval(dt(1, 10), dt(1, 11))));
        assert_eq!(overlap(&second, &first), Some(interval(dt(1, 10), dt(1, 11))));
    }

    #[test]
    fn test_bounds_shape_agrees_with_period_shape() {
        let first = interval(dt(1, 9), dt(1, 11));
        let second = interval(dt(1, 10), dt(1, 12));
        assert_eq!(
            periods_overlap(&first, &second),
            periods_overlap_bounds(dt(1, 9), dt(1, 11), dt(1, 10), dt(1, 12)),
        );
        assert_eq!(
            overlap(&first, &second),
            overlap_bounds(dt(1, 9), dt(1, 11), dt(1, 10), dt(1, 12)),
        );
    }

    #[test]
    fn test_raw_pair_periods() {
        // Bare boundary pairs are period-like too.
        assert!(periods_overlap(&(dt(1, 9), dt(1, 11)), &(dt(1, 10), dt(1, 12))));
    }

    #[test]
    fn test_multi_day_overlap_is_synthetic() {
        // The result combines the date overlap and the time overlap
        // independently; it is not a geometric intersection.
        let first = interval(dt(1, 9), dt(3, 11));
        let second = interval(dt(2, 10), dt(4, 12));
        assert_eq!(overlap(&first, &second), Some(interval(dt(2, 10), dt(3, 11))));
    }

    #[test]
    fn test_separable_model_misses_contained_booking() {
        // Known limitation of the separable model: the second period lies
        // inside the first one's continuous datetime span, but its daily
        // time slot is disjoint from the first one's, so no overlap is
        // reported. This is the expected behavior, not a regression.
        let first = interval(dt(1, 9), dt(5, 10));
        let second = interval(dt(2, 14), dt(2, 15));
        assert!(!periods_overlap(&first, &second));
    }

    #[test]
    fn test_span_overlap() {
        assert_eq!(span_overlap(1, 5, 3, 8), Some((3, 5)));
        assert_eq!(span_overlap(3, 8, 1, 5), Some((3, 5)));
        // Touching spans intersect in a single point.
        assert_eq!(span_overlap(1, 5, 5, 8), Some((5, 5)));
        assert_eq!(span_overlap(1, 2, 5, 8), None);
    }
}
