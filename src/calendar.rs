//! Calendar arithmetic helpers.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

pub fn is_weekend(date: impl Datelike) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The first working day at or after the given instant, at midnight.
pub fn next_work_day(from: NaiveDateTime) -> NaiveDateTime {
    skip_weekend(from.date()).and_time(NaiveTime::MIN)
}

/// The next calendar day, advanced past a weekend, keeping the time of day.
pub fn next_day_skip_if_weekend(from: NaiveDateTime) -> NaiveDateTime {
    skip_weekend(from.date() + Days::new(1)).and_time(from.time())
}

fn skip_weekend(mut date: NaiveDate) -> NaiveDate {
    while is_weekend(date) {
        date = date + Days::new(1);
    }
    date
}

/// Which occurrence of its weekday within the month the given day is.
///
/// If the day is a Friday, this answers: which Friday of the month is it,
/// 1 through 5.
pub fn week_number_in_month(date: impl Datelike) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Iterates the dates from `start` through `end`, inclusive.
pub fn date_span(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors((start <= end).then_some(start), move |date| {
        (*date < end).then(|| *date + Days::new(1))
    })
}

/// Signed time-of-day difference, `end - start`.
pub fn time_diff(start: NaiveTime, end: NaiveTime) -> TimeDelta {
    end - start
}

/// A uniformly random instant in `[start, end)`, at second granularity.
///
/// A degenerate range yields its start.
pub fn random_datetime(start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return start;
    }
    start + TimeDelta::seconds(fastrand::i64(0..seconds))
}

/// A uniformly random date in `[start, end)`.
pub fn random_date(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    random_datetime(start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)).date()
}
