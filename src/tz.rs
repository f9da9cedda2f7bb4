//! Naive local time to naive UTC conversion and back.

use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};

use crate::prelude::*;

/// Converts a naive datetime, assumed to be in the machine's local timezone,
/// to naive UTC.
///
/// An ambiguous local time (the repeated hour of a backward DST transition)
/// resolves to the earlier mapping; a nonexistent one is an error.
pub fn to_utc(local: NaiveDateTime) -> Result<NaiveDateTime> {
    match Local.from_local_datetime(&local) {
        LocalResult::Single(mapped) | LocalResult::Ambiguous(mapped, _) => Ok(mapped.naive_utc()),
        LocalResult::None => bail!("nonexistent local time: {local}"),
    }
}

/// Converts a naive UTC datetime to the machine's local timezone.
pub fn from_utc(utc: NaiveDateTime) -> NaiveDateTime {
    Local.from_utc_datetime(&utc).naive_local()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_round_trip() {
        // Midday in January and July stays clear of DST transitions in
        // either hemisphere.
        for month in [1, 7] {
            let local = NaiveDate::from_ymd_opt(2024, month, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            assert_eq!(from_utc(to_utc(local).unwrap()), local);
        }
    }
}
