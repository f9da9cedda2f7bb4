//! The "de facto standard" date and datetime renderings of the booking
//! module.

use chrono::{NaiveDate, NaiveDateTime};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %d/%m/%Y").to_string()
}

pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%a %d/%m/%Y %H:%M").to_string()
}
