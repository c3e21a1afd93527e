//! Serde adapters mapping `NaiveDate` onto Arrow's `Date32` representation
//!
//! Dates travel through `serde_arrow` as days since 1970-01-01.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

#[must_use]
pub fn to_epoch_days(date: NaiveDate) -> i32 {
    use chrono::Datelike;
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

#[must_use]
pub fn from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
}

pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i32(to_epoch_days(*date))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let days = i32::deserialize(deserializer)?;
    from_epoch_days(days)
        .ok_or_else(|| serde::de::Error::custom(format!("date {days} days from epoch out of range")))
}
