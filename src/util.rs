use crate::error::{GlocError, Result};
use chrono::{DateTime, Utc};
use gix::ObjectId;

pub fn month_key(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m").to_string()
}

pub fn day_key(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

pub fn short_id(id: &ObjectId) -> String {
    id.to_string().chars().take(7).collect()
}

pub fn timestamp_from_secs(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| GlocError::InvalidDate(format!("Invalid timestamp: {secs}")))
}
