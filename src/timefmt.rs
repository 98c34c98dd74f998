//! Short human-readable labels for note timestamps
//!
//! Recent notes get a relative label ("3d ago", "just now"); anything older
//! than twenty days falls back to an absolute date.

use chrono::{DateTime, Local, Utc};

/// Relative labels switch to absolute dates past this age
const ABSOLUTE_AFTER_DAYS: i64 = 20;

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current time as a fixed-width 13-digit millisecond-epoch string
pub fn timestamp_now() -> String {
    format!("{:013}", now_millis())
}

/// Render a millisecond-epoch timestamp as a short label relative to now
pub fn human_time(epoch_millis: i64) -> String {
    human_time_at(epoch_millis, Utc::now().timestamp_millis())
}

/// Same as [`human_time`] with an explicit "now", so label boundaries are
/// testable without a clock
pub fn human_time_at(epoch_millis: i64, now_millis: i64) -> String {
    let delta_secs = (now_millis - epoch_millis) / 1000;
    let days = delta_secs / 86_400;

    if days > ABSOLUTE_AFTER_DAYS {
        match DateTime::<Utc>::from_timestamp_millis(epoch_millis) {
            Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d").to_string(),
            None => epoch_millis.to_string(),
        }
    } else if days > 0 {
        format!("{}d ago", days)
    } else if delta_secs >= 3600 {
        format!("{}h ago", delta_secs / 3600)
    } else if delta_secs >= 60 {
        format!("{}m ago", delta_secs / 60)
    } else {
        "just now".to_string()
    }
}
