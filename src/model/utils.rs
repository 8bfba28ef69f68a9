use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Duration as ChronoDuration;

static RECORD_SEQ: AtomicU64 = AtomicU64::new(0);

/// Process-unique id for new rows: hex timestamp plus a sequence tail.
#[must_use]
pub fn new_record_id() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let seq = RECORD_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{nanos:x}-{seq:04x}")
}

#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds();

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const WEEK: i64 = 7 * DAY;

    if secs >= WEEK {
        let weeks = secs / WEEK;
        if weeks == 1 {
            "1 week ago".to_string()
        } else {
            format!("{weeks} weeks ago")
        }
    } else if secs >= DAY {
        let days = secs / DAY;
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        }
    } else if secs >= HOUR {
        let hours = secs / HOUR;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        }
    } else if secs >= MINUTE {
        let minutes = secs / MINUTE;
        if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{minutes} minutes ago")
        }
    } else {
        "just now".to_string()
    }
}
