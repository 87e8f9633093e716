use chrono::{DateTime, Utc};

/// Human-readable slot for the interview drill-down modal.
pub fn display_slot(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M UTC").to_string()
}
