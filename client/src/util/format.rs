//! Display formatting for wave records.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Render a wave timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Falls back to raw Unix seconds if the instant cannot be formatted.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(UtcOffset::UTC);
    utc.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC"))
        .unwrap_or_else(|_| utc.unix_timestamp().to_string())
}
