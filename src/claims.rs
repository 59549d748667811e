//! Human-readable rendering of the standard time claims.

use chrono::{DateTime, Local};

use crate::decoder::ClaimMap;

/// Wall-clock format used for every time claim.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A display chip for one time claim, derived at render time and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeChip {
    /// Chip label, including its trailing separator.
    pub label: &'static str,
    /// Claim value formatted as local time.
    pub formatted: String,
}

/// Format Unix seconds as local wall-clock time.
///
/// Returns `None` for values outside the representable range.
pub fn format_unix_seconds(secs: i64) -> Option<String> {
    let utc = DateTime::from_timestamp(secs, 0)?;
    Some(utc.with_timezone(&Local).format(TIME_FORMAT).to_string())
}

/// Derive chips for the standard time claims, expiry first.
///
/// A chip appears only for a claim that is present, numeric and nonzero.
/// Anything else (missing, zero, a string, out of range) yields no chip.
#[allow(clippy::float_cmp)]
pub fn time_chips(payload: &ClaimMap) -> Vec<TimeChip> {
    [("exp", "Expiry: "), ("iat", "Issued: ")]
        .iter()
        .filter_map(|&(claim, label)| {
            let secs = payload.get(claim)?.as_f64()?;
            if secs == 0.0 {
                return None;
            }
            let formatted = format_unix_seconds(secs as i64)?;
            Some(TimeChip { label, formatted })
        })
        .collect()
}
