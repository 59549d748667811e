//! HTML fragments swapped in by htmx.
//!
//! Every decode or clear response carries a complete snapshot of the
//! display regions: the status line as the primary swap target plus
//! out-of-band copies of the editor overlay and both panels. Rendering
//! whole regions each time is what keeps partial states impossible.

use htmlescape::encode_minimal;

use super::highlight::highlight_token;
use crate::claims::{TimeChip, time_chips};
use crate::decoder::{ClaimMap, DecodeError, DecodedToken};
use crate::status::StatusMessage;

/// Shown in the header panel when nothing is decoded.
pub const HEADER_PLACEHOLDER: &str = "No header data available";

/// Shown in the payload panel when nothing is decoded.
pub const PAYLOAD_PLACEHOLDER: &str = "No payload data available";

/// The status line element. Never rendered out-of-band; it is the swap
/// target of every fragment request.
pub fn status_line(status: &StatusMessage) -> String {
    let class = if status.error {
        "status-line status-error"
    } else {
        "status-line status-ok"
    };
    format!(
        r#"<p id="status-line" class="{class}" role="status">{}</p>"#,
        encode_minimal(&status.text)
    )
}

/// The colored mirror behind the editor textarea.
pub fn token_overlay(raw: &str, oob: bool) -> String {
    format!(
        r#"<pre id="token-overlay" class="editor-overlay" aria-hidden="true"{}>{}</pre>"#,
        oob_attr(oob),
        highlight_token(raw)
    )
}

/// The header panel body: pretty JSON when decoded, placeholder otherwise.
pub fn header_panel(header: Option<&ClaimMap>, oob: bool) -> String {
    match header {
        Some(map) => format!(
            r#"<div id="header-view" class="panel-view" data-state="ready"{}><pre class="panel-json">{}</pre></div>"#,
            oob_attr(oob),
            encode_minimal(&pretty_json(map))
        ),
        None => format!(
            r#"<div id="header-view" class="panel-view" data-state="empty"{}><p class="panel-placeholder">{HEADER_PLACEHOLDER}</p></div>"#,
            oob_attr(oob)
        ),
    }
}

/// The payload panel body, with time chips under the JSON when the decoded
/// claims carry them.
pub fn payload_panel(payload: Option<&ClaimMap>, oob: bool) -> String {
    match payload {
        Some(map) => format!(
            r#"<div id="payload-view" class="panel-view" data-state="ready"{}><pre class="panel-json">{}</pre>{}</div>"#,
            oob_attr(oob),
            encode_minimal(&pretty_json(map)),
            chip_row(&time_chips(map))
        ),
        None => format!(
            r#"<div id="payload-view" class="panel-view" data-state="empty"{}><p class="panel-placeholder">{PAYLOAD_PLACEHOLDER}</p></div>"#,
            oob_attr(oob)
        ),
    }
}

/// Full snapshot for a decode attempt.
pub fn decode_response(raw: &str, result: &Result<DecodedToken, DecodeError>) -> String {
    let status = StatusMessage::from_decode(result);
    let decoded = result.as_ref().ok();
    [
        status_line(&status),
        token_overlay(raw, true),
        header_panel(decoded.map(|d| &d.header), true),
        payload_panel(decoded.map(|d| &d.payload), true),
    ]
    .join("\n")
}

/// Full snapshot for the clear action: neutral status, empty overlay,
/// placeholder panels.
pub fn clear_response() -> String {
    [
        status_line(&StatusMessage::cleared()),
        token_overlay("", true),
        header_panel(None, true),
        payload_panel(None, true),
    ]
    .join("\n")
}

/// Pretty-print a claim map with the stable two-space indentation the copy
/// buttons also rely on.
pub fn pretty_json(map: &ClaimMap) -> String {
    serde_json::to_string_pretty(map).unwrap_or_default()
}

fn chip_row(chips: &[TimeChip]) -> String {
    if chips.is_empty() {
        return String::new();
    }
    let items: String = chips
        .iter()
        .map(|chip| {
            format!(
                r#"<div class="time-chip"><span class="chip-label">{}</span>{}</div>"#,
                chip.label, chip.formatted
            )
        })
        .collect();
    format!(r#"<div class="chip-row">{items}</div>"#)
}

fn oob_attr(oob: bool) -> &'static str {
    if oob { r#" hx-swap-oob="true""# } else { "" }
}
