//! Cosmetic coloring of raw token text.

use htmlescape::encode_minimal;

/// Render the raw token with one style per segment.
///
/// Anything with fewer than three dot-separated segments comes back as
/// escaped plain text. With three or more, the text after the second dot is
/// styled as the signature so no characters are ever dropped. Purely
/// cosmetic: this never judges whether the token decodes.
pub fn highlight_token(raw: &str) -> String {
    let mut parts = raw.splitn(3, '.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature)) => format!(
            concat!(
                r#"<span class="seg-header">{}</span>"#,
                r#"<span class="seg-dot">.</span>"#,
                r#"<span class="seg-payload">{}</span>"#,
                r#"<span class="seg-dot">.</span>"#,
                r#"<span class="seg-signature">{}</span>"#,
            ),
            encode_minimal(header),
            encode_minimal(payload),
            encode_minimal(signature),
        ),
        _ => encode_minimal(raw),
    }
}
