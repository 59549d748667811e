//! Decoder for the JWT compact serialization.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::{ClaimMap, DecodeError, DecodedToken, TokenDecoder, TokenSegment};

/// Decodes compact-form JWTs without verifying them.
///
/// The input is taken as received: surrounding whitespace is not stripped
/// and counts against the base64url alphabet, exactly like handing the raw
/// string to a JOSE library. Only the emptiness check trims.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactJwtDecoder;

impl TokenDecoder for CompactJwtDecoder {
    fn decode(&self, raw: &str) -> Result<DecodedToken, DecodeError> {
        if raw.trim().is_empty() {
            return Err(DecodeError::EmptyToken);
        }

        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() != 3 {
            return Err(DecodeError::SegmentCount {
                found: segments.len(),
            });
        }

        // Signature segment is intentionally left untouched.
        Ok(DecodedToken {
            header: decode_segment(segments[0], TokenSegment::Header)?,
            payload: decode_segment(segments[1], TokenSegment::Payload)?,
        })
    }
}

/// Base64url-decode one segment and parse it as a JSON object.
fn decode_segment(encoded: &str, segment: TokenSegment) -> Result<ClaimMap, DecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|source| DecodeError::InvalidBase64 { segment, source })?;

    serde_json::from_slice(&bytes).map_err(|source| DecodeError::InvalidJson { segment, source })
}
