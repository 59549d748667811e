//! Core trait and types for JWT decoding.
//!
//! Decoding here means reading the compact serialization only: the token is
//! split into its three dot-separated segments and the first two are
//! base64url-decoded and JSON-parsed. Signatures are never verified and the
//! signature segment is never inspected.

use std::fmt;

pub mod compact;

pub use compact::CompactJwtDecoder;

/// Claims of a decoded segment, preserved as arbitrary JSON.
pub type ClaimMap = serde_json::Map<String, serde_json::Value>;

/// Result of a successful decode: both halves are always present together.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    /// Decoded JOSE header.
    pub header: ClaimMap,
    /// Decoded claims payload.
    pub payload: ClaimMap,
}

/// The named segments of the compact form that get decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSegment {
    /// First segment, the JOSE header.
    Header,
    /// Second segment, the claims payload.
    Payload,
}

impl fmt::Display for TokenSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Payload => write!(f, "payload"),
        }
    }
}

/// Errors that can occur while decoding a token.
///
/// Empty input is its own variant so callers can report it separately from
/// a malformed token.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input was empty or contained only whitespace.
    #[error("token is empty")]
    EmptyToken,

    /// The input did not have exactly three dot-separated segments.
    #[error("expected 3 dot-separated segments, found {found}")]
    SegmentCount {
        /// Number of segments the input split into.
        found: usize,
    },

    /// A segment was not valid unpadded base64url.
    #[error("{segment} segment is not valid base64url: {source}")]
    InvalidBase64 {
        /// Which segment failed.
        segment: TokenSegment,
        /// Underlying decode failure.
        source: base64::DecodeError,
    },

    /// A segment did not decode to a JSON object.
    #[error("{segment} segment is not a JSON object: {source}")]
    InvalidJson {
        /// Which segment failed.
        segment: TokenSegment,
        /// Underlying parse failure.
        source: serde_json::Error,
    },
}

/// Trait for token decoders.
///
/// The UI layer only sees this seam, so tests can swap in deterministic
/// implementations without constructing real tokens.
pub trait TokenDecoder: Send + Sync + fmt::Debug {
    /// Decode a raw token string into its header and payload.
    fn decode(&self, raw: &str) -> Result<DecodedToken, DecodeError>;
}
