//! Single-slot status reporting for the inspector.
//!
//! Exactly one status is live at a time; every operation overwrites it.
//! The flag only selects presentation, red for errors and green otherwise.

use crate::decoder::{DecodeError, DecodedToken};

/// The one status message the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text shown to the user.
    pub text: String,
    /// Whether this outcome is an error.
    pub error: bool,
}

impl StatusMessage {
    /// A non-error status.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    /// An error status.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }

    /// Status for empty or whitespace-only input. Also the initial state.
    pub fn empty_token() -> Self {
        Self::error("JWT must not be empty")
    }

    /// Status for a successful decode.
    pub fn token_valid() -> Self {
        Self::ok("JWT token valid")
    }

    /// Status for a malformed token of any kind.
    pub fn token_invalid() -> Self {
        Self::error("Incorrect JWT token")
    }

    /// Status after clearing the editor.
    pub fn cleared() -> Self {
        Self::ok("Textarea cleared")
    }

    /// Map a decode outcome onto its user-facing status.
    ///
    /// Parse failures all collapse into the same message; the precise
    /// reason goes to the diagnostic log, not the user.
    pub fn from_decode(result: &Result<DecodedToken, DecodeError>) -> Self {
        match result {
            Ok(_) => Self::token_valid(),
            Err(DecodeError::EmptyToken) => Self::empty_token(),
            Err(_) => Self::token_invalid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::TokenSegment;

    #[test]
    fn test_constructor_error_flags() {
        assert!(StatusMessage::empty_token().error);
        assert!(StatusMessage::token_invalid().error);
        assert!(!StatusMessage::token_valid().error);
        assert!(!StatusMessage::cleared().error);
    }

    #[test]
    fn test_decode_outcomes_map_to_distinct_statuses() {
        let ok: Result<DecodedToken, DecodeError> = Ok(DecodedToken {
            header: crate::decoder::ClaimMap::new(),
            payload: crate::decoder::ClaimMap::new(),
        });
        assert_eq!(StatusMessage::from_decode(&ok), StatusMessage::token_valid());

        let empty: Result<DecodedToken, DecodeError> = Err(DecodeError::EmptyToken);
        assert_eq!(
            StatusMessage::from_decode(&empty),
            StatusMessage::empty_token()
        );

        let malformed: Result<DecodedToken, DecodeError> =
            Err(DecodeError::SegmentCount { found: 2 });
        assert_eq!(
            StatusMessage::from_decode(&malformed),
            StatusMessage::token_invalid()
        );

        let bad_json: Result<DecodedToken, DecodeError> = Err(DecodeError::InvalidJson {
            segment: TokenSegment::Header,
            source: serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        });
        assert_eq!(
            StatusMessage::from_decode(&bad_json),
            StatusMessage::token_invalid()
        );
    }

    #[test]
    fn test_empty_and_invalid_are_distinct() {
        assert_ne!(StatusMessage::empty_token(), StatusMessage::token_invalid());
    }
}
