// SPDX-License-Identifier: MIT

//! Error type shared by the codec and the blend engine.

use thiserror::Error;

/// Errors returned by the fallible parts of the color API.
///
/// Pure arithmetic never fails; only text parsing and batch operations
/// over caller-supplied buffers can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not one of `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// An output or layer slice does not match the input length.
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl ColorError {
    /// Fail with [`ColorError::LengthMismatch`] unless both lengths agree.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` when `actual != expected`.
    pub fn check_len(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            tracing::debug!(expected, actual, "rejecting mismatched color buffers");
            Err(Self::LengthMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matching_lengths_pass() {
        assert_eq!(ColorError::check_len(4, 4), Ok(()));
    }

    #[test]
    fn mismatched_lengths_report_both_sides() {
        let err = ColorError::check_len(3, 5).unwrap_err();
        assert_eq!(err, ColorError::LengthMismatch { expected: 3, actual: 5 });
        assert_eq!(err.to_string(), "buffer length mismatch: expected 3, got 5");
    }

    #[test]
    fn invalid_hex_message_quotes_input() {
        let err = ColorError::InvalidHex("#12".into());
        assert_eq!(err.to_string(), "invalid hex color: \"#12\"");
    }
}
