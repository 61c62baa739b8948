//! Errors raised while reading an encoded frame

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Why a piece of text could not be read as a frame, or read only partially
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The text carries no frame marker at all
    #[error("no frame marker found")]
    MissingMarker,

    /// The marker names an encoding version this crate does not read
    #[error("unsupported frame encoding version `{0}`")]
    UnsupportedVersion(String),

    /// The text ended or diverged before a required delimiter
    #[error("truncated frame: expected `{expected}`")]
    Truncated {
        /// The delimiter that was missing
        expected: &'static str,
    },

    /// A length prefix is not a number
    #[error("invalid length prefix `{0}`")]
    InvalidLength(String),

    /// A length prefix overruns the input or splits a UTF-8 sequence
    #[error("length prefix {len} does not fit the remaining {available} bytes")]
    LengthOutOfRange {
        /// Declared length
        len: usize,
        /// Bytes left in the input
        available: usize,
    },

    /// Byte input is not UTF-8
    #[error("frame bytes are not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// The code field is not a number; the frame still decodes
    #[error("invalid code field `{raw}`: {source}")]
    InvalidCode {
        /// Field text as found
        raw: String,
        /// Parse failure
        source: ParseIntError,
    },

    /// The line field is not a number; the frame still decodes
    #[error("invalid line field `{raw}`: {source}")]
    InvalidLine {
        /// Field text as found
        raw: String,
        /// Parse failure
        source: ParseIntError,
    },
}

impl CodecError {
    /// Whether this error means the input is not a frame at all.
    ///
    /// The remaining variants describe a recognized frame with a damaged
    /// numeric field, which decodes with a substitute value.
    #[must_use]
    pub fn is_not_a_frame(&self) -> bool {
        !matches!(self, Self::InvalidCode { .. } | Self::InvalidLine { .. })
    }
}
