//! Text to frame
//!
//! Decoding never fails outright on a recognized frame: a damaged numeric
//! field is replaced and handed to the decoder's [`Reporter`], and the frame
//! is still returned. Only structural mismatches mean "not a frame".

use super::error::{CodecError, Result};
use super::{CLOSE, CODE_DESERIALIZE_ERROR, LEN_SEP, MARKER, OPEN, SEP, VERSION};
use crate::frame::Frame;
use crate::logging::LoggingTransformer;
use crate::position::Position;

/// Receives the damaged-field diagnostics a [`Decoder`] produces
pub trait Reporter {
    /// Called once per damaged field of a frame that still decodes
    fn report(&self, error: &CodecError);
}

impl<F> Reporter for F
where
    F: Fn(&CodecError),
{
    fn report(&self, error: &CodecError) {
        self(error);
    }
}

/// Reports damaged fields through the `log` facade at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, error: &CodecError) {
        LoggingTransformer::log_malformed_field(error);
    }
}

/// Drops damaged-field diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&self, _error: &CodecError) {}
}

/// Frame decoder carrying its diagnostic policy
#[derive(Debug, Clone, Default)]
pub struct Decoder<R = LogReporter> {
    reporter: R,
}

impl Decoder {
    /// Decoder that logs damaged fields
    #[must_use]
    pub fn new() -> Self {
        Self {
            reporter: LogReporter,
        }
    }
}

impl Decoder<Silent> {
    /// Decoder that stays quiet about damaged fields
    #[must_use]
    pub fn silent() -> Self {
        Self { reporter: Silent }
    }
}

impl<R: Reporter> Decoder<R> {
    /// Decoder that sends damaged fields to `reporter`
    pub fn with_reporter(reporter: R) -> Self {
        Self { reporter }
    }

    /// Parse the first frame found in `input`.
    ///
    /// Text before the marker and after the closing delimiter is ignored.
    pub fn decode(&self, input: &str) -> Result<Frame> {
        let start = input.find(MARKER).ok_or(CodecError::MissingMarker)?;
        let mut cursor = Cursor::new(&input[start + MARKER.len()..]);

        let version = cursor.until(OPEN)?;
        if version != VERSION {
            return Err(CodecError::UnsupportedVersion(version.to_string()));
        }
        let code = cursor.until(SEP)?;
        let function = cursor.text()?;
        cursor.expect(SEP)?;
        let file = cursor.text()?;
        cursor.expect(SEP)?;
        let line = cursor.until(SEP)?;
        let inner = cursor.text()?;
        cursor.expect(CLOSE)?;

        let code = code.parse::<i64>().unwrap_or_else(|source| {
            self.reporter.report(&CodecError::InvalidCode {
                raw: code.to_string(),
                source,
            });
            CODE_DESERIALIZE_ERROR
        });
        let line = line.parse::<u32>().unwrap_or_else(|source| {
            self.reporter.report(&CodecError::InvalidLine {
                raw: line.to_string(),
                source,
            });
            0
        });

        Ok(Frame::from_parts(
            code,
            Position::new(function, file, line),
            inner,
        ))
    }

    /// Parse the first frame found in UTF-8 `input`
    pub fn decode_bytes(&self, input: &[u8]) -> Result<Frame> {
        self.decode(std::str::from_utf8(input)?)
    }

    /// Parse one frame, or `None` when `input` is not a frame
    pub fn frame(&self, input: &str) -> Option<Frame> {
        self.decode(input).map_err(log_mismatch).ok()
    }

    /// Parse one frame from bytes, or `None` when `input` is not a frame
    pub fn frame_from_bytes(&self, input: &[u8]) -> Option<Frame> {
        self.decode_bytes(input).map_err(log_mismatch).ok()
    }
}

fn log_mismatch(error: CodecError) -> CodecError {
    // Plain messages are the normal end of a chain, not worth a log line
    if error != CodecError::MissingMarker {
        LoggingTransformer::log_not_a_frame(&error);
    }
    error
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    fn expect(&mut self, token: &'static str) -> Result<()> {
        self.rest = self
            .rest
            .strip_prefix(token)
            .ok_or(CodecError::Truncated { expected: token })?;
        Ok(())
    }

    fn until(&mut self, token: &'static str) -> Result<&'a str> {
        let (field, rest) = self
            .rest
            .split_once(token)
            .ok_or(CodecError::Truncated { expected: token })?;
        self.rest = rest;
        Ok(field)
    }

    fn text(&mut self) -> Result<&'a str> {
        let len = self.until(LEN_SEP)?;
        let len = len
            .parse::<usize>()
            .map_err(|_| CodecError::InvalidLength(len.to_string()))?;
        let available = self.rest.len();
        let text = self
            .rest
            .get(..len)
            .ok_or(CodecError::LengthOutOfRange { len, available })?;
        self.rest = &self.rest[len..];
        Ok(text)
    }
}
