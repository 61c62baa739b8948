//! Call-site error frames that survive being flattened into text
//!
//! Wrapping an error captures the code, the call site and the error's text in
//! a [`Frame`]. A frame's `Display` is a self-delimited encoding, so the
//! frame can travel as an ordinary error message: through `?`, into logs,
//! across processes. Wrapping a frame again nests its text in the new frame,
//! and the whole chain can be read back later with [`stack_from_str`] and
//! rendered with [`describe()`] or a [`Describer`].
//!
//! ```
//! let inner = catcher::wrap_message(233, "QAQ");
//! let outer = catcher::wrap(666, inner);
//!
//! let frames = catcher::stack_from_str(&outer.to_string()).unwrap_or_default();
//! assert_eq!(frames.len(), 2);
//! assert_eq!(frames[0].code(), 666);
//! assert_eq!(frames[1].inner(), Some("QAQ"));
//! ```

pub mod codec;
pub mod describe;
pub mod frame;
pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod position;
pub mod stack;

pub use codec::{CodecError, Decoder, CODE_DESERIALIZE_ERROR};
pub use describe::{DescribeError, Describer, FrameReport, Report};
pub use frame::{Frame, OptionExt, ResultExt, BASE_SKIP};
pub use logging::LoggingTransformer;
pub use position::Position;
pub use stack::{Frames, StackWalker, RETAINED_PAYLOADS};

use std::fmt;
use std::sync::Arc;

/// Wrap an error value, capturing the caller's position
#[inline(never)]
pub fn wrap<E>(code: i64, err: E) -> Frame
where
    E: std::error::Error + Send + Sync + 'static,
{
    Frame::capture(BASE_SKIP, code, err.to_string(), Some(Arc::new(err)))
}

/// Wrap an error value, capturing the position `skip` levels up
#[inline(never)]
pub fn wrap_n<E>(skip: usize, code: i64, err: E) -> Frame
where
    E: std::error::Error + Send + Sync + 'static,
{
    Frame::capture(skip, code, err.to_string(), Some(Arc::new(err)))
}

/// Wrap a plain message, capturing the caller's position
#[inline(never)]
pub fn wrap_message(code: i64, message: impl Into<String>) -> Frame {
    Frame::capture(BASE_SKIP, code, message.into(), None)
}

/// Wrap a plain message, capturing the position `skip` levels up
#[inline(never)]
pub fn wrap_message_n(skip: usize, code: i64, message: impl Into<String>) -> Frame {
    Frame::capture(skip, code, message.into(), None)
}

/// Frame carrying only a code and the caller's position
#[inline(never)]
pub fn wrap_code(code: i64) -> Frame {
    Frame::capture(BASE_SKIP, code, String::new(), None)
}

/// Frame carrying only a code and the position `skip` levels up
#[inline(never)]
pub fn wrap_code_n(skip: usize, code: i64) -> Frame {
    Frame::capture(skip, code, String::new(), None)
}

/// Decode one frame from text, or `None` when it is not a frame
pub fn from_str(s: &str) -> Option<Frame> {
    Decoder::new().frame(s)
}

/// Decode one frame from bytes, or `None` when they are not a frame
pub fn from_bytes(b: &[u8]) -> Option<Frame> {
    Decoder::new().frame_from_bytes(b)
}

/// Decode one frame from an error's text; `None` for no error
pub fn from_error<E: fmt::Display + ?Sized>(err: Option<&E>) -> Option<Frame> {
    from_str(&err?.to_string())
}

/// Rebuild the frame chain encoded in `s`, outermost first
pub fn stack_from_str(s: &str) -> Option<Frames> {
    StackWalker::new().walk(s)
}

/// Rebuild the frame chain encoded in UTF-8 bytes
pub fn stack_from_bytes(b: &[u8]) -> Option<Frames> {
    StackWalker::new().walk_bytes(b)
}

/// Rebuild the frame chain encoded in an error's text; `None` for no error
pub fn stack_from_error<E: fmt::Display + ?Sized>(err: Option<&E>) -> Option<Frames> {
    StackWalker::new().walk_error(err)
}

/// Report for `err` with recorded paths, or its plain text when it is not a
/// frame chain
pub fn describe<E: fmt::Display + ?Sized>(err: &E) -> String {
    let text = err.to_string();
    match stack_from_str(&text) {
        Some(frames) => frames.to_string(),
        None => text,
    }
}
