//! Rebuilding a call stack from a chain of nested frames

use crate::codec::{Decoder, LogReporter, Reporter};
use crate::frame::Frame;
use std::fmt;
use std::ops::Deref;

/// Number of most recent frames whose inner text the walker keeps.
///
/// Each inner text is needed only to decode the next frame down, so older
/// payloads are released as the walk proceeds.
pub const RETAINED_PAYLOADS: usize = 2;

/// A reconstructed stack, outermost wrap first
#[derive(Debug, Clone, Default)]
pub struct Frames(Vec<Frame>);

impl Frames {
    /// The terminal message under the innermost frame
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.last().and_then(Frame::inner)
    }

    /// Take the frames out
    #[must_use]
    pub fn into_vec(self) -> Vec<Frame> {
        self.0
    }
}

impl Deref for Frames {
    type Target = [Frame];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Frames {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Frames {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Frames> for Vec<Frame> {
    fn from(frames: Frames) -> Self {
        frames.0
    }
}

impl fmt::Display for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report =
            crate::describe::render(self, |file| Ok(file.to_string())).map_err(|_| fmt::Error)?;
        f.write_str(&report)
    }
}

/// Peels nested frames out of a chained error
#[derive(Debug, Clone, Default)]
pub struct StackWalker<R = LogReporter> {
    decoder: Decoder<R>,
}

impl StackWalker {
    /// Walker using a logging decoder
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoder: Decoder::new(),
        }
    }
}

impl<R: Reporter> StackWalker<R> {
    /// Walker using `decoder`
    pub fn with_decoder(decoder: Decoder<R>) -> Self {
        Self { decoder }
    }

    /// Decode frames from `input` until the payload is a plain message.
    ///
    /// Returns `None` when `input` is not a frame. Once more than
    /// [`RETAINED_PAYLOADS`] frames are collected, the payload of the frame
    /// that many places behind the newest one is released; read a frame's
    /// inner text before the walk moves two levels past it.
    pub fn walk(&self, input: &str) -> Option<Frames> {
        let mut frames = vec![self.decoder.frame(input)?];
        while let Some(next) = frames
            .last()
            .and_then(Frame::inner)
            .and_then(|inner| self.decoder.frame(inner))
        {
            frames.push(next);
            if let Some(behind) = frames.len().checked_sub(RETAINED_PAYLOADS + 1) {
                frames[behind].release();
            }
        }
        Some(Frames(frames))
    }

    /// [`walk`](Self::walk) over UTF-8 bytes
    pub fn walk_bytes(&self, input: &[u8]) -> Option<Frames> {
        self.walk(std::str::from_utf8(input).ok()?)
    }

    /// [`walk`](Self::walk) over an error's text; `None` for no error
    pub fn walk_error<E: fmt::Display + ?Sized>(&self, error: Option<&E>) -> Option<Frames> {
        self.walk(&error?.to_string())
    }
}
