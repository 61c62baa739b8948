//! Frame constructors and accessors

use super::types::{Frame, Payload, Source};
use crate::position::Position;
use once_cell::sync::OnceCell;

impl Frame {
    /// Capture the call site `skip` levels up and build a frame around it.
    ///
    /// Must call [`Position::capture`] directly; every wrap entry point
    /// counts on this function being exactly one level above it.
    #[inline(never)]
    pub(crate) fn capture(skip: usize, code: i64, inner: String, source: Option<Source>) -> Self {
        let position = Position::capture(skip);
        Self {
            code,
            position,
            payload: Payload::Retained(inner),
            source,
            rendered: OnceCell::new(),
        }
    }

    /// Build a frame from known parts without touching the live stack
    #[must_use]
    pub fn from_parts(code: i64, position: Position, inner: impl Into<String>) -> Self {
        Self {
            code,
            position,
            payload: Payload::Retained(inner.into()),
            source: None,
            rendered: OnceCell::new(),
        }
    }

    /// Get the error code
    #[must_use]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Get the call site captured at wrap time
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Get the inner error text.
    ///
    /// This is either a terminal message or the encoded text of a nested
    /// frame. Returns `None` once the frame has been released.
    #[must_use]
    pub fn inner(&self) -> Option<&str> {
        match &self.payload {
            Payload::Retained(inner) => Some(inner),
            Payload::Released => None,
        }
    }

    /// Whether [`release`](Self::release) has dropped the inner text
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.payload == Payload::Released
    }

    /// Drop the inner text and the cached encoding.
    ///
    /// Code and position stay intact. A released frame displays with an
    /// empty payload.
    pub fn release(&mut self) {
        self.payload = Payload::Released;
        self.rendered = OnceCell::new();
    }
}
