//! Core frame type

use crate::position::Position;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Error value kept alongside a frame that was wrapped in-process
pub type Source = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// One captured error annotation
#[derive(Debug, Clone)]
pub struct Frame {
    /// Application-defined error code
    pub(crate) code: i64,
    /// Call site captured at wrap time
    pub(crate) position: Position,
    /// Inner error text, terminal or another frame's encoding
    pub(crate) payload: Payload,
    /// The wrapped error value, only present before the frame left the process
    pub(crate) source: Option<Source>,
    /// Cached encoded text
    pub(crate) rendered: OnceCell<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    Retained(String),
    Released,
}
