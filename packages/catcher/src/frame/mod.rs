//! Error frames: a code, a call site and the error they wrap
//!
//! A [`Frame`] is created once at a wrap call and is then passed up the call
//! chain as an ordinary error value whose `Display` is its encoded text.
//! Wrapping a frame again nests that text inside the new frame's payload.

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod types;

pub use extensions::{OptionExt, ResultExt};
pub use types::{Frame, Source};

/// Depth from [`Position::capture`](crate::Position::capture) to the code
/// that called a wrap entry point directly.
///
/// `Position::capture` is depth 0, `Frame::capture` 1, the entry point 2 and
/// its caller 3. A helper that wraps on behalf of its own caller passes
/// `BASE_SKIP + 1` to the `*_n` variants.
pub const BASE_SKIP: usize = 3;
