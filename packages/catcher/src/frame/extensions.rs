//! Extension traits that turn `Result` and `Option` failures into frames
//!
//! Each method captures the position of its own caller, the same way the
//! crate-level `wrap*` entry points do.

use super::{Frame, BASE_SKIP};
use std::fmt;
use std::sync::Arc;

/// Wrap the error of a `Result` into a [`Frame`]
pub trait ResultExt<T> {
    /// Wrap the error with `code`, keeping its text as the inner error
    fn catch(self, code: i64) -> Result<T, Frame>;

    /// Wrap the error with `code`, prefixing its text with `message`
    fn catch_message<M: fmt::Display>(self, code: i64, message: M) -> Result<T, Frame>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[inline(never)]
    fn catch(self, code: i64) -> Result<T, Frame> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Frame::capture(
                BASE_SKIP,
                code,
                err.to_string(),
                Some(Arc::new(err)),
            )),
        }
    }

    #[inline(never)]
    fn catch_message<M: fmt::Display>(self, code: i64, message: M) -> Result<T, Frame> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Frame::capture(
                BASE_SKIP,
                code,
                format!("{message}: {err}"),
                Some(Arc::new(err)),
            )),
        }
    }
}

/// Turn a missing `Option` value into a code-only [`Frame`]
pub trait OptionExt<T> {
    /// Produce a frame carrying only `code` and the caller's position
    fn catch_none(self, code: i64) -> Result<T, Frame>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline(never)]
    fn catch_none(self, code: i64) -> Result<T, Frame> {
        match self {
            Some(value) => Ok(value),
            None => Err(Frame::capture(BASE_SKIP, code, String::new(), None)),
        }
    }
}
