//! Text encoding of a single frame
//!
//! Version 1 of the wire format, as written by [`encode`] and read by
//! [`Decoder`]:
//!
//! ```text
//! ~catcher/1{<code>|<len>:<function>|<len>:<file>|<line>|<len>:<inner>}~
//! ```
//!
//! `<len>` is the byte length of the text that follows its colon, so the
//! inner payload is carried verbatim and may itself be a frame. Any process
//! reading frames out of logs must agree on this layout.

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{Decoder, LogReporter, Reporter, Silent};
pub use encode::{encode, encode_bytes};
pub use error::{CodecError, Result};

/// Marks the start of an encoded frame
pub const MARKER: &str = "~catcher/";

/// The only encoding version this crate writes and reads
pub const VERSION: &str = "1";

/// Code substituted when a frame's code field is not a number
pub const CODE_DESERIALIZE_ERROR: i64 = i64::MIN;

pub(crate) const OPEN: &str = "{";
pub(crate) const SEP: &str = "|";
pub(crate) const LEN_SEP: &str = ":";
pub(crate) const CLOSE: &str = "}~";
