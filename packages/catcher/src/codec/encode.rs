//! Frame to text

use super::{CLOSE, LEN_SEP, MARKER, OPEN, SEP, VERSION};
use crate::frame::Frame;

/// Encode a frame into its text form.
///
/// A released frame is encoded with an empty inner payload.
#[must_use]
pub fn encode(frame: &Frame) -> String {
    let position = frame.position();
    let inner = frame.inner().unwrap_or_default();
    let code = frame.code().to_string();
    let line = position.line().to_string();

    let mut out = String::with_capacity(
        MARKER.len()
            + VERSION.len()
            + code.len()
            + line.len()
            + position.function().len()
            + position.file().len()
            + inner.len()
            + 32,
    );
    out.push_str(MARKER);
    out.push_str(VERSION);
    out.push_str(OPEN);
    out.push_str(&code);
    out.push_str(SEP);
    push_text(&mut out, position.function());
    out.push_str(SEP);
    push_text(&mut out, position.file());
    out.push_str(SEP);
    out.push_str(&line);
    out.push_str(SEP);
    push_text(&mut out, inner);
    out.push_str(CLOSE);
    out
}

/// Encode a frame into bytes; the same bytes as [`encode`]
#[must_use]
pub fn encode_bytes(frame: &Frame) -> Vec<u8> {
    encode(frame).into_bytes()
}

fn push_text(out: &mut String, text: &str) {
    out.push_str(&text.len().to_string());
    out.push_str(LEN_SEP);
    out.push_str(text);
}
