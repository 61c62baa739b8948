//! Display and trait implementations for Frame

use super::types::Frame;
use crate::codec;
use std::fmt;

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendered.get_or_init(|| codec::encode(self)))
    }
}

impl std::error::Error for Frame {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<Frame> for String {
    fn from(mut frame: Frame) -> Self {
        frame
            .rendered
            .take()
            .unwrap_or_else(|| codec::encode(&frame))
    }
}

impl From<Frame> for Vec<u8> {
    fn from(frame: Frame) -> Self {
        String::from(frame).into_bytes()
    }
}
