//! Call-site capture from the live stack
//!
//! A [`Position`] is the `(function, file, line)` triple of one stack frame,
//! resolved through the `backtrace` crate at the moment an error is wrapped.

use serde::Serialize;
use std::fmt;

/// Function name, source file and line of one call site.
///
/// The `Default` value is the unknown position: empty strings and line `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    function: String,
    file: String,
    line: u32,
}

impl Position {
    /// Build a position from already known parts
    #[must_use]
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Capture the call site `skip` levels above this function.
    ///
    /// Depth `0` is `Position::capture` itself, `1` is whoever called it, and
    /// so on. When the frame cannot be found or symbolized the unknown
    /// position is returned instead.
    #[inline(never)]
    #[must_use]
    pub fn capture(skip: usize) -> Self {
        let anchor = Self::capture as usize;
        let mut frames: Vec<backtrace::Frame> = Vec::new();
        let mut start = None;

        backtrace::trace(|frame| {
            if start.is_none() && frame.symbol_address() as usize == anchor {
                start = Some(frames.len());
            }
            frames.push(frame.clone());
            start.is_none_or(|s| frames.len() <= s.saturating_add(skip))
        });

        // Some unwinders report a symbol address that differs from the fn
        // pointer; fall back to matching on the resolved name.
        let start = start.or_else(|| frames.iter().position(is_capture_frame));

        start
            .and_then(|s| s.checked_add(skip))
            .and_then(|i| frames.get(i))
            .map(Self::resolve)
            .unwrap_or_default()
    }

    fn resolve(frame: &backtrace::Frame) -> Self {
        let mut position = None;
        backtrace::resolve_frame(frame, |symbol| {
            if position.is_some() {
                return;
            }
            let function = symbol
                .name()
                .map(|name| strip_hash(&format!("{name:#}")).to_string())
                .unwrap_or_default();
            let file = symbol
                .filename()
                .map(|path| path.display().to_string())
                .unwrap_or_default();
            position = Some(Self {
                function,
                file,
                line: symbol.lineno().unwrap_or(0),
            });
        });
        position.unwrap_or_default()
    }

    /// Fully qualified function name, empty when unknown
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file as recorded in debug info, normally absolute
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// One-based line number, `0` when unknown
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether capture failed to resolve anything at all
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.function.is_empty() && self.file.is_empty() && self.line == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("<unknown>");
        }
        write!(f, "{}:{} {}", self.file, self.line, self.function)
    }
}

fn is_capture_frame(frame: &backtrace::Frame) -> bool {
    let mut hit = false;
    backtrace::resolve_frame(frame, |symbol| {
        if let Some(name) = symbol.name() {
            let name = format!("{name:#}");
            let name = strip_hash(&name);
            hit |= name.ends_with("Position::capture") || name.ends_with("Position>::capture");
        }
    });
    hit
}

/// Drop the `::h0123456789abcdef` suffix legacy mangling leaves behind.
fn strip_hash(name: &str) -> &str {
    match name.rsplit_once("::") {
        Some((head, hash))
            if hash.len() == 17
                && hash.starts_with('h')
                && hash[1..].bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            head
        }
        _ => name,
    }
}
