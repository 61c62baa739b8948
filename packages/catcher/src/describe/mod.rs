//! Human-readable reports of reconstructed stacks
//!
//! A report has one line per frame, outermost first:
//!
//! ```text
//! [666] src/service.rs:31 app::service::load
//! [233] src/db.rs:12 app::db::insert: duplicate key at field "id"
//! ```
//!
//! The terminal message is appended to the innermost frame. Formatting never
//! fails outward: input that is not a frame chain, or a path that cannot be
//! relativized, falls back to the plain error text.

pub mod error;
pub mod path;

pub use error::{DescribeError, Result};

use crate::frame::Frame;
use crate::logging::LoggingTransformer;
use crate::stack::{Frames, StackWalker};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the package prefix for [`Describer::from_env`]
pub const PACKAGE_ENV: &str = "CATCHER_PACKAGE";

/// Environment variable holding the project root for [`Describer::from_env`]
pub const RELATIVE_DIR_ENV: &str = "CATCHER_RELATIVE_DIR";

/// Renders frame chains with source paths relative to a project root.
///
/// A recorded file path is rewritten when it contains `package`; it is then
/// expressed relative to `relative_dir`. An empty `package` disables
/// rewriting, which is what `Describer::default()` does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Describer {
    package: String,
    relative_dir: PathBuf,
}

/// One frame of a structured [`Report`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    /// Error code
    pub code: i64,
    /// Function that wrapped the error
    pub function: String,
    /// Source file, relativized when possible
    pub file: String,
    /// Source line
    pub line: u32,
}

/// Structured form of a described error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Frames outermost first; empty when the error was a plain message
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<FrameReport>,
    /// Terminal message, or the whole error text when there are no frames
    pub message: String,
}

impl Describer {
    /// Describer rewriting files containing `package` relative to `relative_dir`
    pub fn new(package: impl Into<String>, relative_dir: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            relative_dir: relative_dir.into(),
        }
    }

    /// Describer configured from `CATCHER_PACKAGE` and `CATCHER_RELATIVE_DIR`.
    ///
    /// Unset variables leave rewriting disabled or the root at the current
    /// directory.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            package: std::env::var(PACKAGE_ENV).unwrap_or_default(),
            relative_dir: std::env::var_os(RELATIVE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_default(),
        }
    }

    /// Set the package prefix
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the project root
    #[must_use]
    pub fn with_relative_dir(mut self, relative_dir: impl Into<PathBuf>) -> Self {
        self.relative_dir = relative_dir.into();
        self
    }

    /// Package prefix that marks rewritable paths
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Project root paths are made relative to
    #[must_use]
    pub fn relative_dir(&self) -> &Path {
        &self.relative_dir
    }

    /// Render `error` as a multi-line report, or its plain text when it is
    /// not a frame chain or its paths cannot be relativized.
    pub fn describe<E: fmt::Display + ?Sized>(&self, error: &E) -> String {
        let text = error.to_string();
        let Some(frames) = StackWalker::new().walk(&text) else {
            return text;
        };
        match frames.relativize(&self.package, &self.relative_dir) {
            Ok(report) => report,
            Err(e) => {
                LoggingTransformer::log_describe_fallback(&e);
                text
            }
        }
    }

    /// Structured report of `error`.
    ///
    /// Paths that cannot be relativized are kept as recorded.
    pub fn report<E: fmt::Display + ?Sized>(&self, error: &E) -> Report {
        let text = error.to_string();
        let Some(frames) = StackWalker::new().walk(&text) else {
            return Report {
                frames: Vec::new(),
                message: text,
            };
        };

        let base = if self.package.is_empty() {
            None
        } else {
            path::absolute_dir(&self.relative_dir)
                .inspect_err(LoggingTransformer::log_describe_fallback)
                .ok()
        };
        let file_of = |frame: &Frame| {
            let file = frame.position().file();
            base.as_deref()
                .and_then(|base| path::relativize(&self.package, base, file).ok())
                .unwrap_or_else(|| file.to_string())
        };

        Report {
            frames: frames
                .iter()
                .map(|frame| FrameReport {
                    code: frame.code(),
                    function: frame.position().function().to_string(),
                    file: file_of(frame),
                    line: frame.position().line(),
                })
                .collect(),
            message: frames.message().unwrap_or_default().to_string(),
        }
    }

    /// [`report`](Self::report) serialized as one JSON line for log sinks
    pub fn describe_json<E: fmt::Display + ?Sized>(&self, error: &E) -> String {
        let report = self.report(error);
        serde_json::to_string(&report).unwrap_or_else(|_| report.message)
    }
}

impl Frames {
    /// Render with files under `package` made relative to `relative_dir`
    pub fn relativize(&self, package: &str, relative_dir: &Path) -> Result<String> {
        if package.is_empty() {
            return render(self, |file| Ok(file.to_string()));
        }
        let base = path::absolute_dir(relative_dir)?;
        render(self, |file| path::relativize(package, &base, file))
    }
}

/// Render one line per frame, mapping each recorded file through `file`
pub(crate) fn render<F>(frames: &Frames, mut file: F) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut lines = Vec::with_capacity(frames.len());
    for frame in frames.iter() {
        let position = frame.position();
        let line = if position.is_unknown() {
            format!("[{}] <unknown>", frame.code())
        } else {
            format!(
                "[{}] {}:{} {}",
                frame.code(),
                file(position.file())?,
                position.line(),
                position.function()
            )
        };
        lines.push(line);
    }
    if let (Some(last), Some(message)) = (lines.last_mut(), frames.message()) {
        if !message.is_empty() {
            last.push_str(": ");
            last.push_str(message);
        }
    }
    Ok(lines.join("\n"))
}
