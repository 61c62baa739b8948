//! Errors raised while relativizing report paths

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for describe operations
pub type Result<T> = std::result::Result<T, DescribeError>;

/// Why a report could not be rendered with relative paths
#[derive(Error, Debug)]
pub enum DescribeError {
    /// The configured relative directory could not be made absolute
    #[error("cannot resolve project root `{}`: {source}", .dir.display())]
    Root {
        /// Directory as configured
        dir: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// A file under the package cannot be expressed relative to the root
    #[error("cannot make `{}` relative to `{}`", .file.display(), .base.display())]
    NotRelatable {
        /// File path recorded in the frame
        file: PathBuf,
        /// Absolute project root
        base: PathBuf,
    },
}
