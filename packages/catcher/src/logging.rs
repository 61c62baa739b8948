//! Structured logging for frame decoding and reporting
//!
//! The library only emits through the `log` facade. Applications and tests
//! that want to see the output install `env_logger` through
//! [`LoggingTransformer`].

use crate::codec::CodecError;
use crate::describe::DescribeError;
use log::{debug, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and the log lines catcher emits
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=catcher=warn` - damaged frames only
    /// - `RUST_LOG=catcher=debug` - also text that looked like a frame but was not
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// A recognized frame had a numeric field that did not parse
    pub fn log_malformed_field(error: &CodecError) {
        warn!(target: "catcher::codec", "Frame decoded with substitute value: {error}");
    }

    /// Text carried the frame marker but did not parse as a frame
    pub fn log_not_a_frame(error: &CodecError) {
        debug!(target: "catcher::codec", "Treating text as a plain message: {error}");
    }

    /// Path relativization failed and the plain message is reported instead
    pub fn log_describe_fallback(error: &DescribeError) {
        debug!(target: "catcher::describe", "Falling back to the plain error text: {error}");
    }
}
