//! Macros for returning frames from the current function
//!
//! Both expand in the caller, so the captured position is the macro's call
//! site.

/// Return early with a frame built from a code and an optional message.
///
/// The frame is converted with `Into` to the function's error type.
///
/// ```
/// fn lookup(id: u32) -> Result<(), catcher::Frame> {
///     if id == 0 {
///         catcher::bail!(404, "no user {id}");
///     }
///     Ok(())
/// }
/// assert!(lookup(0).is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($code:expr $(,)?) => {
        return ::core::result::Result::Err(
            $crate::wrap_code_n($crate::BASE_SKIP, $code).into(),
        )
    };
    ($code:expr, $($arg:tt)+) => {
        return ::core::result::Result::Err(
            $crate::wrap_message_n($crate::BASE_SKIP, $code, ::std::format!($($arg)+)).into(),
        )
    };
}

/// Return early with a frame unless a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
