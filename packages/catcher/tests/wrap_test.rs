//! Wrapping errors at real call sites and reading the chain back

use catcher::{
    bail, ensure, from_error, from_str, stack_from_error, stack_from_str, wrap, wrap_code,
    wrap_message, wrap_n, Frame, LoggingTransformer, OptionExt, ResultExt, BASE_SKIP,
};
use std::fmt;

#[derive(Debug)]
struct DuplicateError {
    field: String,
}

impl fmt::Display for DuplicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key at field \"{}\"", self.field)
    }
}

impl std::error::Error for DuplicateError {}

/// Application helper adding its own call level above the wrap
fn database_error(code: i64, field: &str) -> Frame {
    wrap_n(
        BASE_SKIP + 1,
        code,
        DuplicateError {
            field: field.to_string(),
        },
    )
}

fn inner_logic() -> Result<(), Frame> {
    Err(wrap(233, std::io::Error::other("QAQ")))
}

fn outer_logic() -> Result<(), Frame> {
    inner_logic().map_err(|err| wrap(666, err))
}

fn lookup(id: u32) -> Result<u32, Frame> {
    ensure!(id != 0, 400, "id must be positive");
    if id > 100 {
        bail!(404, "no user {id}");
    }
    if id == 42 {
        bail!(500);
    }
    Ok(id)
}

#[test]
fn test_wrap_captures_the_caller() {
    let frame = wrap(233, std::io::Error::other("QAQ"));
    let position = frame.position();
    assert!(
        position.function().contains("test_wrap_captures_the_caller"),
        "unexpected position {position:?}"
    );
    assert!(position.file().ends_with("wrap_test.rs"));
    assert!(position.line() > 0);
}

#[test]
fn test_helper_skip_reports_the_helpers_caller() {
    let frame = database_error(1, "id");
    assert!(frame
        .position()
        .function()
        .contains("test_helper_skip_reports_the_helpers_caller"));
    assert_eq!(frame.inner(), Some("duplicate key at field \"id\""));
}

#[test]
fn test_wrap_text_decodes_back() {
    LoggingTransformer::init_test();
    let frame = wrap(233, std::io::Error::other("QAQ"));
    let decoded = from_str(&frame.to_string()).expect("a frame");
    assert_eq!(decoded.code(), 233);
    assert_eq!(decoded.inner(), Some("QAQ"));
    assert_eq!(decoded.position(), frame.position());
}

#[test]
fn test_nested_wrap_walks_outer_to_inner() {
    let inner = wrap_message(233, "QAQ");
    let inner_text = inner.to_string();
    let outer = wrap(666, inner);

    let frames = stack_from_str(&outer.to_string()).expect("two frames");
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].code(), 666);
    assert_eq!(frames[0].inner(), Some(inner_text.as_str()));
    assert_eq!(frames[1].code(), 233);
    assert_eq!(frames[1].inner(), Some("QAQ"));
}

#[test]
fn test_chain_through_functions() {
    let err = outer_logic().expect_err("always fails");
    let frames = stack_from_error(Some(&err)).expect("frames");
    assert_eq!(frames.len(), 2);
    assert!(frames[0].position().function().contains("outer_logic"));
    assert!(frames[1].position().function().contains("inner_logic"));
    assert_eq!(frames.message(), Some("QAQ"));
}

#[test]
fn test_depth_is_preserved() {
    for depth in 1..=6 {
        let mut frame = wrap_code(0);
        for code in 1..depth {
            frame = wrap(code, frame);
        }
        let frames = stack_from_str(&frame.to_string()).expect("frames");
        assert_eq!(frames.len(), depth as usize);
        let codes: Vec<i64> = frames.iter().map(Frame::code).collect();
        let expected: Vec<i64> = (0..depth).rev().collect();
        assert_eq!(codes, expected);
    }
}

#[test]
fn test_released_frames_keep_code_and_position() {
    let first = wrap_message(1, "root");
    let second = wrap(2, first.clone());
    let third = wrap(3, second.clone());

    let frames = stack_from_str(&third.to_string()).expect("three frames");
    assert_eq!(frames.len(), 3);
    assert!(frames[0].is_released());
    assert_eq!(frames[0].inner(), None);
    assert_eq!(frames[0].code(), 3);
    assert_eq!(frames[0].position(), third.position());
    assert_eq!(frames[1].position(), second.position());
    assert_eq!(frames[2].position(), first.position());
    assert_eq!(frames[2].inner(), Some("root"));
}

#[test]
fn test_absent_error_is_not_a_frame() {
    assert!(from_error::<Frame>(None).is_none());
    assert!(stack_from_error::<Frame>(None).is_none());
    assert!(from_error(Some(&std::io::Error::other("boom"))).is_none());
}

#[test]
fn test_code_only_frame() {
    let frame = wrap_code(7);
    assert_eq!(frame.inner(), Some(""));
    let decoded = from_str(&frame.to_string()).expect("a frame");
    assert_eq!(decoded.code(), 7);
    assert_eq!(decoded.inner(), Some(""));
}

#[test]
fn test_source_is_kept_in_process() {
    let frame = wrap(1, std::io::Error::other("disk"));
    let source = std::error::Error::source(&frame).expect("source");
    assert_eq!(source.to_string(), "disk");
    assert!(std::error::Error::source(&from_str(&frame.to_string()).expect("frame")).is_none());
}

#[test]
fn test_result_and_option_extensions() {
    let err = Err::<(), _>(std::io::Error::other("gone"))
        .catch(410)
        .expect_err("wrapped");
    assert_eq!(err.code(), 410);
    assert_eq!(err.inner(), Some("gone"));
    assert!(err
        .position()
        .function()
        .contains("test_result_and_option_extensions"));

    let err = Err::<(), _>(std::io::Error::other("gone"))
        .catch_message(410, "loading profile")
        .expect_err("wrapped");
    assert_eq!(err.inner(), Some("loading profile: gone"));

    let err = None::<u8>.catch_none(404).expect_err("wrapped");
    assert_eq!(err.code(), 404);
    assert_eq!(Some(3).catch_none(404).ok(), Some(3));
}

#[test]
fn test_message_context_still_walks() {
    let inner = wrap_message(233, "QAQ");
    let outer = Err::<(), _>(inner)
        .catch_message(666, "while loading")
        .expect_err("wrapped");
    let frames = stack_from_str(&outer.to_string()).expect("frames");
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].inner(), Some("QAQ"));
}

#[test]
fn test_macros() {
    assert_eq!(lookup(7).ok(), Some(7));

    let err = lookup(0).expect_err("ensure fails");
    assert_eq!(err.code(), 400);
    assert_eq!(err.inner(), Some("id must be positive"));
    assert!(err.position().function().contains("lookup"));

    let err = lookup(101).expect_err("bail with message");
    assert_eq!(err.code(), 404);
    assert_eq!(err.inner(), Some("no user 101"));

    let err = lookup(42).expect_err("bail with code");
    assert_eq!(err.code(), 500);
    assert_eq!(err.inner(), Some(""));
}

#[test]
fn test_wrap_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|code| std::thread::spawn(move || wrap_code(code).to_string()))
        .collect();
    for (code, handle) in handles.into_iter().enumerate() {
        let text = handle.join().expect("thread");
        let frame = from_str(&text).expect("a frame");
        assert_eq!(frame.code(), code as i64);
    }
}
