//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// Arbitrary text without single quotes, so it is never malformed.
pub(crate) fn arb_balanced_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[a-zA-Z0-9 <>&\"=_-]{{0,{}}}", max_len))
        .expect("valid regex")
}

/// Arbitrary text that may contain any printable character.
pub(crate) fn arb_any_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[ -~]{{0,{}}}", max_len)).expect("valid regex")
}
