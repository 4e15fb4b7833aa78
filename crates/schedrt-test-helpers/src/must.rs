//! Unwrap helpers with good error messages.
//!
//! Stand-ins for `unwrap()` and `expect()` in test code. `#[track_caller]`
//! keeps the panic location on the test line.

use std::fmt::Debug;
use std::str::FromStr;

use schedrt_errors::SchedError;

/// Unwrap a `Result`, panicking with the error on `Err`.
///
/// ```rust
/// use schedrt_test_helpers::must;
///
/// let value = must(Ok::<_, &str>(42));
/// assert_eq!(value, 42);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap a `Result` with a context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with the context and error value.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` on `None`.
///
/// ```rust
/// use schedrt_test_helpers::must_some;
///
/// assert_eq!(must_some(Some(7), "expected a value"), 7);
/// ```
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Parse a string, panicking on failure.
///
/// ```rust
/// use schedrt_test_helpers::must_parse;
///
/// let ticks: u64 = must_parse("250");
/// assert_eq!(ticks, 250);
/// ```
///
/// # Panics
///
/// Panics if parsing fails.
#[track_caller]
pub fn must_parse<T: FromStr>(s: &str) -> T
where
    T::Err: Debug,
{
    s.parse()
        .unwrap_or_else(|e| panic!("must_parse: failed to parse {s:?}: {e:?}"))
}

/// Assert that a hot-path call was refused because a statistics tier is
/// off, and return the error.
///
/// # Panics
///
/// Panics on `Ok` or on any error that is not an "unsupported" code.
#[track_caller]
pub fn must_unsupported<T: Debug>(result: Result<T, SchedError>) -> SchedError {
    match result {
        Err(e) if e.is_unsupported() => e,
        Err(e) => panic!("must_unsupported: expected a disabled-tier error, got {e:?}"),
        Ok(v) => panic!("must_unsupported: expected a disabled-tier error, got Ok({v:?})"),
    }
}
