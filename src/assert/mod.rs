//! Assertion helpers.
//!
//! Every helper returns `Result<(), AssertionFailure>`, so test bodies can
//! chain them with `?`. The first failing assertion ends the body and becomes
//! the test's failure detail.
//!
//! The functions take the failure message explicitly. The macros of the same
//! name make it optional and, for the equality checks, accept values that are
//! not [`Debug`]: those fail with the generic `"(equality assertion)"` suffix
//! instead of rendering the values.
//!
//! ```
//! use multitest::prelude::*;
//!
//! fn body() -> Result<(), AssertionFailure> {
//!     assert_true!(1 < 2)?;
//!     assert_equals!(2 + 2, 4, "basic arithmetic")?;
//!     assert_approx!(0.1 + 0.2, 0.3)?;
//!     Ok(())
//! }
//! # assert!(body().is_ok());
//! ```

use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

use crate::{
    error::{ErrorKind, Raised},
    probe,
    test::BodyResult,
};

mod failure;
pub use failure::*;

#[doc(hidden)]
pub mod render;

/// Fail unless `assertion` is true.
pub fn assert_true(assertion: bool, on_fail: &str) -> Result<(), AssertionFailure> {
    match assertion {
        true => Ok(()),
        false => Err(AssertionFailure::boolean(on_fail)),
    }
}

/// Fail unless `assertion` is false.
pub fn assert_false(assertion: bool, on_fail: &str) -> Result<(), AssertionFailure> {
    assert_true(!assertion, on_fail)
}

#[doc(hidden)]
pub fn check_equality<R>(
    holds: bool,
    equal: bool,
    render: R,
    on_fail: &str,
) -> Result<(), AssertionFailure>
where
    R: FnOnce() -> Option<(String, String)>,
{
    match holds {
        true => Ok(()),
        false => Err(AssertionFailure::equality(on_fail, render(), equal)),
    }
}

/// Fail unless `x == y`.
pub fn assert_equals<T, U>(x: T, y: U, on_fail: &str) -> Result<(), AssertionFailure>
where
    T: PartialEq<U> + Debug,
    U: Debug,
{
    let equal = x == y;
    check_equality(equal, equal, || Some((format!("{x:?}"), format!("{y:?}"))), on_fail)
}

/// Fail if `x == y`.
pub fn assert_not_equals<T, U>(x: T, y: U, on_fail: &str) -> Result<(), AssertionFailure>
where
    T: PartialEq<U> + Debug,
    U: Debug,
{
    let equal = x == y;
    check_equality(!equal, equal, || Some((format!("{x:?}"), format!("{y:?}"))), on_fail)
}

/// Fail unless `y - margin <= x <= y + margin`.
///
/// The check never overflows, so integers near their bounds are fine. A NaN
/// anywhere fails.
pub fn assert_approx<T>(x: T, y: T, on_fail: &str, margin: T) -> Result<(), AssertionFailure>
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T> + Debug,
{
    let within = within_margin(x, y, margin);
    check_equality(
        within,
        x == y,
        || Some((format!("{x:?}"), format!("{y:?}"))),
        on_fail,
    )
}

fn within_margin<T>(x: T, y: T, margin: T) -> bool
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    let (high, low) = match x.partial_cmp(&y) {
        Some(std::cmp::Ordering::Less) => (y, x),
        Some(_) => (x, y),
        None => return false,
    };
    let zero = low - low;
    if margin < zero {
        return false;
    }
    match low >= zero || high < zero {
        // same sign, the distance fits into T
        true => high - low <= margin,
        // low < 0 <= high and margin >= 0, so low + margin stays in range
        false => high <= low + margin,
    }
}

/// Fail unless `f` raises a recognized error of kind `expected`.
///
/// `f` may raise by returning `Err(..)` or by panicking. Anything raised,
/// including an [`AssertionFailure`] from inside `f`, is turned into this
/// assertion's own failure and never passed through as is.
pub fn assert_throws<F, R>(expected: ErrorKind, f: F) -> Result<(), AssertionFailure>
where
    F: FnOnce() -> R,
    R: Into<BodyResult>,
{
    let (what, message) = match probe::catch(f) {
        Ok(()) => {
            return Err(AssertionFailure::throws(format!(
                "Function didn't throw error of kind \"{expected}\"."
            )));
        }
        Err(Raised::Error(error)) if expected.matches(&error) => return Ok(()),
        Err(Raised::Error(error)) => (error.kind.to_string(), error.message),
        Err(Raised::Assertion(failure)) => {
            (String::from("assertion failure"), failure.message().to_owned())
        }
        Err(Raised::Unknown) => {
            return Err(AssertionFailure::throws("Function threw unknown error."));
        }
    };

    Err(AssertionFailure::throws(format!(
        "Function didn't throw expected error kind \"{expected}\". \
         Instead, it threw {what} with message: \"{message}\""
    )))
}

/// Fail unless `f` raises something whose message is exactly `expected`.
pub fn assert_throws_message<F, R>(expected: &str, f: F) -> Result<(), AssertionFailure>
where
    F: FnOnce() -> R,
    R: Into<BodyResult>,
{
    let raised = match probe::catch(f) {
        Ok(()) => return Err(AssertionFailure::throws("Function did not throw an error.")),
        Err(raised) => raised,
    };

    match raised.message() {
        Some(got) if got == expected => Ok(()),
        Some(got) => Err(AssertionFailure::throws(format!(
            "Didn't get the correct error message. Expected: \"{expected}\", Got: \"{got}\""
        ))),
        None => Err(AssertionFailure::throws("Function threw unknown error.")),
    }
}

/// [`assert_true`](crate::assert::assert_true) with an optional message.
#[macro_export]
macro_rules! assert_true {
    ($assertion:expr $(,)?) => {
        $crate::assert::assert_true($assertion, "")
    };
    ($assertion:expr, $on_fail:expr $(,)?) => {
        $crate::assert::assert_true(
            $assertion,
            ::core::convert::AsRef::<str>::as_ref(&$on_fail),
        )
    };
}

/// [`assert_false`](crate::assert::assert_false) with an optional message.
#[macro_export]
macro_rules! assert_false {
    ($assertion:expr $(,)?) => {
        $crate::assert::assert_false($assertion, "")
    };
    ($assertion:expr, $on_fail:expr $(,)?) => {
        $crate::assert::assert_false(
            $assertion,
            ::core::convert::AsRef::<str>::as_ref(&$on_fail),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_equality {
    (@equal $equal:ident) => {
        $equal
    };
    (@not_equal $equal:ident) => {
        !$equal
    };
    ($holds:ident, $left:expr, $right:expr, $on_fail:expr) => {{
        #[allow(unused_imports)]
        use $crate::assert::render::{RenderDebug as _, RenderOpaque as _};
        match (&$left, &$right) {
            (left, right) => {
                let equal = *left == *right;
                let holds = $crate::__check_equality!(@$holds equal);
                $crate::assert::check_equality(
                    holds,
                    equal,
                    || {
                        (&$crate::assert::render::Render(left))
                            .render()
                            .zip((&$crate::assert::render::Render(right)).render())
                    },
                    ::core::convert::AsRef::<str>::as_ref(&$on_fail),
                )
            }
        }
    }};
}

/// Equality assertion that renders the values when both are [`Debug`].
///
/// ```
/// use multitest::prelude::*;
///
/// #[derive(PartialEq)]
/// struct Opaque(u8);
///
/// let failure = assert_equals!(Opaque(1), Opaque(2), "opaque").unwrap_err();
/// assert_eq!(failure.message(), "opaque(equality assertion)");
///
/// let failure = assert_equals!(1, 2, "numbers").unwrap_err();
/// assert_eq!(failure.message(), "numbers (1 != 2)");
/// ```
#[macro_export]
macro_rules! assert_equals {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_equality!(equal, $left, $right, "")
    };
    ($left:expr, $right:expr, $on_fail:expr $(,)?) => {
        $crate::__check_equality!(equal, $left, $right, $on_fail)
    };
}

/// Inequality assertion, see [`assert_equals!`](crate::assert_equals).
#[macro_export]
macro_rules! assert_not_equals {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_equality!(not_equal, $left, $right, "")
    };
    ($left:expr, $right:expr, $on_fail:expr $(,)?) => {
        $crate::__check_equality!(not_equal, $left, $right, $on_fail)
    };
}

/// [`assert_approx`](crate::assert::assert_approx) with optional message and margin.
///
/// The margin defaults to `0.0001`.
#[macro_export]
macro_rules! assert_approx {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert::assert_approx($left, $right, "", 0.0001)
    };
    ($left:expr, $right:expr, $on_fail:expr $(,)?) => {
        $crate::assert::assert_approx(
            $left,
            $right,
            ::core::convert::AsRef::<str>::as_ref(&$on_fail),
            0.0001,
        )
    };
    ($left:expr, $right:expr, $on_fail:expr, $margin:expr $(,)?) => {
        $crate::assert::assert_approx(
            $left,
            $right,
            ::core::convert::AsRef::<str>::as_ref(&$on_fail),
            $margin,
        )
    };
}
