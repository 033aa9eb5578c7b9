//! Run a set of tests against several differently constructed subjects.
//!
//! Register constructors and tests on a [`MultiTest`], call
//! [`MultiTest::run`] and read back one [`TestResult`](outcome::TestResult)
//! per constructor and test. Test bodies use the helpers in [`assert`] and
//! report failures by returning them, panics are caught and classified.

pub mod assert;
pub mod config;
pub mod error;
pub mod formatter;
pub mod outcome;
pub mod probe;

mod harness;
pub use harness::*;


/// Everything a typical test file needs.
pub mod prelude {
    pub use crate::{
        HarnessError, MultiTest,
        assert::{
            AssertionFailure, assert_approx, assert_equals, assert_false, assert_not_equals,
            assert_throws, assert_throws_message, assert_true,
        },
        assert_approx, assert_equals, assert_false, assert_not_equals, assert_true,
        error::{ErrorKind, Raised, TestError},
        outcome::{StatusCode, TestResult},
        test::Test,
    };
}

pub use error::HarnessError;
