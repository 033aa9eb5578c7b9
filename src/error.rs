//! Error kinds and the values a test body can raise.
//!
//! Test bodies report failure either by returning `Err(..)` or by panicking.
//! Both paths end up as a [`Raised`] value, which the [`Test`](crate::test::Test)
//! state machine classifies into a [`StatusCode`](crate::outcome::StatusCode).
//!
//! Structural problems of the harness itself are reported as [`HarnessError`]
//! and are never classified, they always abort the run.

use std::{borrow::Cow, fmt, io};

use thiserror::Error;

use crate::assert::AssertionFailure;

/// The classification of a recognized error.
///
/// Expected errors are matched by kind, see [`ErrorKind::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    Logic,
    InvalidArgument,
    Range,
    Type,
    Runtime,
    Io,

    /// A panic with a textual payload.
    Panic,

    /// Any user defined kind, compared by name.
    Custom(Cow<'static, str>),
}

impl ErrorKind {
    /// Whether `error` is of exactly this kind.
    pub fn matches(&self, error: &TestError) -> bool {
        *self == error.kind
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Logic => f.write_str("logic error"),
            ErrorKind::InvalidArgument => f.write_str("invalid argument"),
            ErrorKind::Range => f.write_str("range error"),
            ErrorKind::Type => f.write_str("type error"),
            ErrorKind::Runtime => f.write_str("runtime error"),
            ErrorKind::Io => f.write_str("io error"),
            ErrorKind::Panic => f.write_str("panic"),
            ErrorKind::Custom(name) => f.write_str(name),
        }
    }
}

impl From<&'static str> for ErrorKind {
    fn from(value: &'static str) -> Self {
        Self::Custom(value.into())
    }
}

impl From<String> for ErrorKind {
    fn from(value: String) -> Self {
        Self::Custom(value.into())
    }
}

/// A recognized error: a kind plus a textual description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TestError {
    pub kind: ErrorKind,
    pub message: String,
}

impl TestError {
    pub fn new(kind: impl Into<ErrorKind>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn logic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Logic, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, message)
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Runtime, message)
    }
}

/// Anything a test body can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Raised {
    /// An assertion helper failed. Never a legitimate expected error.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// A recognized error with a kind and a message.
    #[error(transparent)]
    Error(#[from] TestError),

    /// Something without a textual description, e.g. a panic with an opaque payload.
    #[error("unknown failure")]
    Unknown,
}

impl Raised {
    /// The textual description, if the raised value has one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Raised::Assertion(failure) => Some(failure.message()),
            Raised::Error(error) => Some(&error.message),
            Raised::Unknown => None,
        }
    }
}

impl From<&str> for Raised {
    fn from(value: &str) -> Self {
        Raised::Error(TestError::runtime(value))
    }
}

impl From<String> for Raised {
    fn from(value: String) -> Self {
        Raised::Error(TestError::runtime(value))
    }
}

impl From<io::Error> for Raised {
    fn from(value: io::Error) -> Self {
        Raised::Error(TestError::new(ErrorKind::Io, value.to_string()))
    }
}

impl From<Box<dyn std::error::Error>> for Raised {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Raised::Error(TestError::runtime(value.to_string()))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Raised {
    fn from(value: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Raised::Error(TestError::runtime(value.to_string()))
    }
}

/// Structural errors that abort [`MultiTest::run`](crate::MultiTest::run).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HarnessError {
    #[error(
        "no constructor defined, add one with `MultiTest::add_constructor` or enable the default constructor"
    )]
    NoConstructor,

    #[error("constructor \"{constructor}\" left one of the subjects undefined")]
    UndefinedInstance { constructor: String },
}
