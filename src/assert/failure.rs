use thiserror::Error;

/// Which kind of check produced an [`AssertionFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AssertionKind {
    Boolean,
    Equality,
    Throws,
    Custom,
}

/// The failure value produced by the assertion helpers.
///
/// A test body that raises an `AssertionFailure` always ends up as
/// [`StatusCode::AssertionFailure`](crate::outcome::StatusCode::AssertionFailure),
/// even when the test expects an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    kind: AssertionKind,
    message: String,
}

impl AssertionFailure {
    /// A custom failure, for checks the helpers do not cover.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: AssertionKind::Custom,
            message: message.into(),
        }
    }

    pub fn boolean(on_fail: &str) -> Self {
        Self {
            kind: AssertionKind::Boolean,
            message: format!("{on_fail} (boolean assertion)"),
        }
    }

    /// An equality failure.
    ///
    /// With rendered values the message reads `"<on_fail> (<x> != <y>)"`, the
    /// operator reflecting whether the values actually compared equal.
    /// Without them the generic `"(equality assertion)"` suffix is used.
    pub fn equality(on_fail: &str, rendered: Option<(String, String)>, equal: bool) -> Self {
        let message = match rendered {
            Some((x, y)) => {
                let op = if equal { "==" } else { "!=" };
                format!("{on_fail} ({x} {op} {y})")
            }
            None => format!("{on_fail}(equality assertion)"),
        };
        Self {
            kind: AssertionKind::Equality,
            message,
        }
    }

    pub fn throws(message: impl Into<String>) -> Self {
        Self {
            kind: AssertionKind::Throws,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> AssertionKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
