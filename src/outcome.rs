use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// The classification of a single test run.
///
/// A test starts out as [`StatusCode::NotRun`] and ends up in exactly one of
/// the other states once run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    #[default]
    NotRun,
    Passed,
    AssertionFailure,
    UnexpectedError,
    DidntThrowExpected,
    UnknownFailure,
}

impl StatusCode {
    pub fn passed(&self) -> bool {
        matches!(self, StatusCode::Passed)
    }

    pub fn not_run(&self) -> bool {
        matches!(self, StatusCode::NotRun)
    }

    /// Whether the test ran and did not pass.
    pub fn failed(&self) -> bool {
        !matches!(self, StatusCode::Passed | StatusCode::NotRun)
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatusCode::NotRun => "hasn't been executed",
            StatusCode::Passed => "passed",
            StatusCode::AssertionFailure => "failed in assertion",
            StatusCode::UnexpectedError => "threw unexpected error",
            StatusCode::DidntThrowExpected => "didn't throw expected error",
            StatusCode::UnknownFailure => "unknown failure",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Snapshot of a test's state after its last run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct TestResult {
    pub name: Cow<'static, str>,
    pub status: StatusCode,
    pub failure_detail: String,
}

impl TestResult {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        status: StatusCode,
        failure_detail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            failure_detail: failure_detail.into(),
        }
    }

    pub fn not_run(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, StatusCode::NotRun, String::new())
    }

    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }

    pub fn status_text(&self) -> &'static str {
        self.status.description()
    }

    /// One line plain text report, e.g. `TEST "push" ✕ failed in assertion. Reason: ...`.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.failed() { '✕' } else { '✓' };
        write!(f, "TEST \"{}\" {mark} {}.", self.name, self.status)?;
        if self.failed() {
            write!(f, " Reason: {}", self.failure_detail)?;
        }
        Ok(())
    }
}
