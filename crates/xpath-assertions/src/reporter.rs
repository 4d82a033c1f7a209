//! Failure reporting
//!
//! A check produces an [`Outcome`]; a failed outcome is handed to a
//! [`FailureReporter`]. The default reporter panics, which is how libtest
//! marks a test as failed. [`CollectingReporter`] records failures instead,
//! for soft assertions.

use std::cell::RefCell;
use std::fmt;
use tracing::debug;

/// A check that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    message: String,
    detail: Option<String>,
}

impl Failure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    /// Attach supporting detail; the message stays as it is
    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(Failure),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(failure) => Some(failure),
        }
    }
}

/// Host framework hook for raising a failure.
pub trait FailureReporter {
    fn report(&self, failure: Failure);
}

impl<R: FailureReporter + ?Sized> FailureReporter for &R {
    #[track_caller]
    fn report(&self, failure: Failure) {
        (**self).report(failure)
    }
}

/// Panics with the failure message, like `assert!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter {
    include_detail: bool,
}

impl PanicReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print the failure detail (node dumps) below the message
    pub fn with_detail() -> Self {
        Self {
            include_detail: true,
        }
    }
}

impl FailureReporter for PanicReporter {
    #[track_caller]
    fn report(&self, failure: Failure) {
        match failure.detail() {
            Some(detail) if self.include_detail => panic!("{}\n{}", failure.message(), detail),
            _ => panic!("{}", failure.message()),
        }
    }
}

/// Records failures so several checks can run before the test fails.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    failures: RefCell<Vec<Failure>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the failures recorded so far
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }

    /// Drain the recorded failures
    pub fn take(&self) -> Vec<Failure> {
        self.failures.take()
    }

    pub fn len(&self) -> usize {
        self.failures.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    /// Panic with every recorded message, one per line
    #[track_caller]
    pub fn assert_empty(&self) {
        let failures = self.failures.borrow();
        if !failures.is_empty() {
            let messages: Vec<&str> = failures.iter().map(Failure::message).collect();
            panic!(
                "{} xpath assertion(s) failed:\n{}",
                failures.len(),
                messages.join("\n")
            );
        }
    }
}

impl FailureReporter for CollectingReporter {
    fn report(&self, failure: Failure) {
        debug!(message = failure.message(), "recorded assertion failure");
        self.failures.borrow_mut().push(failure);
    }
}
