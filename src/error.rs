//! Error type shared by every fallible operation in the crate.
use thiserror::Error;

/// Failures surfaced by the trial engine and the batch runner.
///
/// All of them are precondition violations: a door number outside the
/// stage, a prize layout that is not exactly one car, or a trial count
/// that is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
