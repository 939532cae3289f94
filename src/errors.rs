use thiserror::Error;

/// Errors raised by a pattern match chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The chain was used in a way its current state forbids,
    /// e.g. retyping the result after a clause has already matched.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// `otherwise_throw` was reached with no clause matched.
    #[error("The pattern did not match any cases.")]
    MatchFailure,
}

// Type alias for results that use `MatchError` as the error type
pub type Result<T> = std::result::Result<T, MatchError>;
