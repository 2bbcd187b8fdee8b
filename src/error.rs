use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SumError {
    /// At least one parsed number was negative. Carries every negative
    /// value, in order of appearance.
    #[error("negatives not allowed: {}", join_values(.0))]
    NegativesNotAllowed(Vec<i64>),
    #[error("invalid number: {token:?}")]
    InvalidNumber { token: String },
    #[error("malformed delimiter header {header:?}: {reason}")]
    MalformedHeader { header: String, reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type SumResult<T> = Result<T, SumError>;

impl SumError {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        SumError::Internal(message.into())
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
