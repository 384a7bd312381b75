use thiserror::Error;

pub type Result<T> = std::result::Result<T, PointError>;

/// Errors returned by [`Point`](crate::Point) parsing and queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PointError {
    /// Text that is not a point in `"x,y"` form.
    #[error("Invalid point format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },
    /// An argument outside its accepted range, such as a non-positive distance.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PointError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        PointError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
