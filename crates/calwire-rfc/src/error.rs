use thiserror::Error;

/// Content line encoding errors
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The wire format has no escape for a double quote inside a quoted
    /// parameter value, so the value is rejected outright rather than
    /// silently mangled.
    #[error("invalid parameter value (contains double quote): '{0}'")]
    InvalidParameterValue(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type EncodeResult<T> = std::result::Result<T, EncodeError>;
