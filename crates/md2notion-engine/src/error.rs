use thiserror::Error;

/// Errors produced by the conversion engine.
///
/// Malformed Markdown is never an error: anything that does not form a
/// construct is literal text. The only failure is a broken internal
/// invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl ConversionError {
    pub fn internal(msg: impl Into<String>) -> Self {
        ConversionError::Internal(msg.into())
    }
}
