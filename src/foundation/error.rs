/// Convenience result type used across the editor core.
pub type TfeResult<T> = Result<T, TfeError>;

/// Error taxonomy for the few fallible entry points of the core.
///
/// Evaluation and rasterization never fail; out-of-domain input falls back to
/// well-defined values instead.
#[derive(thiserror::Error, Debug)]
pub enum TfeError {
    /// Invalid caller-provided data (ranges, buffers).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable render configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TfeError {
    /// Build a [`TfeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TfeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
