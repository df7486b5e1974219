/// Convenience result type used across Borderline.
pub type BorderlineResult<T> = Result<T, BorderlineError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Degenerate geometry is never an error; it renders as nothing. Errors are reserved for
/// invalid configuration, unreadable input and unavailable backends.
#[derive(thiserror::Error, Debug)]
pub enum BorderlineError {
    /// Invalid user-provided options or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry that cannot be interpreted (e.g. a feature without polygon parts).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Failures inside a drawing backend.
    #[error("render error: {0}")]
    Render(String),

    /// A requested capability is not available in this build or environment.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BorderlineError {
    /// Build a [`BorderlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BorderlineError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`BorderlineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BorderlineError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`BorderlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error reports a missing capability the caller may work around.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

impl From<serde_json::Error> for BorderlineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
