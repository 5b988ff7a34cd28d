use thiserror::Error;

/// Top-level error type for the Koch curve generator.
#[derive(Debug, Error)]
pub enum KochError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

impl KochError {
    /// Returns `true` if the error was caused by invalid caller input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Generation(GenerationError::InvalidInput(_)))
    }

    /// Returns `true` if the error was caused by a resource ceiling.
    #[must_use]
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self, Self::Generation(GenerationError::ResourceExceeded { .. }))
    }
}

/// Errors related to motif construction and curve generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{resource} limit exceeded: requested {requested}, limit is {limit}")]
    ResourceExceeded {
        resource: &'static str,
        requested: u128,
        limit: u128,
    },
}

/// Errors related to preset catalogues.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("malformed catalogue: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot serialize catalogue: {0}")]
    Serialize(serde_json::Error),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Convenience type alias for results using [`KochError`].
pub type Result<T> = std::result::Result<T, KochError>;
