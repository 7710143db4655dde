//! Registry error types.

/// Errors returned by [`Registry`](crate::Registry) operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("{0} is already registered")]
    AlreadyRegistered(String),

    #[error("{0} not found")]
    NotFound(String),

    /// The exercise exists but carries no implementation.
    #[error("{0} has no implementation")]
    NotImplemented(String),

    /// The exercise implementation returned an error.
    #[error("{name} failed: {source}")]
    Failed {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}
