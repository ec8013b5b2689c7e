use thiserror::Error;

/// Error taxonomy shared by every service in the crate.
///
/// Lookup misses on single-entity operations surface as [`ServiceError::NotFound`];
/// batch operations skip missing ids instead of failing, so they never return it.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Deliberately carries no detail so a failed login cannot be used to
    /// probe which usernames exist.
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        ServiceError::NotFound(format!("{} {} not found", entity, id))
    }
}
