#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched the lookup. `key` is whatever the caller searched by
    /// (an id, an email, ...), already formatted for display.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
