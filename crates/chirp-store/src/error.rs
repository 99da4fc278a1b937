use chirp_types::TypeError;

/// Errors from profile and post store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A post already exists under this key. The sequence counter was reused.
    #[error("post key already in use: {key}")]
    KeyCollision { key: String },

    /// A stored key does not decode as `<identity>_<sequence>`.
    #[error("malformed post key {key:?}: {reason}")]
    MalformedKey { key: String, reason: String },

    /// Stored data disagrees with its key or with the sequence counter.
    #[error("invariant violation at {key:?}: {reason}")]
    InvariantViolation { key: String, reason: String },

    #[error("invalid identity: {0}")]
    Type(#[from] TypeError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
