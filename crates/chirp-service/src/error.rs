use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(#[from] chirp_store::StoreError),

    #[error("invalid identity: {0}")]
    Identity(#[from] chirp_types::TypeError),

    #[error("post sequence counter exhausted")]
    CounterExhausted,

    #[error("service state lock poisoned")]
    LockPoisoned,

    #[error("no caller identity: {0}")]
    NoCaller(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
