use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("identity must not be empty")]
    EmptyIdentity,

    #[error("identity {identity:?} contains the post key separator {separator:?}")]
    SeparatorInIdentity { identity: String, separator: char },

    #[error("invalid sequence number {0:?}")]
    InvalidSeq(String),
}
