//! Foundation types for chirp.
//!
//! Every other chirp crate depends on `chirp-types`.
//!
//! # Key Types
//!
//! - [`Identity`] — Canonical caller identity, guaranteed free of the post-key separator
//! - [`PostSeq`] — Global post sequence number with order-preserving text form

pub mod error;
pub mod identity;
pub mod seq;

pub use error::TypeError;
pub use identity::{Identity, POST_KEY_SEPARATOR};
pub use seq::PostSeq;
