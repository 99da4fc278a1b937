//! Profile and post storage for chirp.
//!
//! Each store wraps a single [`chirp_tree::OrderedMap`]:
//!
//! - [`ProfileStore`] is keyed by the owner's identity. Iterating it in key
//!   order is the directory listing.
//! - [`PostStore`] is keyed by a composite [`PostKey`],
//!   `<identity>_<sequence>`. Because identities never contain `_` and the
//!   sequence is fixed-width, scanning the prefix `<identity>_` yields exactly
//!   one author's posts in creation order.
//!
//! # Design Rules
//!
//! 1. At most one profile per identity; writing again replaces it wholesale.
//! 2. Posts are append-only. A key that is already taken is an invariant
//!    violation and is reported, never overwritten.
//! 3. Sequence numbers are supplied by the caller, which owns the counter.
//!
//! # Modules
//!
//! - [`error`] — [`StoreError`] and the [`StoreResult`] alias
//! - [`key`] — [`PostKey`] construction and parsing
//! - [`record`] — [`Profile`] and [`Post`] records
//! - [`profile`] — [`ProfileStore`]
//! - [`post`] — [`PostStore`]

pub mod error;
pub mod key;
pub mod post;
pub mod profile;
pub mod record;

pub use error::{StoreError, StoreResult};
pub use key::PostKey;
pub use post::PostStore;
pub use profile::ProfileStore;
pub use record::{Post, Profile};
