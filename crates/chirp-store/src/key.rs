//! Composite post keys.
//!
//! Layout: `<identity>` `_` `<sequence as 20 zero-padded digits>`.

use std::fmt;

use chirp_types::{Identity, PostSeq, POST_KEY_SEPARATOR};

use crate::error::{StoreError, StoreResult};

/// Key of a post in the [`PostStore`](crate::PostStore).
///
/// Not stored on its own: it is derived from the author and the global
/// sequence number at append time and can be decoded back from the map key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostKey {
    author: Identity,
    seq: PostSeq,
}

impl PostKey {
    pub fn new(author: Identity, seq: PostSeq) -> Self {
        Self { author, seq }
    }

    pub fn author(&self) -> &Identity {
        &self.author
    }

    pub fn seq(&self) -> PostSeq {
        self.seq
    }

    /// Prefix shared by every key of `author`, separator included.
    pub fn author_prefix(author: &Identity) -> String {
        format!("{author}{POST_KEY_SEPARATOR}")
    }

    /// Decode a key produced by `Display`.
    pub fn parse(key: &str) -> StoreResult<Self> {
        let (author, seq) =
            key.split_once(POST_KEY_SEPARATOR)
                .ok_or_else(|| StoreError::MalformedKey {
                    key: key.to_string(),
                    reason: "missing separator".into(),
                })?;
        let author = Identity::parse(author).map_err(|e| StoreError::MalformedKey {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        let seq = PostSeq::parse_padded(seq).map_err(|e| StoreError::MalformedKey {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { author, seq })
    }
}

impl fmt::Display for PostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.author, POST_KEY_SEPARATOR, self.seq)
    }
}
