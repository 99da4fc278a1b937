//! The append-only post log.

use std::collections::HashSet;

use chirp_tree::OrderedMap;
use chirp_types::{Identity, PostSeq};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::key::PostKey;
use crate::record::Post;

/// Ordered map of [`PostKey`] (encoded) to [`Post`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostStore {
    posts: OrderedMap<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a post under `<author>_<seq>`.
    ///
    /// `seq` is the current value of the caller's counter; advancing it is the
    /// caller's job. A key that is already taken means the counter was reused:
    /// the existing post is left untouched and `KeyCollision` is returned.
    pub fn append(
        &mut self,
        author: &Identity,
        body: impl Into<String>,
        created_at: impl Into<String>,
        seq: PostSeq,
    ) -> StoreResult<PostKey> {
        let key = PostKey::new(author.clone(), seq);
        let encoded = key.to_string();
        if self.posts.contains_key(&encoded) {
            warn!(key = %encoded, "refusing to overwrite existing post");
            return Err(StoreError::KeyCollision { key: encoded });
        }

        let post = Post {
            author: author.clone(),
            created_at: created_at.into(),
            body: body.into(),
        };
        self.posts.set(encoded.as_str(), post);
        Ok(key)
    }

    pub fn get(&self, key: &PostKey) -> Option<&Post> {
        self.posts.get(&key.to_string())
    }

    /// Posts by `author` in creation order.
    ///
    /// Scans `"<author>_"` up to its prefix successor, so neighbouring
    /// identities (`A` vs `AB`) never bleed into each other. Each call starts
    /// a fresh scan.
    pub fn list_by_author(&self, author: &Identity) -> impl DoubleEndedIterator<Item = &Post> + '_ {
        self.posts
            .scan_prefix(&PostKey::author_prefix(author))
            .map(|(_, post)| post)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Check every stored key against its post and against the counter.
    ///
    /// Each key must decode, name the post's own author, carry a sequence
    /// number below `next_seq`, and use a sequence number no other key uses.
    pub fn verify(&self, next_seq: PostSeq) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(self.posts.len());
        for (raw, post) in &self.posts {
            let key = PostKey::parse(raw)?;
            if key.author() != &post.author {
                return Err(violation(raw, format!("post authored by {}", post.author)));
            }
            if key.seq() >= next_seq {
                return Err(violation(
                    raw,
                    format!("sequence {} not below counter {}", key.seq().value(), next_seq.value()),
                ));
            }
            if !seen.insert(key.seq()) {
                return Err(violation(raw, format!("sequence {} reused", key.seq().value())));
            }
        }
        Ok(())
    }
}

fn violation(key: &str, reason: String) -> StoreError {
    warn!(key, %reason, "post store invariant violated");
    StoreError::InvariantViolation {
        key: key.to_string(),
        reason,
    }
}
