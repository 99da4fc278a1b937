use chirp_store::{PostStore, ProfileStore};
use chirp_types::PostSeq;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

/// Everything the service owns: both stores and the global post counter.
///
/// This is also the snapshot format written by
/// [`BlogService::save`](crate::BlogService::save).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogState {
    pub profiles: ProfileStore,
    pub posts: PostStore,
    /// Sequence number the next post will receive.
    pub next_seq: PostSeq,
}

impl BlogState {
    /// Check store invariants and that the counter is ahead of every post.
    pub fn verify(&self) -> ServiceResult<()> {
        self.profiles.verify()?;
        self.posts.verify(self.next_seq)?;
        Ok(())
    }
}
