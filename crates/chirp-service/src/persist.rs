//! JSON snapshots of the blog state.
//!
//! A snapshot is the serialized [`BlogState`]. Saving writes to a temporary
//! file in the destination directory and renames it into place, so a crash
//! mid-write leaves the previous snapshot intact. Loading re-verifies every
//! store invariant before the state is accepted.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::clock::Clock;
use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::service::BlogService;
use crate::state::BlogState;

impl<C: Clock> BlogService<C> {
    /// Atomically write the current state to `path`.
    pub fn save(&self, path: &Path) -> ServiceResult<()> {
        let state = self.snapshot()?;
        let json = serde_json::to_vec_pretty(&state)
            .map_err(|e| ServiceError::Snapshot(e.to_string()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        info!(
            path = %path.display(),
            profiles = state.profiles.len(),
            posts = state.posts.len(),
            "blog state saved"
        );
        Ok(())
    }

    /// Read a snapshot written by [`save`](Self::save).
    pub fn load(config: ServiceConfig, clock: C, path: &Path) -> ServiceResult<Self> {
        let bytes = fs::read(path)?;
        let state: BlogState =
            serde_json::from_slice(&bytes).map_err(|e| ServiceError::Snapshot(e.to_string()))?;
        Self::from_state(config, clock, state)
    }
}
