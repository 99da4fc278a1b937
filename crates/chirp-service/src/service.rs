use std::sync::{Mutex, MutexGuard};

use chirp_store::{Post, PostKey, Profile};
use chirp_types::{Identity, PostSeq};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{PostScope, ServiceConfig};
use crate::error::{ServiceError, ServiceResult};
use crate::render::{self, ProfileView};
use crate::state::BlogState;

/// The blog: a profile directory, a post log, and the global post counter.
///
/// All state sits behind one mutex and every public method holds it for its
/// whole run, scans included. Operations are therefore serialized, and a
/// reader never sees a post without its counter increment.
pub struct BlogService<C = SystemClock> {
    config: ServiceConfig,
    clock: C,
    state: Mutex<BlogState>,
}

impl BlogService<SystemClock> {
    /// An empty service stamping posts with wall-clock time.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BlogService<C> {
    pub fn with_clock(config: ServiceConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            state: Mutex::new(BlogState::default()),
        }
    }

    /// Resume from previously captured state after checking its invariants.
    pub fn from_state(config: ServiceConfig, clock: C, state: BlogState) -> ServiceResult<Self> {
        if let Err(e) = state.verify() {
            warn!(error = %e, "rejecting inconsistent blog state");
            return Err(e);
        }
        debug!(
            profiles = state.profiles.len(),
            posts = state.posts.len(),
            next_seq = state.next_seq.value(),
            "blog state restored"
        );
        Ok(Self {
            config,
            clock,
            state: Mutex::new(state),
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn lock(&self) -> ServiceResult<MutexGuard<'_, BlogState>> {
        self.state.lock().map_err(|_| ServiceError::LockPoisoned)
    }

    // ---- Mutations ----

    /// Create or fully replace the caller's profile.
    pub fn create_profile(
        &self,
        caller: &Identity,
        name: &str,
        bio: &str,
        href: &str,
    ) -> ServiceResult<()> {
        let mut state = self.lock()?;
        let replaced = state
            .profiles
            .create_or_replace(caller.clone(), name, bio, href);
        info!(caller = %caller, replaced, "profile saved");
        Ok(())
    }

    /// Append a post by the caller under the current counter value, then
    /// advance the counter by one.
    ///
    /// Both steps happen under the same lock. If the append fails the counter
    /// is not advanced. The counter refuses to hand out `u64::MAX`, so it can
    /// always be advanced after a successful append.
    pub fn post(&self, caller: &Identity, message: &str) -> ServiceResult<PostKey> {
        let mut state = self.lock()?;
        let seq = state.next_seq;
        let next = seq.next().ok_or(ServiceError::CounterExhausted)?;
        let key = state.posts.append(caller, message, self.clock.now(), seq)?;
        state.next_seq = next;
        info!(caller = %caller, key = %key, "post appended");
        Ok(key)
    }

    // ---- Rendering ----

    /// One `* <name>` line per profile in ascending identity order.
    pub fn render_home(&self) -> ServiceResult<String> {
        let state = self.lock()?;
        debug!(profiles = state.profiles.len(), "rendering home");
        Ok(render::render_home(state.profiles.list_all()))
    }

    /// Look up a profile page.
    ///
    /// Which posts are listed depends on [`PostScope`]: the viewed profile's
    /// own posts (default), or the viewer's posts.
    pub fn view_profile(
        &self,
        viewer: Option<&Identity>,
        identity: &str,
    ) -> ServiceResult<ProfileView> {
        let state = self.lock()?;
        let Some(profile) = state.profiles.get(identity) else {
            debug!(identity, "profile not found");
            return Ok(ProfileView::NotFound);
        };
        let author = match self.config.post_scope {
            PostScope::Profile => Some(&profile.identity),
            PostScope::Caller => viewer,
        };
        let posts = match author {
            Some(author) => state.posts.list_by_author(author).cloned().collect(),
            None => Vec::new(),
        };
        Ok(ProfileView::Found {
            profile: profile.clone(),
            posts,
        })
    }

    /// `"not found"`, or the profile header followed by its posts.
    pub fn render_profile(&self, viewer: Option<&Identity>, identity: &str) -> ServiceResult<String> {
        Ok(self.view_profile(viewer, identity)?.render())
    }

    // ---- Queries ----

    pub fn profile(&self, identity: &str) -> ServiceResult<Option<Profile>> {
        Ok(self.lock()?.profiles.get(identity).cloned())
    }

    /// Posts by `author` in creation order.
    pub fn posts_by(&self, author: &Identity) -> ServiceResult<Vec<Post>> {
        Ok(self.lock()?.posts.list_by_author(author).cloned().collect())
    }

    /// Sequence number the next post will receive.
    pub fn next_sequence(&self) -> ServiceResult<PostSeq> {
        Ok(self.lock()?.next_seq)
    }

    pub fn post_count(&self) -> ServiceResult<usize> {
        Ok(self.lock()?.posts.len())
    }

    pub fn profile_count(&self) -> ServiceResult<usize> {
        Ok(self.lock()?.profiles.len())
    }

    /// A consistent copy of the whole state.
    pub fn snapshot(&self) -> ServiceResult<BlogState> {
        Ok(self.lock()?.clone())
    }
}

impl<C> std::fmt::Debug for BlogService<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
