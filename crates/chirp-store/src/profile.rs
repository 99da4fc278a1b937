//! The profile directory.

use chirp_tree::OrderedMap;
use chirp_types::Identity;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::record::Profile;

/// Ordered map of identity to [`Profile`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileStore {
    profiles: OrderedMap<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the profile for `identity`, replacing any previous one in full.
    ///
    /// Returns `true` if a profile was replaced.
    pub fn create_or_replace(
        &mut self,
        identity: Identity,
        name: impl Into<String>,
        bio: impl Into<String>,
        href: impl Into<String>,
    ) -> bool {
        let key = identity.as_str().to_string();
        let profile = Profile {
            identity,
            name: name.into(),
            bio: bio.into(),
            href: href.into(),
        };
        self.profiles.set(key.as_str(), profile)
    }

    pub fn get(&self, identity: &str) -> Option<&Profile> {
        self.profiles.get(identity)
    }

    /// Every profile in ascending identity order.
    ///
    /// Each call starts a fresh scan.
    pub fn list_all(&self) -> impl DoubleEndedIterator<Item = &Profile> + '_ {
        self.profiles.iter().map(|(_, profile)| profile)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Check that every entry is stored under its own identity.
    pub fn verify(&self) -> StoreResult<()> {
        for (key, profile) in &self.profiles {
            Identity::parse(key)?;
            if profile.identity.as_str() != key {
                warn!(key, identity = %profile.identity, "profile stored under foreign key");
                return Err(StoreError::InvariantViolation {
                    key: key.to_string(),
                    reason: format!("profile belongs to {}", profile.identity),
                });
            }
        }
        Ok(())
    }
}
