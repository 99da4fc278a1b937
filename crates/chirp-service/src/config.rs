use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Whose posts appear under a rendered profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostScope {
    /// Posts written by the profile being viewed.
    #[default]
    Profile,
    /// Posts written by the viewer, whichever profile is shown. Anonymous
    /// viewers see no posts.
    Caller,
}

/// Service configuration, usually read from a TOML file.
///
/// ```toml
/// post_scope = "profile"
/// state_file = "chirp-state.json"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub post_scope: PostScope,
    /// Where the CLI keeps its JSON snapshot.
    pub state_file: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn from_toml_str(text: &str) -> ServiceResult<Self> {
        toml::from_str(text).map_err(|e| ServiceError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> ServiceResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
