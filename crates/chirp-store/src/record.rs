use chirp_types::Identity;
use serde::{Deserialize, Serialize};

/// A user profile. One per identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    pub name: String,
    pub bio: String,
    pub href: String,
}

/// A single post. Never mutated once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub author: Identity,
    /// Opaque creation timestamp; never parsed.
    pub created_at: String,
    pub body: String,
}
