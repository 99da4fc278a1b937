use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Separator between the author and the sequence number in a post key.
///
/// An [`Identity`] can never contain it, so `"<identity>_"` is a prefix owned
/// by exactly one author.
pub const POST_KEY_SEPARATOR: char = '_';

/// Canonical identity of a caller.
///
/// The string is opaque: the only structure the store relies on is that it is
/// non-empty and free of [`POST_KEY_SEPARATOR`]. Ordering is plain
/// lexicographic string ordering, which is the directory listing order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Validate and wrap a raw identity string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypeError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(TypeError::EmptyIdentity);
        }
        if raw.contains(POST_KEY_SEPARATOR) {
            return Err(TypeError::SeparatorInIdentity {
                identity: raw,
                separator: POST_KEY_SEPARATOR,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identity {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_accepts_plain_identity() {
        let id = Identity::parse("g1alice").unwrap();
        assert_eq!(id.as_str(), "g1alice");
        assert_eq!(id.to_string(), "g1alice");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Identity::parse(""), Err(TypeError::EmptyIdentity));
    }

    #[test]
    fn parse_rejects_separator() {
        let err = Identity::parse("alice_1").unwrap_err();
        assert!(matches!(err, TypeError::SeparatorInIdentity { .. }));
    }

    #[test]
    fn from_str_matches_parse() {
        let id: Identity = "bob".parse().unwrap();
        assert_eq!(id, Identity::parse("bob").unwrap());
        assert!("".parse::<Identity>().is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Identity::parse("A").unwrap();
        let ab = Identity::parse("AB").unwrap();
        let b = Identity::parse("B").unwrap();
        assert!(a < ab);
        assert!(ab < b);
    }

    #[test]
    fn serde_roundtrip() {
        let id = Identity::parse("g1xyz").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"g1xyz\"");
        let parsed: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Identity>("\"bad_id\"").is_err());
        assert!(serde_json::from_str::<Identity>("\"\"").is_err());
    }

    proptest! {
        #[test]
        fn parse_never_yields_separator(raw in ".*") {
            if let Ok(id) = Identity::parse(raw.clone()) {
                prop_assert!(!id.as_str().contains(POST_KEY_SEPARATOR));
                prop_assert_eq!(id.as_str(), raw.as_str());
            }
        }
    }
}
