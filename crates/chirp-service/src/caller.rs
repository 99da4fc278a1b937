//! Caller identity resolution.
//!
//! The service never works out who is calling; the host hands it an
//! [`Identity`]. Hosts obtain that identity through a [`CallerProvider`].

use chirp_types::Identity;

use crate::error::{ServiceError, ServiceResult};

/// Environment variable read by [`EnvCaller::default`].
pub const DEFAULT_CALLER_VAR: &str = "CHIRP_CALLER";

/// Resolves the identity of the current caller.
pub trait CallerProvider: Send + Sync {
    fn current_caller(&self) -> ServiceResult<Identity>;
}

/// A caller fixed at construction.
#[derive(Clone, Debug)]
pub struct StaticCaller(Identity);

impl StaticCaller {
    pub fn new(identity: Identity) -> Self {
        Self(identity)
    }
}

impl CallerProvider for StaticCaller {
    fn current_caller(&self) -> ServiceResult<Identity> {
        Ok(self.0.clone())
    }
}

/// Reads the caller from an environment variable on every call.
#[derive(Clone, Debug)]
pub struct EnvCaller {
    var: String,
}

impl EnvCaller {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCaller {
    fn default() -> Self {
        Self::new(DEFAULT_CALLER_VAR)
    }
}

impl CallerProvider for EnvCaller {
    fn current_caller(&self) -> ServiceResult<Identity> {
        let raw = std::env::var(&self.var)
            .map_err(|e| ServiceError::NoCaller(format!("{}: {e}", self.var)))?;
        Ok(Identity::parse(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_caller_returns_identity() {
        let id = Identity::parse("g1alice").unwrap();
        let provider = StaticCaller::new(id.clone());
        assert_eq!(provider.current_caller().unwrap(), id);
    }

    #[test]
    fn env_caller_reads_variable() {
        let var = "CHIRP_TEST_CALLER_PRESENT";
        std::env::set_var(var, "g1bob");
        let provider = EnvCaller::new(var);
        assert_eq!(provider.current_caller().unwrap().as_str(), "g1bob");
        std::env::remove_var(var);
    }

    #[test]
    fn env_caller_missing_variable() {
        let provider = EnvCaller::new("CHIRP_TEST_CALLER_ABSENT");
        assert!(matches!(
            provider.current_caller(),
            Err(ServiceError::NoCaller(_))
        ));
    }

    #[test]
    fn env_caller_rejects_invalid_identity() {
        let var = "CHIRP_TEST_CALLER_INVALID";
        std::env::set_var(var, "has_separator");
        let provider = EnvCaller::new(var);
        assert!(matches!(
            provider.current_caller(),
            Err(ServiceError::Identity(_))
        ));
        std::env::remove_var(var);
    }
}
