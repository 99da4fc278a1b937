use chrono::{SecondsFormat, Utc};

/// Source of post creation timestamps.
///
/// The service stores whatever string the clock returns and never parses it.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Wall-clock time as RFC 3339 UTC, second precision.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Always returns the same timestamp. For tests and replays.
#[derive(Clone, Debug)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_rfc3339_utc() {
        let now = SystemClock.now();
        assert!(now.ends_with('Z'), "{now}");
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }

    #[test]
    fn fixed_clock_repeats() {
        let clock = FixedClock::new("2024-01-01T00:00:00Z");
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), "2024-01-01T00:00:00Z");
    }
}
