use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Width of the zero-padded decimal form. `u64::MAX` has 20 digits.
pub const SEQ_WIDTH: usize = 20;

/// Global post sequence number.
///
/// The text form is a fixed-width decimal, so comparing two formatted values
/// as strings gives the same answer as comparing the numbers. Post keys rely
/// on this to keep an author's posts in creation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostSeq(u64);

impl PostSeq {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The following sequence number, or `None` once the counter is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Parse the fixed-width form produced by `Display`.
    pub fn parse_padded(s: &str) -> Result<Self, TypeError> {
        if s.len() != SEQ_WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidSeq(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidSeq(s.to_string()))
    }
}

impl fmt::Display for PostSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = SEQ_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(PostSeq::new(0).to_string(), "00000000000000000000");
        assert_eq!(PostSeq::new(42).to_string(), "00000000000000000042");
        assert_eq!(PostSeq::new(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn next_increments_by_one() {
        assert_eq!(PostSeq::ZERO.next(), Some(PostSeq::new(1)));
        assert_eq!(PostSeq::new(u64::MAX).next(), None);
    }

    #[test]
    fn parse_padded_rejects_other_widths() {
        assert!(PostSeq::parse_padded("42").is_err());
        assert!(PostSeq::parse_padded("000000000000000000042").is_err());
        assert!(PostSeq::parse_padded("0000000000000000004x").is_err());
        assert!(PostSeq::parse_padded("+0000000000000000042").is_err());
    }

    #[test]
    fn parse_padded_rejects_overflow() {
        assert!(PostSeq::parse_padded("99999999999999999999").is_err());
    }

    proptest! {
        #[test]
        fn text_order_matches_numeric_order(a: u64, b: u64) {
            let (sa, sb) = (PostSeq::new(a).to_string(), PostSeq::new(b).to_string());
            prop_assert_eq!(a.cmp(&b), sa.cmp(&sb));
        }

        #[test]
        fn padded_form_parses_back(v: u64) {
            let text = PostSeq::new(v).to_string();
            prop_assert_eq!(PostSeq::parse_padded(&text), Ok(PostSeq::new(v)));
        }
    }
}
