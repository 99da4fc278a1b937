//! Upper bounds for prefix scans.
//!
//! Keys compare as UTF-8 byte strings, which is the same as comparing them by
//! code point. Bumping the last code point of a prefix therefore gives the
//! smallest string that sorts after every extension of that prefix.

/// Smallest string strictly greater than every string starting with `prefix`.
///
/// Returns `None` when no such string exists (empty prefix, or a prefix made
/// only of `char::MAX`), meaning the scan has no upper bound.
///
/// # Examples
///
/// ```
/// use chirp_tree::prefix_successor;
///
/// assert_eq!(prefix_successor("alice_").as_deref(), Some("alice`"));
/// assert_eq!(prefix_successor("ab").as_deref(), Some("ac"));
/// assert_eq!(prefix_successor(""), None);
/// ```
pub fn prefix_successor(prefix: &str) -> Option<String> {
    let mut chars: Vec<char> = prefix.chars().collect();
    while let Some(last) = chars.pop() {
        if let Some(next) = next_char(last) {
            chars.push(next);
            return Some(chars.into_iter().collect());
        }
    }
    None
}

fn next_char(c: char) -> Option<char> {
    match c {
        char::MAX => None,
        // Skip the surrogate gap.
        '\u{D7FF}' => Some('\u{E000}'),
        _ => char::from_u32(c as u32 + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bumps_last_char() {
        assert_eq!(prefix_successor("a").as_deref(), Some("b"));
        assert_eq!(prefix_successor("g1abc_").as_deref(), Some("g1abc`"));
    }

    #[test]
    fn carries_over_char_max() {
        let prefix = format!("a{}", char::MAX);
        assert_eq!(prefix_successor(&prefix).as_deref(), Some("b"));
    }

    #[test]
    fn all_char_max_is_unbounded() {
        let prefix: String = [char::MAX, char::MAX].iter().collect();
        assert_eq!(prefix_successor(&prefix), None);
    }

    #[test]
    fn skips_surrogates() {
        assert_eq!(prefix_successor("\u{D7FF}").as_deref(), Some("\u{E000}"));
    }

    #[test]
    fn empty_prefix_is_unbounded() {
        assert_eq!(prefix_successor(""), None);
    }

    proptest! {
        #[test]
        fn bound_matches_starts_with(prefix in "[a-c_`]{0,3}", key in "[a-c_`]{0,5}") {
            let in_range = key.as_str() >= prefix.as_str()
                && prefix_successor(&prefix).map_or(true, |end| key < end);
            prop_assert_eq!(in_range, key.starts_with(prefix.as_str()));
        }

        #[test]
        fn successor_sorts_after_prefix(prefix in "\\PC{1,4}") {
            if let Some(end) = prefix_successor(&prefix) {
                prop_assert!(end > prefix);
                prop_assert!(!end.starts_with(prefix.as_str()));
            }
        }
    }
}
