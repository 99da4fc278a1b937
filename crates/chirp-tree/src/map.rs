//! The [`OrderedMap`] container.
//!
//! Bounds follow one convention everywhere: `start` is inclusive, `end` is
//! exclusive, and an empty string on either side means "unbounded".

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::prefix::prefix_successor;

/// Sorted associative container keyed by `String`.
///
/// Backed by a `BTreeMap`, so `set` and `get` are O(log n) and iteration is
/// always in ascending key order. The value type is fixed per map; there is
/// no dynamic narrowing of stored values.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedMap<V> {
    entries: BTreeMap<String, V>,
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or overwrite `key`. Returns `true` if a value was replaced.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> bool {
        self.entries.insert(key.into(), value).is_some()
    }

    /// Point lookup. `None` means absent, not an error.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visit entries with `start <= key < end` in ascending order.
    ///
    /// The visitor returns `true` to stop. The return value reports whether
    /// iteration was stopped early.
    pub fn iterate<F>(&self, start: &str, end: &str, mut visit: F) -> bool
    where
        F: FnMut(&str, &V) -> bool,
    {
        for (key, value) in self.range(start, end) {
            if visit(key, value) {
                return true;
            }
        }
        false
    }

    /// Lazy iterator over `start <= key < end`.
    ///
    /// An inverted range (non-empty `end` below `start`) is empty.
    pub fn range(&self, start: &str, end: &str) -> Range<'_, V> {
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else if end < start {
            Bound::Excluded(start)
        } else {
            Bound::Excluded(end)
        };
        Range {
            inner: self
                .entries
                .range::<str, _>((Bound::Included(start), upper)),
        }
    }

    /// Every entry whose key starts with `prefix`, in key order.
    pub fn scan_prefix(&self, prefix: &str) -> Range<'_, V> {
        match prefix_successor(prefix) {
            Some(end) => self.range(prefix, &end),
            None => self.range(prefix, ""),
        }
    }

    /// Iterate the whole map in key order.
    pub fn iter(&self) -> Range<'_, V> {
        self.range("", "")
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Range<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a key range of an [`OrderedMap`].
pub struct Range<'a, V> {
    inner: btree_map::Range<'a, String, V>,
}

impl<'a, V> Iterator for Range<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Range<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> FusedIterator for Range<'_, V> {}

impl<V> Clone for Range<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
