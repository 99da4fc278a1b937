//! String-keyed ordered map for chirp.
//!
//! [`OrderedMap`] is the one sorted container behind both the profile
//! directory and the post log. It supports point lookup, overwrite, and range
//! iteration in ascending key order. Posts are stored under composite keys, so
//! "all posts by one author" is a prefix scan over the same map.
//!
//! # Modules
//!
//! - [`map`] — The [`OrderedMap`] container and its [`Range`] iterator
//! - [`prefix`] — [`prefix_successor`], the exclusive upper bound of a prefix scan

pub mod map;
pub mod prefix;

pub use map::{OrderedMap, Range};
pub use prefix::prefix_successor;
