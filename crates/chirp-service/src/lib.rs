//! The chirp blog service.
//!
//! [`BlogService`] owns a [`ProfileStore`](chirp_store::ProfileStore), a
//! [`PostStore`](chirp_store::PostStore) and the global post counter, and
//! exposes the four operations a host dispatches to:
//!
//! 1. [`create_profile`](BlogService::create_profile)
//! 2. [`post`](BlogService::post)
//! 3. [`render_home`](BlogService::render_home)
//! 4. [`render_profile`](BlogService::render_profile)
//!
//! The host resolves the caller (see [`CallerProvider`]) and passes the
//! resulting identity in; the service itself has no notion of sessions.
//!
//! # Modules
//!
//! - [`caller`] — [`CallerProvider`] and its static/env implementations
//! - [`clock`] — [`Clock`] for post timestamps
//! - [`config`] — [`ServiceConfig`] and [`PostScope`]
//! - [`error`] — [`ServiceError`]
//! - [`persist`] — JSON snapshot save/load
//! - [`render`] — text output and [`ProfileView`]
//! - [`service`] — [`BlogService`]
//! - [`state`] — [`BlogState`], the owned state and snapshot format

pub mod caller;
pub mod clock;
pub mod config;
pub mod error;
pub mod persist;
pub mod render;
pub mod service;
pub mod state;

pub use caller::{CallerProvider, EnvCaller, StaticCaller, DEFAULT_CALLER_VAR};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{PostScope, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use render::{ProfileView, NOT_FOUND};
pub use service::BlogService;
pub use state::BlogState;

pub use chirp_store::{Post, PostKey, Profile};
pub use chirp_types::{Identity, PostSeq};
