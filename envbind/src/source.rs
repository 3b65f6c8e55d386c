//! Environment variable sources
//!
//! The engine reads the environment through the [`Source`] trait so that
//! tests (and embedders) can substitute an in-memory map for the process
//! environment.

use std::collections::HashMap;

/// A key/value view of the environment.
///
/// The engine assumes the source is a stable snapshot for the duration of
/// one [`bind`](crate::bind()) or [`parse`](crate::parse()) call. For
/// [`ProcessEnv`] that is a caller obligation: do not mutate the process
/// environment from other threads while a call is in flight.
pub trait Source {
    /// Look up the value associated with `key`, or `None` if unset.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment, read via [`std::env::var`].
///
/// A variable whose value is not valid Unicode is treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory source, primarily for tests of `Schema` types.
impl Source for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
