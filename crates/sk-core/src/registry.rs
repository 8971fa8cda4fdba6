use std::collections::HashMap;

use crate::error::{SkError, SkResult};
use crate::object::GameObject;

/// A creation callback: produces one new, uniquely owned game object
/// per call. Closures may capture configuration (a spawner is not
/// limited to plain constructors).
pub type Spawner = Box<dyn Fn() -> Box<dyn GameObject>>;

/// One registered kind: its spawner plus a diagnostic spawn counter.
struct Entry {
    spawner: Spawner,
    spawned: u64,
}

/// Runtime-extensible mapping from kind names to creation callbacks.
///
/// The registry holds no object behavior itself; it is pure
/// indirection between a string key and a construction capability.
/// Kinds are added with [`register`](Self::register) (typically during
/// startup) and removed with [`unregister`](Self::unregister); the
/// registry outlives any catalog built from it.
///
/// Not synchronized: all access must happen from a single thread, or
/// the caller must impose external mutual exclusion.
#[derive(Default)]
pub struct SpawnRegistry {
    entries: HashMap<String, Entry>,
}

impl std::fmt::Debug for SpawnRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpawnRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

impl SpawnRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spawner under a kind name.
    ///
    /// Last write wins: registering over an existing kind replaces the
    /// prior entry (and its diagnostic counter) silently. Objects
    /// spawned before the replacement are unaffected.
    pub fn register<F>(&mut self, kind: impl Into<String>, spawner: F)
    where
        F: Fn() -> Box<dyn GameObject> + 'static,
    {
        self.entries.insert(
            kind.into(),
            Entry {
                spawner: Box::new(spawner),
                spawned: 0,
            },
        );
    }

    /// Remove the spawner for a kind. No-op if the kind was never
    /// registered.
    pub fn unregister(&mut self, kind: &str) {
        self.entries.remove(kind);
    }

    /// Spawn a new object of the given kind.
    ///
    /// On a hit, invokes the registered spawner and returns the fresh,
    /// uniquely owned object. On a miss, fails with
    /// [`SkError::UnknownKind`] — an absent kind is surfaced here, at
    /// the point of failure, never as a silent placeholder.
    pub fn spawn(&mut self, kind: &str) -> SkResult<Box<dyn GameObject>> {
        let entry = self
            .entries
            .get_mut(kind)
            .ok_or_else(|| SkError::UnknownKind(kind.to_string()))?;
        entry.spawned += 1;
        Ok((entry.spawner)())
    }

    /// Whether a spawner is registered for this kind.
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no registered kinds.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered kind names, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// How many objects this registry has spawned for a kind, or
    /// `None` if the kind is not registered. Diagnostic only.
    pub fn spawn_count(&self, kind: &str) -> Option<u64> {
        self.entries.get(kind).map(|e| e.spawned)
    }

    /// Spawn counts for all registered kinds, sorted by kind name.
    /// Diagnostic only.
    pub fn spawn_counts(&self) -> Vec<(&str, u64)> {
        let mut counts: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.spawned))
            .collect();
        counts.sort_unstable_by_key(|(k, _)| *k);
        counts
    }
}
