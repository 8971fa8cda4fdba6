//! Core types for Spawnkit: game objects and the spawn registry.
//!
//! This crate defines the [`GameObject`] capability every spawnable
//! kind implements and the [`SpawnRegistry`] that maps kind names to
//! creation callbacks. It knows nothing about manifests or the game
//! loop — you can register kinds and spawn objects programmatically.

/// Error types used throughout the crate.
pub mod error;
/// The capability trait every spawnable game object implements.
pub mod object;
/// The runtime-extensible mapping from kind names to spawners.
pub mod registry;
/// Built-in spawnable object kinds.
pub mod units;

/// Re-export error types.
pub use error::{SkError, SkResult};
/// Re-export the game object capability.
pub use object::GameObject;
/// Re-export registry types.
pub use registry::{SpawnRegistry, Spawner};
