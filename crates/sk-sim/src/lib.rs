//! Catalog loading and the game loop for Spawnkit.
//!
//! Turns an ordered sequence of kind names (usually read from a
//! line-oriented manifest file) into a [`Catalog`] of owned objects
//! via a [`sk_core::SpawnRegistry`], then drives the catalog through
//! update/render ticks with [`GameLoop`].

/// The ordered, owned collection of spawned game objects.
pub mod catalog;
/// Builds a catalog from kind names or a manifest file.
pub mod loader;
/// The tick loop driving update/render over a catalog.
pub mod runner;

/// Re-export of [`catalog::Catalog`].
pub use catalog::Catalog;
/// Re-exports of the loader entry points and report type.
pub use loader::{LoadReport, load, load_manifest, read_manifest};
/// Re-export of [`runner::GameLoop`].
pub use runner::GameLoop;
