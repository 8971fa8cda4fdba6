use std::path::Path;

use serde::Serialize;
use sk_core::SpawnRegistry;

use crate::catalog::Catalog;

/// Diagnostics from a catalog load.
///
/// The loader never aborts on an unknown kind; it records the skip
/// here and moves on. Rendering these diagnostics (or ignoring them)
/// is the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Number of objects spawned into the catalog.
    pub spawned: usize,
    /// Kind names that had no registered spawner, in input order.
    pub skipped: Vec<String>,
}

/// Spawn one object per kind name, in input order.
///
/// Unknown kinds are skipped and recorded in the report — no
/// placeholder is inserted and the load always completes. The catalog
/// preserves the relative order of the kinds that did spawn.
pub fn load<I, S>(kinds: I, registry: &mut SpawnRegistry) -> (Catalog, LoadReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut catalog = Catalog::new();
    let mut report = LoadReport::default();

    for kind in kinds {
        let kind = kind.as_ref();
        match registry.spawn(kind) {
            Ok(object) => {
                catalog.push(object);
                report.spawned += 1;
            }
            Err(_) => report.skipped.push(kind.to_string()),
        }
    }

    (catalog, report)
}

/// Read kind names from a line-oriented manifest file.
///
/// Each non-empty line, trimmed of surrounding whitespace, is one kind
/// name; there is no quoting, escaping, or comment syntax. A missing
/// or unreadable file yields an empty list, so a game without a
/// manifest simply starts with an empty catalog.
pub fn read_manifest(path: &Path) -> Vec<String> {
    let Ok(text) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a manifest file and load a catalog from it.
pub fn load_manifest(path: &Path, registry: &mut SpawnRegistry) -> (Catalog, LoadReport) {
    load(read_manifest(path), registry)
}
