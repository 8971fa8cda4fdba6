pub mod check;
pub mod kinds;
pub mod run;

use colored::Colorize;
use sk_core::{SpawnRegistry, units};
use sk_sim::LoadReport;

/// Build the registry every command starts from: all built-in kinds
/// registered under their canonical names.
fn builtin_registry() -> SpawnRegistry {
    let mut registry = SpawnRegistry::new();
    units::register_builtins(&mut registry);
    registry
}

/// Print a WARN line to stderr for every kind the loader skipped.
fn warn_skipped(report: &LoadReport) {
    for kind in &report.skipped {
        eprintln!(
            "  {} no spawner registered for kind \"{kind}\", skipped",
            "WARN".yellow().bold()
        );
    }
}
