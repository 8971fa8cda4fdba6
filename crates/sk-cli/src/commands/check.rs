use std::path::Path;

use colored::Colorize;

use sk_sim::read_manifest;

pub fn run(manifest: &Path) -> Result<(), String> {
    let registry = super::builtin_registry();
    let kinds = read_manifest(manifest);

    let unknown: Vec<&str> = kinds
        .iter()
        .map(String::as_str)
        .filter(|k| !registry.contains(k))
        .collect();
    for kind in &unknown {
        eprintln!("  {} unknown kind \"{kind}\"", "WARN".yellow().bold());
    }

    if !unknown.is_empty() {
        return Err(format!(
            "manifest references {} unknown kind{}",
            unknown.len(),
            if unknown.len() == 1 { "" } else { "s" },
        ));
    }

    println!(
        "  All checks passed: {} entr{}, every kind registered.",
        kinds.len(),
        if kinds.len() == 1 { "y" } else { "ies" },
    );
    Ok(())
}
