use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sk_sim::{GameLoop, load_manifest};

pub fn run(manifest: &Path, ticks: u64, json: bool) -> Result<(), String> {
    let mut registry = super::builtin_registry();
    let (catalog, report) = load_manifest(manifest, &mut registry);
    super::warn_skipped(&report);

    let mut game = GameLoop::new(catalog);
    game.run(ticks);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to encode spawn report: {e}"))?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Run complete".bold(),
        format!(
            "({} objects, {} skipped, {} ticks)",
            game.catalog().len(),
            report.skipped.len(),
            game.current_tick()
        )
        .dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Spawned"]);
    for (kind, count) in registry.spawn_counts() {
        table.add_row(vec![kind.to_string(), count.to_string()]);
    }
    println!("{table}");

    Ok(())
}
