use colored::Colorize;

pub fn run() -> Result<(), String> {
    let registry = super::builtin_registry();

    println!("  {}", "Registered kinds".bold().underline());
    for kind in registry.kinds() {
        println!("  {kind}");
    }
    Ok(())
}
