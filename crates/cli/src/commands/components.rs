use anyhow::Result;
use lascrack_core::default_factory_registry;

/// List the analyzer factories known to this binary.
pub fn components_command(json: bool) -> Result<()> {
    let names = default_factory_registry().names();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("Components: (none)");
        return Ok(());
    }

    println!("Components:");
    for name in names {
        println!("- {}", name);
    }

    Ok(())
}
