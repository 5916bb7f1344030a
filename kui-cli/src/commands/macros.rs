use crate::config::Config;
use crate::error::Result;

/// Prints the macros the active configuration would register, without
/// touching the terminal.
pub fn execute(config: &Config) -> Result<()> {
    if config.macros.is_empty() {
        println!("no macros configured");
        return Ok(());
    }
    for entry in &config.macros {
        println!("{} -> {}", entry.key, entry.value);
    }
    Ok(())
}
