use crossterm::terminal;
use kui_core::{keytable, Manager, MapSet};
use tracing::info;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::term_source::CrosstermSource;

/// Runs a live key-echo loop: every resolved token (terminal escapes and
/// configured macros alike) is printed as its `<NAME>` form. Quits on `q`.
pub fn execute(config: &Config) -> Result<()> {
    let mut macros = MapSet::new();
    for entry in &config.macros {
        macros.register(&entry.key, &entry.value)?;
    }

    let mut manager = Manager::new(CrosstermSource::new());
    manager.add_map_set(macros);

    terminal::enable_raw_mode().map_err(|e| CliError::Config(e.to_string()))?;
    info!("raw mode enabled, press 'q' to quit");
    let result = run_loop(&mut manager);
    let _ = terminal::disable_raw_mode();
    result
}

fn run_loop(manager: &mut Manager<CrosstermSource>) -> Result<()> {
    loop {
        match manager.get_key()? {
            Some(token) => {
                println!("{}\r", keytable::pretty(&[token]));
                if token == b'q' as u32 {
                    break;
                }
            }
            None => continue,
        }
    }
    Ok(())
}
