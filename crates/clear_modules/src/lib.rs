// crates/clear_modules/src/lib.rs

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use region_locator::{clear_region, LocateError};

/// Runtime configuration for one clear run.
#[derive(Clone, Debug)]
pub struct ClearConfig {
    /// Main plugin file, rewritten in place.
    pub main_file: PathBuf,
    /// Ordered module names to clear.
    pub modules: Vec<String>,
}

impl ClearConfig {
    /// Builds a config over the fixed module catalog.
    pub fn with_catalog(main_file: PathBuf) -> Self {
        Self {
            main_file,
            modules: module_catalog::module_names(),
        }
    }
}

/// Clears each named module's code block down to a single newline.
///
/// Best-effort: a module whose code block cannot be located is recorded as a
/// failure and the remaining modules are still cleared. The returned document
/// reflects every clear that succeeded.
pub fn clear_all(document: &str, names: &[String]) -> (String, Vec<LocateError>) {
    let mut doc = document.to_string();
    let mut failures = Vec::new();
    for name in names {
        match clear_region(&doc, name) {
            Ok(updated) => doc = updated,
            Err(err) => failures.push(err),
        }
    }
    (doc, failures)
}

/// Clears every catalog module in the main file and writes the result back
/// in place, even when some modules failed to locate. Only a read or write
/// failure on the main file itself is an error.
pub fn run(config: &ClearConfig) -> Result<()> {
    println!(
        "Removing embedded module content from {}...\n",
        config.main_file.display()
    );

    let document = fs::read_to_string(&config.main_file)
        .with_context(|| format!("Error reading main file {}", config.main_file.display()))?;

    println!("Clearing modules:");
    let mut doc = document;
    for name in &config.modules {
        match clear_region(&doc, name) {
            Ok(updated) => {
                doc = updated;
                println!("  cleared {} module content", name);
            }
            Err(err) => eprintln!("  {}", err),
        }
    }

    fs::write(&config.main_file, &doc)
        .with_context(|| format!("Error writing main file {}", config.main_file.display()))?;

    println!("\nAll modules cleared.");
    println!("File saved: {}", config.main_file.display());
    println!("Use embed_modules to re-embed them when ready.");
    Ok(())
}
