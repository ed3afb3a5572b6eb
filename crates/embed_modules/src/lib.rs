// crates/embed_modules/src/lib.rs

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use region_locator::{replace_region, LocateError};

/// Runtime configuration for one embed run.
#[derive(Clone, Debug)]
pub struct EmbedConfig {
    /// Main plugin file, rewritten in place on success.
    pub main_file: PathBuf,
    /// Directory holding one source file per module.
    pub modules_dir: PathBuf,
    /// Ordered (module name, source file name) pairs.
    pub modules: Vec<(String, String)>,
}

impl EmbedConfig {
    /// Builds a config over the fixed module catalog.
    pub fn with_catalog(main_file: PathBuf, modules_dir: PathBuf) -> Self {
        Self {
            main_file,
            modules_dir,
            modules: module_catalog::MODULES
                .iter()
                .map(|(name, file)| (name.to_string(), file.to_string()))
                .collect(),
        }
    }
}

/// Splices each (name, content) pair into its module's code block, in order.
///
/// Fails on the first module whose code block cannot be located; no partial
/// result is produced. Content is inserted byte for byte, trailing newline
/// included.
pub fn embed_all(document: &str, modules: &[(String, String)]) -> Result<String, LocateError> {
    let mut doc = document.to_string();
    for (name, content) in modules {
        doc = replace_region(&doc, name, content)?;
    }
    Ok(doc)
}

/// Reads every module source, splices all of them into the main file's code
/// table, and writes the result back in place.
///
/// All-or-nothing: a missing source file or an unlocatable code block aborts
/// the run before anything is written, so the on-disk main file is never left
/// half-embedded.
pub fn run(config: &EmbedConfig) -> Result<()> {
    println!(
        "Copying module content into {}...",
        config.main_file.display()
    );

    if !config.modules_dir.is_dir() {
        bail!(
            "Modules directory not found: {}",
            config.modules_dir.display()
        );
    }

    let mut document = fs::read_to_string(&config.main_file)
        .with_context(|| format!("Error reading main file {}", config.main_file.display()))?;

    for (name, file) in &config.modules {
        let module_path = config.modules_dir.join(file);
        let content = fs::read_to_string(&module_path)
            .with_context(|| format!("Module file not found: {}", module_path.display()))?;
        println!("Read {} module ({} bytes)", name, content.len());

        document = replace_region(&document, name, &content)
            .with_context(|| format!("Failed to embed module {}", name))?;
        println!("  embedded into main file");
    }

    fs::write(&config.main_file, &document)
        .with_context(|| format!("Error writing main file {}", config.main_file.display()))?;

    println!("\nAll modules copied successfully.");
    println!("File saved: {}", config.main_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
header
  A = {
    code = [==[
old-A
]==],
  },
  B = {
    code = [==[
old-B
]==],
  },
footer
";

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(n, c)| (n.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn test_embed_all_replaces_every_region() {
        let modules = pairs(&[("A", "new-A-content\n"), ("B", "new-B-content\n")]);
        let embedded = embed_all(DOC, &modules).unwrap();

        let a = region_locator::locate_region(&embedded, "A").unwrap();
        assert_eq!(&embedded[a.start..a.end], "new-A-content\n");
        let b = region_locator::locate_region(&embedded, "B").unwrap();
        assert_eq!(&embedded[b.start..b.end], "new-B-content\n");
        assert!(embedded.starts_with("header\n"));
        assert!(embedded.ends_with("footer\n"));
    }

    #[test]
    fn test_embed_all_unknown_module_fails() {
        let modules = pairs(&[("A", "new-A\n"), ("Z", "new-Z\n")]);
        let err = embed_all(DOC, &modules).unwrap_err();
        assert_eq!(err, LocateError::ModuleNotFound("Z".to_string()));
    }

    #[test]
    fn test_embed_all_is_idempotent_on_payloads() {
        let modules = pairs(&[("A", "new-A\n"), ("B", "new-B\n")]);
        let once = embed_all(DOC, &modules).unwrap();
        let twice = embed_all(&once, &modules).unwrap();
        assert_eq!(once, twice);
    }
}
