// crates/embed_modules/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command};

use embed_modules::{run, EmbedConfig};

fn main() -> Result<()> {
    let matches = Command::new("embed_modules")
        .version("0.1.0")
        .about("Copies each module file into its code block in the main plugin file")
        .arg(
            Arg::new("main_file")
                .long("main-file")
                .num_args(1)
                .default_value(module_catalog::DEFAULT_MAIN_FILE)
                .help("Main plugin file to rewrite in place"),
        )
        .arg(
            Arg::new("modules_dir")
                .long("modules-dir")
                .num_args(1)
                .default_value(module_catalog::DEFAULT_MODULES_DIR)
                .help("Directory holding one source file per module"),
        )
        .get_matches();

    let main_file = PathBuf::from(matches.get_one::<String>("main_file").unwrap());
    let modules_dir = PathBuf::from(matches.get_one::<String>("modules_dir").unwrap());

    run(&EmbedConfig::with_catalog(main_file, modules_dir))
}
