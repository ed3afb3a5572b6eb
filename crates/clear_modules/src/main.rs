// crates/clear_modules/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command};

use clear_modules::{run, ClearConfig};

fn main() -> Result<()> {
    let matches = Command::new("clear_modules")
        .version("0.1.0")
        .about("Empties each module's code block in the main plugin file, leaving the template intact")
        .arg(
            Arg::new("main_file")
                .long("main-file")
                .num_args(1)
                .default_value(module_catalog::DEFAULT_MAIN_FILE)
                .help("Main plugin file to rewrite in place"),
        )
        .get_matches();

    let main_file = PathBuf::from(matches.get_one::<String>("main_file").unwrap());

    run(&ClearConfig::with_catalog(main_file))
}
