use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;

use miniapp_entry_cli::main_entry::{run, RunOptions};

fn main() {
    let matches = Command::new("mp_entry")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mini-app page entry resolver")
        .arg(
            Arg::new("context")
                .short('c')
                .long("context")
                .value_name("DIR")
                .help("Base directory the entry and all resolved paths are relative to")
                .default_value("."),
        )
        .arg(
            Arg::new("entry")
                .short('e')
                .long("entry")
                .value_name("PATH")
                .help("Root entry file, relative to the context directory")
                .default_value("./app.js"),
        )
        .arg(
            Arg::new("page-dir")
                .long("page-dir")
                .value_name("NAME")
                .help("Page subdirectory under the app root")
                .default_value("pages"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the entry plan to a file instead of stdout"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress diagnostics and status output"),
        )
        .get_matches();

    let defaults = RunOptions::default();
    let options = RunOptions {
        context: matches
            .get_one::<String>("context")
            .map(PathBuf::from)
            .unwrap_or(defaults.context),
        entry: matches
            .get_one::<String>("entry")
            .cloned()
            .unwrap_or(defaults.entry),
        page_dir: matches
            .get_one::<String>("page-dir")
            .cloned()
            .unwrap_or(defaults.page_dir),
        output: matches.get_one::<String>("output").map(PathBuf::from),
        quiet: matches.get_flag("quiet"),
    };

    match run(&options) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Entry resolution failed: {}", e);
            process::exit(1);
        }
    }
}
