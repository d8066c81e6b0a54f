//! Main Entry Point
//!
//! Drives one resolution run for the command line: resolve, report
//! diagnostics, emit the entry plan.

use std::fs;
use std::path::PathBuf;

use miniapp_entry::{EntryResolver, ResolverOptions};

use crate::plan::{exit_code_from_diagnostics, format_diagnostics, EntryPlan};

/// Options gathered from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Base directory the entry and all resolved paths are relative to.
    pub context: PathBuf,
    /// Root entry file, relative to the context directory.
    pub entry: String,
    /// Page subdirectory under the app root.
    pub page_dir: String,
    /// Write the plan here instead of stdout.
    pub output: Option<PathBuf>,
    /// Suppress diagnostics and status output.
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            context: PathBuf::from("."),
            entry: "./app.js".to_string(),
            page_dir: "pages".to_string(),
            output: None,
            quiet: false,
        }
    }
}

/// Resolve entries and emit the plan. Returns the process exit code;
/// resolution itself only fails on a fatal error such as an invalid glob
/// pattern.
pub fn run(options: &RunOptions) -> anyhow::Result<i32> {
    let resolver = EntryResolver::new(options.context.as_path(), options.entry.as_str())
        .with_options(ResolverOptions {
            page_dir: options.page_dir.clone(),
        });
    let resolution = resolver.resolve()?;

    if !options.quiet && !resolution.diagnostics.is_empty() {
        eprint!("{}", format_diagnostics(&resolution.diagnostics));
    }

    let plan = EntryPlan::from_resolution(&resolution);
    let json = plan.to_json()?;
    match &options.output {
        Some(path) => {
            fs::write(path, &json)?;
            if !options.quiet {
                println!(
                    "Entry plan written to {} ({} entries)",
                    path.display(),
                    plan.entries.len()
                );
            }
        }
        None => println!("{}", json),
    }

    Ok(exit_code_from_diagnostics(&resolution.diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &std::path::Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_run_writes_the_plan_to_the_output_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app.js", "App()");
        write(dir.path(), "pages/home/index.js", "Page()");

        let output = dir.path().join("plan.json");
        let options = RunOptions {
            context: dir.path().to_path_buf(),
            output: Some(output.clone()),
            quiet: true,
            ..RunOptions::default()
        };
        let code = run(&options).unwrap();
        assert_eq!(code, 0);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["name"], "app");
        assert_eq!(entries[0]["path"], "./app.js");
        assert_eq!(entries[1]["name"], "home/home");
        assert_eq!(entries[1]["path"], "./pages/home/index.js");
    }

    #[test]
    fn test_run_succeeds_with_warnings() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app.js", "App()");
        write(dir.path(), "pages/home/index.js", "Page()");
        write(dir.path(), "pages/home/index.json", "{ not json");

        let output = dir.path().join("plan.json");
        let options = RunOptions {
            context: dir.path().to_path_buf(),
            output: Some(output),
            quiet: true,
            ..RunOptions::default()
        };
        assert_eq!(run(&options).unwrap(), 0);
    }
}
