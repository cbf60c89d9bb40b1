//! htmlpack - package scale-specific HTML pages as minified `.min.htm` files.
//!
//! Meant to run as a pre-build action of a firmware project:
//!
//! ```text
//! project/
//! ├── platformio.ini   # [common_env_data] scale_count = 3
//! └── html/
//!     ├── index.htm    → index.min.htm
//!     └── 3/
//!         └── scale.htm → ../scale.min.htm
//! ```

mod cli;
mod config;
mod logger;
mod minify;
mod package;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::{ConfigError, Layered, find_config_file};
use minify::{Minifier, MinifyOptions};
use package::{PackageOptions, PackageReport};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = cli.project_dir.canonicalize().with_context(|| {
        format!(
            "project directory `{}` is not accessible",
            cli.project_dir.display()
        )
    })?;

    let source = load_config(cli, &root)?;
    let minifier = Minifier::new(MinifyOptions {
        minify_css: cli.minify_css,
        minify_js: cli.minify_js,
    });
    let options = PackageOptions {
        html_dir: cli.html_dir.clone(),
        section: cli.section.clone(),
        key: cli.key.clone(),
        dry_run: cli.dry_run,
    };

    let report = package::run(&source, &root, &minifier, &options)
        .context("HTML packaging failed")?;
    if let Some(report) = report {
        summarize(&report);
    }
    Ok(())
}

/// Build the config capability: file store plus `--scale-count` override.
///
/// A missing config file is only an error when no override is given.
fn load_config(cli: &Cli, root: &Path) -> Result<Layered> {
    let base = match find_config_file(root, &cli.config) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            Some(config::open(&path)?)
        }
        None if cli.scale_count.is_some() => {
            debug!("config"; "no {} found, using --scale-count only", cli.config.display());
            None
        }
        None => return Err(ConfigError::NotFound(root.join(&cli.config)).into()),
    };

    let mut layered = Layered::new(base);
    if let Some(value) = &cli.scale_count {
        layered.set(&cli.section, &cli.key, value.clone());
    }
    Ok(layered)
}

fn summarize(report: &PackageReport) {
    let mut line = format!(
        "{} written, {} removed",
        plural_count(report.written.len(), "page"),
        plural_count(report.removed.len(), "stale page"),
    );
    if !report.shadowed.is_empty() {
        line.push_str(&format!(
            ", {} overridden by scale pages",
            plural_count(report.shadowed.len(), "top-level page")
        ));
    }
    if !report.scale_dir_found {
        line.push_str(", no scale directory");
    }
    if report.dry_run {
        line.push_str(" (dry run)");
    }
    log!("done"; "{}", line);
}

/// `plural_count(1, "page")` -> `"1 page"`, `plural_count(2, "page")` -> `"2 pages"`
fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
