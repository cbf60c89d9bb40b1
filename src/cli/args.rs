//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config;

/// Package scale-specific HTML pages as minified .min.htm files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root containing the HTML directory
    #[arg(short = 'd', long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub project_dir: PathBuf,

    /// Config file path, searched upward from the project root (default: platformio.ini)
    #[arg(short = 'C', long, default_value = "platformio.ini", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// HTML directory (relative to project root)
    #[arg(long, default_value = "html", value_hint = clap::ValueHint::DirPath)]
    pub html_dir: PathBuf,

    /// Scale count to package, overriding the config file
    #[arg(short, long)]
    pub scale_count: Option<String>,

    /// Config section holding the scale count
    #[arg(long, default_value = config::SECTION)]
    pub section: String,

    /// Config key holding the scale count
    #[arg(long, default_value = config::KEY)]
    pub key: String,

    /// Show what would be removed and written without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also minify inline <style> blocks
    #[arg(long)]
    pub minify_css: bool,

    /// Also minify inline <script> blocks
    #[arg(long)]
    pub minify_js: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
