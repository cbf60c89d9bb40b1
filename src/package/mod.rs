//! HTML packaging step.
//!
//! Runs as a pre-build action:
//!
//! 1. remove every `html/*.min.htm`
//! 2. minify each `html/*.htm` into `html/*.min.htm`
//! 3. minify each `html/<scale_count>/*.htm` into `html/*.min.htm`,
//!    taking precedence over step 2 on name collisions
//!
//! Nothing happens when `scale_count` is absent or empty.

mod error;
mod naming;
mod plan;

pub use error::PackageError;

use naming::{MIN_HTM_EXT, is_minified};
use plan::plan;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, ConfigSource, ScaleCount, lookup_scale_count};
use crate::minify::Minifier;
use crate::{debug, log};

/// Settings of a packaging run.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Output directory, relative to the project root.
    pub html_dir: PathBuf,
    /// Config section holding the scale count.
    pub section: String,
    /// Config key holding the scale count.
    pub key: String,
    /// Log what would happen without touching the filesystem.
    pub dry_run: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            html_dir: PathBuf::from("html"),
            section: config::SECTION.to_string(),
            key: config::KEY.to_string(),
            dry_run: false,
        }
    }
}

/// Outcome of a packaging run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageReport {
    /// Stale `.min.htm` files removed in step 1.
    pub removed: Vec<PathBuf>,
    /// `.min.htm` files written in steps 2 and 3.
    pub written: Vec<PathBuf>,
    /// Top-level sources replaced by a scale-specific source.
    pub shadowed: Vec<PathBuf>,
    /// Whether `html/<scale_count>/` existed.
    pub scale_dir_found: bool,
    pub dry_run: bool,
}

/// Read the scale count through `source` and package accordingly.
///
/// Returns `Ok(None)` when the scale count is absent or empty; the
/// filesystem is left untouched in that case.
pub fn run(
    source: &dyn ConfigSource,
    root: &Path,
    minifier: &Minifier,
    options: &PackageOptions,
) -> Result<Option<PackageReport>, PackageError> {
    let Some(scale) = lookup_scale_count(source, &options.section, &options.key)? else {
        log!("config"; "{}.{} not set, nothing to package", options.section, options.key);
        return Ok(None);
    };

    log!("config"; "scale count: {}", scale);
    package_html(root, &scale, minifier, options).map(Some)
}

/// Package HTML pages for `scale` under `root`.
pub fn package_html(
    root: &Path,
    scale: &ScaleCount,
    minifier: &Minifier,
    options: &PackageOptions,
) -> Result<PackageReport, PackageError> {
    let html_dir = root.join(&options.html_dir);
    let scale_dir = html_dir.join(scale.as_str());
    let mut report = PackageReport {
        dry_run: options.dry_run,
        scale_dir_found: scale_dir.is_dir(),
        ..PackageReport::default()
    };

    log!("clean"; "removing *{} from {}", MIN_HTM_EXT, display(root, &html_dir));
    report.removed = clean_minified(&html_dir, options.dry_run)?;

    if !report.scale_dir_found {
        log!("pack"; "{} not found, packaging top-level pages only", display(root, &scale_dir));
    }

    let plan = plan(&html_dir, Some(&scale_dir))?;
    for source in plan.shadowed() {
        debug!("pack"; "{} overridden by scale {}", display(root, source), scale);
    }
    report.shadowed = plan.shadowed().to_vec();

    if plan.is_empty() {
        log!("pack"; "no *.htm pages found");
    } else {
        debug!("pack"; "{} page(s) planned", plan.len());
    }

    for (output, entry) in plan.entries() {
        let dest = html_dir.join(output);
        log!("minify"; "{} -> {}", display(root, &entry.source), display(root, &dest));
        if !options.dry_run {
            minify_and_write(minifier, &entry.source, &dest)?;
        }
        report.written.push(dest);
    }

    Ok(report)
}

/// Remove every `*.min.htm` file directly inside `dir`.
///
/// Returns the removed paths in name order. With `dry_run` nothing is
/// deleted and the paths that would be removed are returned.
pub fn clean_minified(dir: &Path, dry_run: bool) -> Result<Vec<PathBuf>, PackageError> {
    let mut removed = Vec::new();

    for (name, path) in plan::list_pages(dir)? {
        if !is_minified(&name) {
            continue;
        }
        debug!("clean"; "{}", path.display());
        if !dry_run {
            fs::remove_file(&path).map_err(PackageError::io("remove", &path))?;
        }
        removed.push(path);
    }

    Ok(removed)
}

/// Minify `src` and write the result to `dest`.
pub fn minify_and_write(minifier: &Minifier, src: &Path, dest: &Path) -> Result<(), PackageError> {
    let content = fs::read_to_string(src).map_err(PackageError::io("read", src))?;
    let minified = minifier
        .minify(&content)
        .map_err(|source| PackageError::Minify {
            path: src.to_path_buf(),
            source,
        })?;
    fs::write(dest, minified).map_err(PackageError::io("write", dest))
}

/// Path relative to the project root, for log lines.
fn display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

// ============================================================================
// tests
// ============================================================================
