//! Which source produces which `.min.htm` output.
//!
//! ```text
//! html/
//! ├── index.htm        → html/index.min.htm   (top-level)
//! ├── wifi.htm         → shadowed by html/3/wifi.htm
//! └── 3/               ← scale_count = 3
//!     ├── wifi.htm     → html/wifi.min.htm    (scale)
//!     └── scale.htm    → html/scale.min.htm   (scale)
//! ```
//!
//! Scale-specific sources take precedence over top-level ones with the same
//! output name. Each output is written once, from the winning source.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;

use super::PackageError;
use super::naming::{is_minified, minified_name};

/// Where a source page lives. Later variants take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Origin {
    /// `html/<name>.htm`
    TopLevel,
    /// `html/<scale_count>/<name>.htm`
    Scale,
}

/// Source of a single output page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub source: PathBuf,
    pub origin: Origin,
}

/// Output file name → winning source.
#[derive(Debug, Default)]
pub struct PackagePlan {
    outputs: BTreeMap<String, PlanEntry>,
    shadowed: Vec<PathBuf>,
}

impl PackagePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source for `output`, applying origin precedence.
    ///
    /// On a collision the entry with the higher [`Origin`] is kept; the
    /// loser is recorded as shadowed.
    pub fn insert(&mut self, output: String, entry: PlanEntry) {
        match self.outputs.get_mut(&output) {
            Some(existing) if existing.origin > entry.origin => {
                self.shadowed.push(entry.source);
            }
            Some(existing) => {
                let loser = std::mem::replace(existing, entry);
                self.shadowed.push(loser.source);
            }
            None => {
                self.outputs.insert(output, entry);
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, output: &str) -> Option<&PlanEntry> {
        self.outputs.get(output)
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Sources that lost to a higher-precedence source.
    pub fn shadowed(&self) -> &[PathBuf] {
        &self.shadowed
    }

    /// Entries in write order: top-level pages first, then scale pages,
    /// each group by output name.
    pub fn entries(&self) -> Vec<(&str, &PlanEntry)> {
        let mut entries: Vec<_> = self
            .outputs
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .collect();
        entries.sort_by_key(|(name, entry)| (entry.origin, *name));
        entries
    }
}

/// Build the plan from `html_dir` and an optional scale directory.
///
/// Generated `.min.htm` files in `html_dir` are never sources; they are
/// removed before writing. A missing `scale_dir` contributes nothing.
pub fn plan(html_dir: &Path, scale_dir: Option<&Path>) -> Result<PackagePlan, PackageError> {
    let mut plan = PackagePlan::new();

    for (name, source) in list_pages(html_dir)? {
        if is_minified(&name) {
            continue;
        }
        if let Some(output) = minified_name(&name) {
            plan.insert(output, PlanEntry { source, origin: Origin::TopLevel });
        }
    }

    if let Some(scale_dir) = scale_dir.filter(|dir| dir.is_dir()) {
        for (name, source) in list_pages(scale_dir)? {
            if let Some(output) = minified_name(&name) {
                plan.insert(output, PlanEntry { source, origin: Origin::Scale });
            }
        }
    }

    Ok(plan)
}

/// Regular `.htm` files directly inside `dir`, sorted by name.
pub(super) fn list_pages(dir: &Path) -> Result<Vec<(String, PathBuf)>, PackageError> {
    let mut pages = Vec::new();

    for entry in fs::read_dir(dir).map_err(PackageError::io("list", dir))? {
        let entry = entry.map_err(PackageError::io("list", dir))?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!("scan"; "skipping non UTF-8 name {}", path.display());
            continue;
        };
        if minified_name(&name).is_none() {
            continue;
        }
        if !path.is_file() {
            debug!("scan"; "skipping {} (not a regular file)", path.display());
            continue;
        }
        pages.push((name, path));
    }

    pages.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "<p>x</p>").unwrap();
    }

    #[test]
    fn test_precedence_scale_wins_either_order() {
        let top = PlanEntry { source: PathBuf::from("html/b.htm"), origin: Origin::TopLevel };
        let scale = PlanEntry { source: PathBuf::from("html/3/b.htm"), origin: Origin::Scale };

        let mut plan = PackagePlan::new();
        plan.insert("b.min.htm".into(), top.clone());
        plan.insert("b.min.htm".into(), scale.clone());
        assert_eq!(plan.get("b.min.htm"), Some(&scale));
        assert_eq!(plan.shadowed(), &[PathBuf::from("html/b.htm")]);

        let mut plan = PackagePlan::new();
        plan.insert("b.min.htm".into(), scale.clone());
        plan.insert("b.min.htm".into(), top);
        assert_eq!(plan.get("b.min.htm"), Some(&scale));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_plan_from_dirs() {
        let dir = TempDir::new().unwrap();
        let html = dir.path().join("html");
        touch(&html.join("index.htm"));
        touch(&html.join("wifi.htm"));
        touch(&html.join("old.min.htm"));
        touch(&html.join("style.css"));
        touch(&html.join("3").join("wifi.htm"));
        touch(&html.join("3").join("scale.htm"));
        touch(&html.join("4").join("other.htm"));

        let plan = plan(&html, Some(&html.join("3"))).unwrap();
        let names: Vec<_> = plan.entries().iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, ["index.min.htm", "scale.min.htm", "wifi.min.htm"]);

        assert_eq!(plan.get("wifi.min.htm").unwrap().origin, Origin::Scale);
        assert_eq!(plan.get("index.min.htm").unwrap().origin, Origin::TopLevel);
        assert_eq!(plan.shadowed(), &[html.join("wifi.htm")]);
        assert!(plan.get("old.min.min.htm").is_none());
    }

    #[test]
    fn test_write_order_groups_by_origin() {
        let mut plan = PackagePlan::new();
        plan.insert("z.min.htm".into(), PlanEntry { source: "z.htm".into(), origin: Origin::TopLevel });
        plan.insert("a.min.htm".into(), PlanEntry { source: "3/a.htm".into(), origin: Origin::Scale });
        plan.insert("m.min.htm".into(), PlanEntry { source: "m.htm".into(), origin: Origin::TopLevel });

        let names: Vec<_> = plan.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["m.min.htm", "z.min.htm", "a.min.htm"]);
    }

    #[test]
    fn test_missing_scale_dir() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("index.htm"));

        let plan = plan(dir.path(), Some(&dir.path().join("9"))).unwrap();
        assert_eq!(plan.len(), 1);
        assert!(plan.shadowed().is_empty());
    }

    #[test]
    fn test_missing_html_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let err = plan(&dir.path().join("html"), None).unwrap_err();
        assert!(matches!(err, PackageError::Io { action: "list", .. }));
    }

    #[test]
    fn test_directories_named_like_pages_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("folder.htm")).unwrap();
        touch(&dir.path().join("page.htm"));

        let pages = list_pages(dir.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, "page.htm");
    }
}
