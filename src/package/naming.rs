//! Output naming: `page.htm` → `page.min.htm`.

/// Extension of HTML sources.
pub const HTM_EXT: &str = ".htm";
/// Extension of generated, minified pages.
pub const MIN_HTM_EXT: &str = ".min.htm";

/// Name of the minified counterpart of `file_name`.
///
/// Only the trailing `.htm` is replaced, so `a.htm.htm` becomes
/// `a.htm.min.htm`. Returns `None` for names that are not `.htm` pages
/// (including a bare `.htm`).
///
/// # Examples
///
/// - `minified_name("index.htm")` -> `Some("index.min.htm")`
/// - `minified_name("index.html")` -> `None`
pub fn minified_name(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(HTM_EXT)?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}{MIN_HTM_EXT}"))
}

/// Whether `file_name` is a generated `.min.htm` page.
#[inline]
pub fn is_minified(file_name: &str) -> bool {
    file_name.ends_with(MIN_HTM_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minified_name() {
        assert_eq!(minified_name("index.htm"), Some("index.min.htm".to_string()));
        assert_eq!(minified_name("wifi.setup.htm"), Some("wifi.setup.min.htm".to_string()));
        assert_eq!(minified_name("a.htm.htm"), Some("a.htm.min.htm".to_string()));
    }

    #[test]
    fn test_minified_name_rejects_other_files() {
        assert_eq!(minified_name("index.html"), None);
        assert_eq!(minified_name("style.css"), None);
        assert_eq!(minified_name("htm"), None);
        assert_eq!(minified_name(".htm"), None);
        assert_eq!(minified_name("INDEX.HTM"), None);
    }

    #[test]
    fn test_is_minified() {
        assert!(is_minified("index.min.htm"));
        assert!(!is_minified("index.htm"));
        assert!(!is_minified("index.min.html"));
    }
}
