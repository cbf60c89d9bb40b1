//! HTML minification.
//!
//! Uses minify-html. Comments are dropped, insignificant whitespace is
//! collapsed and boolean attributes are shortened (`checked="checked"` →
//! `checked`). Inline CSS and JS are left alone unless enabled.

use std::string::FromUtf8Error;

use minify_html::Cfg;
use thiserror::Error;

/// Failure to turn minifier output back into text.
#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("minified output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// Which embedded languages are minified along with the markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyOptions {
    pub minify_css: bool,
    pub minify_js: bool,
}

/// Deterministic HTML minifier: the same input always yields the same output.
pub struct Minifier {
    cfg: Cfg,
}

impl Minifier {
    pub fn new(options: MinifyOptions) -> Self {
        let mut cfg = Cfg::new();
        cfg.keep_comments = false;
        cfg.minify_css = options.minify_css;
        cfg.minify_js = options.minify_js;
        Self { cfg }
    }

    /// Minify an HTML document.
    pub fn minify(&self, html: &str) -> Result<String, MinifyError> {
        let minified = minify_html::minify(html.as_bytes(), &self.cfg);
        Ok(String::from_utf8(minified)?)
    }
}

impl Default for Minifier {
    fn default() -> Self {
        Self::new(MinifyOptions::default())
    }
}
