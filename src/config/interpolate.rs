//! `${section.key}` expansion for INI values.
//!
//! ```text
//! [common_env_data]
//! scale_count = 4
//!
//! [env:esp32]
//! build_flags = -DSCALE_COUNT=${common_env_data.scale_count}
//! upload_port = ${sysenv.UPLOAD_PORT}
//! ```

use std::sync::OnceLock;

use regex::Regex;

use super::ConfigError;

/// Maximum nesting of references before a value is treated as cyclic.
pub const MAX_DEPTH: usize = 10;

/// Pseudo-section resolved from the process environment.
const SYSENV: &str = "sysenv";

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}.\t\n\r ]+)\.([^}\t\n\r ]+)\}").unwrap())
}

/// Expand every reference in `value`, which is the raw value of
/// `section.key`. `lookup` returns raw (unexpanded) values of the store.
pub fn expand<'a, F>(section: &str, key: &str, value: &str, lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str, &str) -> Option<&'a str>,
{
    expand_at(section, key, value, lookup, 0)
}

fn expand_at<'a, F>(
    section: &str,
    key: &str,
    value: &str,
    lookup: &F,
    depth: usize,
) -> Result<String, ConfigError>
where
    F: Fn(&str, &str) -> Option<&'a str>,
{
    if !value.contains("${") {
        return Ok(value.to_string());
    }
    if depth >= MAX_DEPTH {
        return Err(ConfigError::interpolation(
            section,
            key,
            format!("more than {MAX_DEPTH} nested references (cyclic reference?)"),
        ));
    }

    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    for caps in reference_re().captures_iter(value) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let (ref_section, ref_key) = (&caps[1], &caps[2]);
        out.push_str(&value[last..whole.start()]);

        if ref_section == SYSENV {
            out.push_str(&std::env::var(ref_key).unwrap_or_default());
        } else {
            let raw = lookup(ref_section, ref_key).ok_or_else(|| {
                ConfigError::interpolation(
                    section,
                    key,
                    format!("unknown reference `${{{ref_section}.{ref_key}}}`"),
                )
            })?;
            out.push_str(&expand_at(ref_section, ref_key, raw, lookup, depth + 1)?);
        }
        last = whole.end();
    }
    out.push_str(&value[last..]);
    Ok(out)
}
