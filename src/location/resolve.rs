use tracing::{debug, instrument};
use url::Url;

use crate::url_value::UrlValue;

/// True when `url` has both a scheme and an authority host
pub fn is_absolute(url: &str) -> bool {
    !UrlValue::parse(url).is_relative()
}

/// Resolves `relative_path` against `base_path`
///
/// The base path is treated as a directory, so `../c` against
/// `http://example.com/a/b` gives `http://example.com/a/c`. Dot segments
/// are normalized.
///
/// # Arguments
/// * `base_path` - The URL to resolve against; must have a scheme and host
/// * `relative_path` - The reference to resolve, relative or absolute
///
/// # Returns
/// * `String` - The resolved absolute URL, or `relative_path` unchanged when
///   the base is not an absolute URL or cannot be joined
#[instrument(level = "debug", skip_all, fields(base = %base_path, relative = %relative_path))]
pub fn make_absolute(base_path: &str, relative_path: &str) -> String {
    match try_make_absolute(base_path, relative_path) {
        Some(resolved) => resolved,
        None => {
            debug!("Base is not an absolute URL, leaving path as-is");
            relative_path.to_string()
        }
    }
}

fn try_make_absolute(base_path: &str, relative_path: &str) -> Option<String> {
    if !is_absolute(base_path) {
        return None;
    }

    let mut base = match Url::parse(base_path) {
        Ok(base) => base,
        Err(e) => {
            debug!("URL parser rejected base '{}': {}", base_path, e);
            return None;
        }
    };
    if !base.path().ends_with('/') {
        let directory = format!("{}/", base.path());
        base.set_path(&directory);
    }

    match base.join(relative_path) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            debug!("Could not join '{}' onto '{}': {}", relative_path, base, e);
            None
        }
    }
}
