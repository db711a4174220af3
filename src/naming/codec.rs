// src/naming/codec.rs
// =============================================================================
// URL -> file name encoding.
//
// How a name is built:
// 1. Pick the "basis" string:
//    - no file extension in the path: host + path, one trailing '/' removed
//    - file extension in the path:    directory + stem, leading '/' removed
// 2. Replace every character that is not an ASCII letter or digit with '-'
//    (each character gets its own dash, runs are NOT collapsed)
// 3. Append ".html" (no extension) or the original extension
//
// Examples:
//   https://ru.hexlet.io/courses      -> ru-hexlet-io-courses.html
//   https://hexlet.io/                -> hexlet-io.html
//   https://ru.hexlet.io/css/app.css  -> css-app.css
// =============================================================================

use serde::{Deserialize, Serialize};
use url::Url;

/// Suffix appended to the page basis to name its asset directory.
pub const ASSET_DIR_SUFFIX: &str = "_files";

/// Extension given to pages whose URL path has none.
const DEFAULT_EXTENSION: &str = ".html";

/// Knobs that change how URLs are encoded into names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingOptions {
    /// Fold the query string into the basis (`/app.js?v=2` -> `app-v-2.js`).
    /// Off by default: `?v=1` and `?v=2` then share one file.
    pub include_query: bool,
}

/// Local file name for the page itself.
pub fn name_for_page(url: &Url, options: NamingOptions) -> String {
    file_name(url, options)
}

/// Local file name for an asset, relative to the asset directory.
pub fn name_for_asset(url: &Url, options: NamingOptions) -> String {
    file_name(url, options)
}

/// Name of the directory holding the page's assets.
pub fn name_for_asset_dir(url: &Url, options: NamingOptions) -> String {
    format!("{}{}", basis(url, options), ASSET_DIR_SUFFIX)
}

/// Joins an asset directory and an asset file name with '/', the form written
/// back into the HTML regardless of platform.
pub fn local_relative_path(asset_dir_name: &str, file_name: &str) -> String {
    format!("{}/{}", asset_dir_name, file_name)
}

/// The dash-normalized root shared by every name derived from `url`.
pub fn basis(url: &Url, options: NamingOptions) -> String {
    let mut link = normalized_link(url);

    if options.include_query {
        if let Some(query) = url.query().filter(|q| !q.is_empty()) {
            link.push('?');
            link.push_str(query);
        }
    }

    link.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

fn file_name(url: &Url, options: NamingOptions) -> String {
    let extension = extension(url.path()).unwrap_or(DEFAULT_EXTENSION);
    format!("{}{}", basis(url, options), extension)
}

// The raw (not yet dashed) basis.
fn normalized_link(url: &Url) -> String {
    let path = url.path();

    match extension(path) {
        None => {
            let mut link = format!("{}{}", url.host_str().unwrap_or_default(), path);
            if link.ends_with('/') {
                link.pop();
            }
            link
        }
        Some(ext) => {
            let trimmed = path.trim_end_matches('/');
            let stem = &trimmed[..trimmed.len() - ext.len()];
            stem.strip_prefix('/').unwrap_or(stem).to_string()
        }
    }
}

// Extension of the last path segment, dot included.
//
// Trailing slashes are ignored. A dot that starts the segment (".htaccess")
// or ends it ("file.") does not make an extension.
fn extension(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let dot = segment.rfind('.')?;

    if dot == 0 || dot + 1 == segment.len() {
        return None;
    }

    Some(&segment[dot..])
}
