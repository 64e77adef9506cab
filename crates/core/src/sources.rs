use log::debug;

use crate::location::{classify, file_url_to_path, is_url, Location};
use crate::overrides::{apply_source_map_path_overrides, OverrideTable};
use crate::path_utils::{normalize, resolve};
use crate::source_root::get_computed_source_root;

/// Prefix a `sources` entry with the map's raw `sourceRoot`, the form override
/// patterns are written against (e.g. `webpack:///` + `./src/app.js`).
pub fn get_full_source_entry(source_root: &str, source: &str) -> String {
    if source_root.is_empty() {
        source.to_string()
    } else if source_root.ends_with('/') {
        format!("{}{}", source_root, source)
    } else {
        format!("{}/{}", source_root, source)
    }
}

/// Resolve every `sources` entry of a map to the location the debugger should read.
///
/// Overrides take precedence: an entry rewritten by `overrides` is returned as
/// rewritten. Otherwise `file://` entries become local paths, absolute paths and
/// other URLs stay put, and relative entries are resolved against the computed
/// source root. Output order follows `sources`.
pub fn resolve_source_entries<S: AsRef<str>>(
    generated: &str,
    source_root: &str,
    sources: &[S],
    web_root: &str,
    overrides: &OverrideTable,
) -> Vec<String> {
    let computed_root = get_computed_source_root(source_root, generated, web_root);
    sources
        .iter()
        .map(|source| resolve_source_entry(source.as_ref(), source_root, &computed_root, overrides))
        .collect()
}

fn resolve_source_entry(
    source: &str,
    source_root: &str,
    computed_root: &str,
    overrides: &OverrideTable,
) -> String {
    let full_entry = get_full_source_entry(source_root, source);
    let mapped = apply_source_map_path_overrides(&full_entry, overrides);
    if mapped != full_entry {
        return file_url_to_path(&mapped).unwrap_or(mapped);
    }

    if let Some(path) = file_url_to_path(source) {
        return path;
    }

    let resolved = match classify(source) {
        Location::Url { .. } => source.to_string(),
        Location::Local { absolute: true, .. } => normalize(source),
        Location::Local { .. } if is_url(computed_root) => get_full_source_entry(computed_root, source),
        Location::Local { .. } => resolve(computed_root, source),
    };
    debug!("SourceMap: source {} -> {}", source, resolved);
    resolved
}
