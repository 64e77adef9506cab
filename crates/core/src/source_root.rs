use log::debug;

use crate::location::{classify, file_url_to_path, is_absolute_local_path, is_url, Location};
use crate::path_utils::{dirname, join, resolve, strip_trailing_separator};

/// Compute the directory a source map's relative `sources` are resolved against.
///
/// * `source_root` – the map's raw `sourceRoot` (may be empty).
/// * `generated` – location of the generated script, a local path or a URL.
/// * `web_root` – local directory mirroring the server root (may be empty).
///
/// Rules, first match wins:
/// 1. `file://` source root: the local path it names.
/// 2. Absolute source root (`/src`, `C:\src`): appended to `web_root`.
/// 3. Relative source root, local script: resolved against the script's directory.
/// 4. Relative source root, served script: resolved against the URL path's
///    directory, then appended to `web_root`.
/// 5. No source root, local script: the script's directory.
/// 6. No source root, served script: `web_root` plus the URL path's directory.
/// 7. No source root and no URL path (`eval://123`): `web_root` as given.
pub fn get_computed_source_root(source_root: &str, generated: &str, web_root: &str) -> String {
    let generated_path = file_url_to_path(generated);
    let generated = generated_path.as_deref().unwrap_or(generated);
    let location = classify(generated);

    if !source_root.is_empty() {
        let computed = if let Some(path) = file_url_to_path(source_root) {
            strip_trailing_separator(&path).to_string()
        } else if is_absolute_local_path(source_root) {
            join(web_root, source_root)
        } else if is_url(source_root) {
            // Already fully specified somewhere else; nothing local to anchor it to.
            source_root.to_string()
        } else {
            match location {
                Location::Local { .. } => resolve(&dirname(generated), source_root),
                Location::Url { path, .. } => {
                    let url_dir = dirname(path.unwrap_or("/"));
                    let resolved = resolve(&url_dir, source_root);
                    if web_root.is_empty() {
                        resolved
                    } else {
                        join(web_root, &resolved)
                    }
                }
            }
        };
        debug!("SourceMap: resolved sourceRoot {} -> {}", source_root, computed);
        return computed;
    }

    match location {
        Location::Local { .. } => {
            let computed = dirname(generated);
            debug!("SourceMap: no sourceRoot specified, using script dirname: {}", computed);
            computed
        }
        Location::Url { path: Some(path), .. } => {
            let computed = join(web_root, &dirname(path));
            debug!(
                "SourceMap: no sourceRoot specified, using webRoot + script path dirname: {}",
                computed
            );
            computed
        }
        Location::Url { path: None, .. } => {
            debug!("SourceMap: no sourceRoot and no script path for {}, using webRoot", generated);
            web_root.to_string()
        }
    }
}
