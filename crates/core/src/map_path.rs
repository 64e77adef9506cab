use log::debug;

use crate::location::{classify, is_data_uri, Location};
use crate::path_utils::{dirname, resolve};

/// Resolve where a source map lives, given the generated script's location and
/// the map reference it declares (its `sourceMappingURL`).
///
/// * URLs, `data:` URIs and drive-letter paths are already complete.
/// * `/maps/app.js.map` is rooted at the script's origin when the script is
///   served, and is a local absolute path otherwise.
/// * Anything else is relative to the script's directory.
pub fn resolve_map_path(generated: &str, map_field: &str) -> String {
    let field_location = classify(map_field);
    let has_drive = matches!(field_location, Location::Local { drive: Some(_), .. });
    if field_location.is_url() || is_data_uri(map_field) || has_drive {
        return map_field.to_string();
    }

    let generated_location = classify(generated);
    let rooted = map_field.starts_with('/') || map_field.starts_with('\\');

    let resolved = match generated_location {
        Location::Url { scheme, host, path } => {
            // URL paths only use forward slashes.
            let url_field = map_field.replace('\\', "/");
            if rooted {
                format!("{}://{}{}", scheme, host, url_field)
            } else {
                let path = path.unwrap_or("/");
                let dir = path.rfind('/').map_or("/", |idx| &path[..=idx]);
                let field = url_field.strip_prefix("./").unwrap_or(&url_field);
                format!("{}://{}{}{}", scheme, host, dir, field)
            }
        }
        Location::Local { .. } if rooted => map_field.to_string(),
        Location::Local { .. } => resolve(&dirname(generated), map_field),
    };

    debug!("SourceMap: resolved map path {} -> {}", map_field, resolved);
    resolved
}
