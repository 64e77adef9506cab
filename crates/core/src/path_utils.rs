//! Lexical path manipulation.
//!
//! Both `/` and `\` are accepted as separators on input. Output uses `\` when
//! the path carries a drive letter, otherwise whichever separator the input
//! used first (`/` by default). These helpers never consult the host
//! filesystem, so results are identical on every platform.

use crate::location::drive_letter;

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn separator_for(path: &str) -> char {
    if drive_letter(path).is_some() {
        return '\\';
    }
    path.chars().find(|c| is_separator(*c)).unwrap_or('/')
}

/// Splits a path into its root (`""`, `"/"`, or `"C:\"`) and the remainder.
fn split_root(path: &str, sep: char) -> (String, &str) {
    if let Some(drive) = drive_letter(path) {
        (format!("{}:{}", drive, sep), &path[3..])
    } else if path.starts_with(is_separator) {
        (sep.to_string(), path.trim_start_matches(is_separator))
    } else {
        (String::new(), path)
    }
}

/// Collapse `.` and `..` segments, duplicate separators, and any trailing
/// separator. `..` cannot climb above the root of an absolute path.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let sep = separator_for(path);
    let (root, rest) = split_root(path, sep);

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().map_or(false, |last| *last != "..") {
                    segments.pop();
                } else if root.is_empty() {
                    segments.push("..");
                }
                // Otherwise already at the root.
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join(&sep.to_string());
    if root.is_empty() && joined.is_empty() {
        ".".to_string()
    } else {
        format!("{}{}", root, joined)
    }
}

/// Append `rel` to `base` and normalize, like `path.join`: an absolute `rel`
/// is still treated as a continuation of `base`.
pub fn join(base: &str, rel: &str) -> String {
    if base.is_empty() {
        return normalize(rel);
    }
    if rel.is_empty() {
        return normalize(base);
    }
    let sep = separator_for(base);
    normalize(&format!("{}{}{}", base, sep, rel))
}

/// Resolve `rel` against the directory `base_dir`. An absolute `rel` replaces
/// the base entirely.
pub fn resolve(base_dir: &str, rel: &str) -> String {
    if drive_letter(rel).is_some() || rel.starts_with(is_separator) {
        normalize(rel)
    } else {
        join(base_dir, rel)
    }
}

/// Drop trailing separators, keeping a bare root (`/`, `C:\`) intact.
pub fn strip_trailing_separator(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        &path[..path.len().min(1)]
    } else if drive_letter(path).is_some() && trimmed.len() == 2 {
        &path[..3]
    } else {
        trimmed
    }
}

/// Directory portion of a path: `/a/b.js` -> `/a`, `/b.js` -> `/`,
/// `b.js` -> `.`.
pub fn dirname(path: &str) -> String {
    let normalized = normalize(path);
    let sep = separator_for(&normalized);
    let (root, rest) = split_root(&normalized, sep);

    match rest.rfind(is_separator) {
        Some(idx) => format!("{}{}", root, &rest[..idx]),
        None if !root.is_empty() => root,
        None => ".".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dots() {
        assert_eq!(normalize("/project/./src/../app.js"), "/project/app.js");
        assert_eq!(normalize("/../../app.js"), "/app.js");
        assert_eq!(normalize("../a/../../b"), "../../b");
        assert_eq!(normalize("a/.."), ".");
        assert_eq!(normalize("/project/src/"), "/project/src");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn normalize_keeps_three_dot_segments() {
        assert_eq!(normalize(".../src//app.js"), ".../src/app.js");
    }

    #[test]
    fn drive_paths_use_backslashes() {
        assert_eq!(normalize("C:/project/src/../app.js"), "C:\\project\\app.js");
        assert_eq!(dirname("c:\\project\\app.js"), "c:\\project");
        assert_eq!(dirname("c:\\app.js"), "c:\\");
    }

    #[test]
    fn join_treats_absolute_rel_as_continuation() {
        assert_eq!(join("/project/webroot", "/src"), "/project/webroot/src");
        assert_eq!(join("", "/src"), "/src");
        assert_eq!(join("/project", ""), "/project");
    }

    #[test]
    fn resolve_replaces_base_for_absolute_rel() {
        assert_eq!(resolve("/project", "/other/app.js"), "/other/app.js");
        assert_eq!(resolve("/project/code", "../src"), "/project/src");
    }

    #[test]
    fn strip_trailing_separator_keeps_roots() {
        assert_eq!(strip_trailing_separator("/project/src/"), "/project/src");
        assert_eq!(strip_trailing_separator("C:\\project\\"), "C:\\project");
        assert_eq!(strip_trailing_separator("///"), "/");
        assert_eq!(strip_trailing_separator("C:\\"), "C:\\");
        assert_eq!(strip_trailing_separator(""), "");
    }

    #[test]
    fn dirname_variants() {
        assert_eq!(dirname("/project/app.js"), "/project");
        assert_eq!(dirname("/app.js"), "/");
        assert_eq!(dirname("app.js"), ".");
        assert_eq!(dirname("dist/app.js"), "dist");
    }
}
