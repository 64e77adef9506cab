use indexmap::IndexMap;
use log::{debug, warn};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::location::is_url;
use crate::path_utils::normalize;

pub const WEB_ROOT_TOKEN: &str = "${webRoot}";

/// Ordered `pattern -> replacement` rewrite rules. The first matching entry wins,
/// so insertion order is kept (including through JSON round trips).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct OverrideTable {
    entries: Vec<(String, String)>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites emitted by common bundlers, expressed against `${webRoot}`.
    pub fn default_web() -> Self {
        [
            ("webpack:///./~/*", "${webRoot}/node_modules/*"),
            ("webpack:///./*", "${webRoot}/*"),
            ("webpack:///src/*", "${webRoot}/*"),
            ("webpack:///*", "*"),
            ("meteor://💻app/*", "${webRoot}/*"),
        ]
        .into_iter()
        .collect()
    }

    /// Add an entry. Re-inserting an existing pattern replaces its value in place.
    pub fn insert(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        let pattern = pattern.into();
        let replacement = replacement.into();
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(entry) => entry.1 = replacement,
            None => self.entries.push((pattern, replacement)),
        }
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, r)| r.as_str())
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.get(pattern).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = OverrideTable::new();
        for (pattern, replacement) in iter {
            table.insert(pattern, replacement);
        }
        table
    }
}

impl From<IndexMap<String, String>> for OverrideTable {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<OverrideTable> for IndexMap<String, String> {
    fn from(table: OverrideTable) -> Self {
        table.entries.into_iter().collect()
    }
}

/// Replace a leading `${webRoot}` in each replacement value with `web_root`.
/// The token anywhere else is left alone.
pub fn resolve_web_root_pattern(web_root: &str, overrides: &OverrideTable) -> OverrideTable {
    overrides
        .iter()
        .map(|(pattern, replacement)| {
            let resolved = match replacement.strip_prefix(WEB_ROOT_TOKEN) {
                Some(rest) => format!("{}{}", web_root, rest),
                None => replacement.to_string(),
            };
            (pattern.to_string(), resolved)
        })
        .collect()
}

/// Rewrite `source_path` with the first applicable override entry.
///
/// Patterns match case-insensitively and may hold one `*`, whose captured text
/// (original casing) is substituted for the `*` in the replacement. Entries whose
/// pattern and replacement disagree on having a wildcard are skipped. Results
/// that are not URLs get their `.`/`..` segments collapsed.
pub fn apply_source_map_path_overrides(source_path: &str, overrides: &OverrideTable) -> String {
    let forward_slash_path = source_path.replace('\\', "/");

    for (pattern, replacement) in overrides.iter() {
        let pattern_stars = pattern.matches('*').count();
        let replacement_stars = replacement.matches('*').count();
        if pattern_stars > 1 || replacement_stars > 1 {
            warn!(
                "only one asterisk allowed in a sourceMapPathOverrides entry - \"{}\": \"{}\"",
                pattern, replacement
            );
            continue;
        }

        let capture = match match_pattern(&forward_slash_path, pattern) {
            Some(capture) => capture,
            None => continue,
        };

        if pattern_stars != replacement_stars {
            debug!(
                "SourceMap: skipping sourceMapPathOverrides entry \"{}\": \"{}\", wildcard counts differ",
                pattern, replacement
            );
            continue;
        }

        let substituted = match replacement.split_once('*') {
            Some((prefix, suffix)) => format!("{}{}{}", prefix, capture.unwrap_or(""), suffix),
            None => replacement.to_string(),
        };
        let mapped = if is_url(&substituted) {
            substituted
        } else {
            normalize(&substituted)
        };

        debug!(
            "SourceMap: mapping {} => {}, via sourceMapPathOverrides entry - \"{}\": \"{}\"",
            source_path, mapped, pattern, replacement
        );
        return mapped;
    }

    source_path.to_string()
}

/// Match `path` against a pattern with at most one `*`.
///
/// `None` when it does not match; `Some(None)` for a literal match;
/// `Some(Some(text))` with the wildcard capture otherwise.
fn match_pattern<'a>(path: &'a str, pattern: &str) -> Option<Option<&'a str>> {
    let pattern = pattern.replace('\\', "/");
    let source = match pattern.split_once('*') {
        Some((prefix, suffix)) => format!(
            "^{}(.*){}$",
            regex::escape(prefix),
            regex::escape(suffix)
        ),
        None => format!("^{}$", regex::escape(&pattern)),
    };

    let re = match RegexBuilder::new(&source)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            warn!("ignoring sourceMapPathOverrides pattern {}: {}", pattern, e);
            return None;
        }
    };

    let caps = re.captures(path)?;
    Some(caps.get(1).map(|m| m.as_str()))
}
