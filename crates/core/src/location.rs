use once_cell::sync::Lazy;
use regex::Regex;

// Scheme needs two or more characters so `C://x` is never mistaken for a URL.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]+)://([^/?#]*)([^?#]*)").unwrap()
});

static DRIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]):[\\/]").unwrap());

static DATA_URI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^data:").unwrap());

/// Lexical classification of a location string.
///
/// Nothing here touches the filesystem: "local" only means the string is not
/// written as a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    Local {
        /// Drive letter for `C:\...` / `C:/...` paths.
        drive: Option<char>,
        /// The location as given.
        path: &'a str,
        absolute: bool,
    },
    Url {
        scheme: &'a str,
        /// Host including any `:port`. May be empty (`file:///x`).
        host: &'a str,
        /// Path after the host, without query or fragment. `None` for
        /// pseudo-URLs such as `eval://123`.
        path: Option<&'a str>,
    },
}

impl<'a> Location<'a> {
    pub fn is_url(&self) -> bool {
        matches!(self, Location::Url { .. })
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Location::Local { .. })
    }

    /// `scheme://host` for URLs.
    pub fn origin(&self) -> Option<String> {
        match self {
            Location::Url { scheme, host, .. } => Some(format!("{}://{}", scheme, host)),
            Location::Local { .. } => None,
        }
    }

    /// Path component of a URL, if it has one.
    pub fn url_path(&self) -> Option<&'a str> {
        match self {
            Location::Url { path, .. } => *path,
            Location::Local { .. } => None,
        }
    }
}

/// Classify a location string as a URL or a local (absolute or relative) path.
pub fn classify(location: &str) -> Location<'_> {
    if let Some(caps) = URL_RE.captures(location) {
        let scheme = caps.get(1).map_or("", |m| m.as_str());
        let host = caps.get(2).map_or("", |m| m.as_str());
        let path = caps
            .get(3)
            .map(|m| m.as_str())
            .filter(|p| !p.is_empty());
        return Location::Url { scheme, host, path };
    }

    let drive = drive_letter(location);
    let absolute = drive.is_some() || location.starts_with('/') || location.starts_with('\\');
    Location::Local {
        drive,
        path: location,
        absolute,
    }
}

pub fn is_url(location: &str) -> bool {
    URL_RE.is_match(location)
}

pub fn is_absolute_local_path(location: &str) -> bool {
    matches!(classify(location), Location::Local { absolute: true, .. })
}

pub fn is_data_uri(location: &str) -> bool {
    DATA_URI_RE.is_match(location)
}

/// Drive letter of a `C:\` or `C:/` prefixed path.
pub fn drive_letter(location: &str) -> Option<char> {
    DRIVE_RE
        .captures(location)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}

/// Convert a `file://` URL into a local path string.
///
/// `file:///home/a` becomes `/home/a`, `file:///C:/a` becomes `C:/a`, and the
/// extra slash produced by naively prefixing an absolute path
/// (`file:////home/a`) is dropped. The remainder is otherwise kept verbatim.
/// Returns `None` for anything that is not a file URL.
pub fn file_url_to_path(location: &str) -> Option<String> {
    let rest = location.strip_prefix("file://")?;
    if !rest.starts_with('/') {
        return Some(rest.to_string());
    }

    let trimmed = rest.trim_start_matches('/');
    if drive_letter(trimmed).is_some() {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{}", trimmed))
    }
}
