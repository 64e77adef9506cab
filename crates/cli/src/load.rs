use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use pathmapper_core::{classify, Location};
use reqwest::Client;
use thiserror::Error;
use tokio::fs;
use url::Url;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid url: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("file url does not name a local path: {0}")]
    FileUrl(String),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read the text at a resolved location: a local path, a `file://` URL, or an
/// `http(s)://` URL. Anything else (e.g. `eval://`) cannot be loaded from here.
pub async fn load_text(location: &str) -> Result<String, LoadError> {
    match classify(location) {
        Location::Local { .. } => read_local(Path::new(location)).await,
        Location::Url { scheme, .. } => match scheme.to_ascii_lowercase().as_str() {
            "http" | "https" => fetch_text(location).await,
            "file" => {
                let url = Url::parse(location)?;
                let path = url
                    .to_file_path()
                    .map_err(|_| LoadError::FileUrl(location.to_string()))?;
                read_local(&path).await
            }
            other => Err(LoadError::UnsupportedScheme(other.to_string())),
        },
    }
}

pub async fn read_local(path: &Path) -> Result<String, LoadError> {
    debug!("reading {}", path.display());
    fs::read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fetch text over HTTP. Non-2xx responses are errors; requests time out after 30 seconds.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let url = Url::parse(url)?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(LoadError::UnsupportedScheme(other.to_string())),
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("pathmapper/", env!("CARGO_PKG_VERSION")))
        .build()?;

    debug!("fetching {}", url);
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()? // convert non-2xx into error
        .text()
        .await?;

    Ok(text)
}
