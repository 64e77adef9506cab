use std::path::Path;

use log::info;
use pathmapper_core::location::is_data_uri;
use pathmapper_core::{
    apply_source_map_path_overrides, find_map_field, get_computed_source_root, resolve_map_path,
    ConfigError, ResolverConfig,
};
use serde::Serialize;
use sourcemap::{DecodedMap, SourceMap};

use crate::load::{self, LoadError};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to parse source map {location}: {source}")]
    SourceMap {
        location: String,
        source: sourcemap::Error,
    },
    #[error("unsupported inline source map in {0}")]
    InlineMap(String),
    #[error("no sourceMappingURL annotation found in {0}")]
    NoMapField(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSource {
    pub source: String,
    pub resolved: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub map_location: String,
    pub source_root: String,
    pub computed_source_root: String,
    pub sources: Vec<ResolvedSource>,
}

/// Load the resolver config from an optional JSON file; `--web-root` wins over the file.
pub async fn load_config(path: Option<&Path>, web_root: Option<String>) -> Result<ResolverConfig, CliError> {
    let mut config = match path {
        Some(p) => ResolverConfig::from_json(&load::read_local(p).await?)?,
        None => ResolverConfig::default(),
    };
    if let Some(web_root) = web_root {
        config = config.with_web_root(web_root);
    }
    Ok(config)
}

pub fn handle_source_root(source_root: &str, generated: &str, config: &ResolverConfig) {
    println!("{}", get_computed_source_root(source_root, generated, &config.web_root));
}

pub fn handle_map_path(generated: &str, map_field: &str) {
    println!("{}", resolve_map_path(generated, map_field));
}

pub fn handle_override(path: &str, config: &ResolverConfig) {
    println!("{}", apply_source_map_path_overrides(path, &config.effective_overrides()));
}

/// Read a generated script, follow its `sourceMappingURL`, and resolve every source in the map.
pub async fn resolve_script(generated: &str, config: &ResolverConfig) -> Result<Resolution, CliError> {
    let script = load::load_text(generated).await?;
    let map_field = find_map_field(&script).ok_or_else(|| CliError::NoMapField(generated.to_string()))?;
    let map_location = resolve_map_path(generated, &map_field);
    info!("source map for {} is {}", generated, truncate(&map_location));

    let sm = if is_data_uri(&map_location) {
        match sourcemap::decode_data_url(&map_location) {
            Ok(DecodedMap::Regular(sm)) => sm,
            Ok(_) => return Err(CliError::InlineMap(generated.to_string())),
            Err(source) => {
                return Err(CliError::SourceMap {
                    location: generated.to_string(),
                    source,
                })
            }
        }
    } else {
        let map_text = load::load_text(&map_location).await?;
        SourceMap::from_slice(map_text.as_bytes()).map_err(|source| CliError::SourceMap {
            location: map_location.clone(),
            source,
        })?
    };

    let source_root = sm.get_source_root().unwrap_or("").to_string();
    let raw_sources = raw_sources(&sm, &source_root);
    let resolved = config.resolve_sources(generated, &source_root, &raw_sources);

    Ok(Resolution {
        computed_source_root: get_computed_source_root(&source_root, generated, &config.web_root),
        map_location,
        source_root,
        sources: raw_sources
            .into_iter()
            .zip(resolved)
            .map(|(source, resolved)| ResolvedSource { source, resolved })
            .collect(),
    })
}

pub async fn handle_resolve(generated: &str, config: &ResolverConfig, json: bool) -> Result<(), CliError> {
    let resolution = resolve_script(generated, config).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("# map: {}", truncate(&resolution.map_location));
        println!("# sourceRoot: {}", resolution.computed_source_root);
        for s in &resolution.sources {
            println!("{} -> {}", s.source, s.resolved);
        }
    }
    Ok(())
}

/// `sources` as written in the map. The parser may already have prefixed
/// entries with the source root, so that prefix is removed again.
fn raw_sources(sm: &SourceMap, source_root: &str) -> Vec<String> {
    (0..sm.get_source_count())
        .filter_map(|i| sm.get_source(i))
        .map(|src| {
            if source_root.is_empty() {
                return src.to_string();
            }
            match src.strip_prefix(source_root) {
                Some(rest) if source_root.ends_with('/') => rest.to_string(),
                Some(rest) if rest.starts_with('/') => rest[1..].to_string(),
                _ => src.to_string(),
            }
        })
        .collect()
}

// Inline maps are long base64 blobs.
fn truncate(location: &str) -> String {
    if location.len() > 80 && is_data_uri(location) {
        let cut = location
            .char_indices()
            .nth(60)
            .map_or(location.len(), |(idx, _)| idx);
        format!("{}...", &location[..cut])
    } else {
        location.to_string()
    }
}
