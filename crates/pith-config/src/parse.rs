//! Configuration file parsing.
//!
//! Parses individual `.pith.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{ConfigError, OverflowPolicy, SplitMode};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Selection section.
    pub select: Option<RawSelectSettings>,
    /// Split section.
    pub split: Option<RawSplitSettings>,
    /// Chunk section.
    pub chunk: Option<RawChunkSettings>,
    /// Rank section.
    pub rank: Option<RawRankSettings>,
    /// Log section.
    pub log: Option<RawLogSettings>,
}

/// Raw selection settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSelectSettings {
    /// Maximum characters in the selected text.
    pub max_length: Option<usize>,
    /// Handling of paragraphs that do not fit.
    pub overflow: Option<OverflowPolicy>,
}

/// Raw split settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSplitSettings {
    /// Splitting strategy.
    pub mode: Option<SplitMode>,
    /// Target passage size when regrouping sentences.
    pub passage_chars: Option<usize>,
}

/// Raw chunk settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawChunkSettings {
    /// Chunk size in characters.
    pub size: Option<usize>,
}

/// Raw rank settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawRankSettings {
    /// Maximum ranked paragraphs to display.
    pub limit: Option<usize>,
}

/// Raw log settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawLogSettings {
    /// Tracing filter directive.
    pub level: Option<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
