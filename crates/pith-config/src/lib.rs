//! Configuration system for pith.
//!
//! pith uses TOML configuration files named `.pith.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.pith.toml` files
//! found, then loading `~/.pith.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod policy;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::{ConfigError, ParseSettingError};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawChunkSettings, RawConfig, RawLogSettings, RawRankSettings, RawSelectSettings,
    RawSplitSettings, parse_config_file, parse_config_str,
};
pub use policy::{OverflowPolicy, SplitMode};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default character budget for selected text.
pub const DEFAULT_MAX_LENGTH: usize = 2000;
/// Default target size for sentence-regrouped passages.
pub const DEFAULT_PASSAGE_CHARS: usize = 1000;
/// Default summarization chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 4000;
/// Default number of ranked paragraphs displayed.
pub const DEFAULT_RANK_LIMIT: usize = 10;
/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level merged configuration for pith.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.pith.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Budgeted selection settings.
    pub select: SelectSettings,
    /// Passage splitting settings.
    pub split: SplitSettings,
    /// Summarization chunking settings.
    pub chunk: ChunkSettings,
    /// Ranking display settings.
    pub rank: RankSettings,
    /// Logging settings.
    pub log: LogSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.pith.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.pith.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.pith.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A zero character budget (every selection would be empty)
    /// - A zero summarization chunk size
    /// - A zero passage size while splitting by sentence
    /// - Sentence passages that can never fit in the budget
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.pith.toml` file, so the result can be pasted
    /// into a config file as-is.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            select: self.select.clone(),
            split: self.split.clone(),
            chunk: self.chunk.clone(),
            rank: self.rank.clone(),
            log: self.log.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Settings for budgeted selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectSettings {
    /// Maximum characters in the selected text.
    pub max_length: usize,
    /// Handling of paragraphs that do not fit in the remaining budget.
    pub overflow: OverflowPolicy,
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            overflow: OverflowPolicy::default(),
        }
    }
}

/// Settings for cutting documents into candidate passages.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SplitSettings {
    /// Splitting strategy.
    pub mode: SplitMode,
    /// Target passage size when regrouping sentences.
    pub passage_chars: usize,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            mode: SplitMode::default(),
            passage_chars: DEFAULT_PASSAGE_CHARS,
        }
    }
}

/// Settings for `pith chunks`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChunkSettings {
    /// Chunk size in characters.
    pub size: usize,
}

impl Default for ChunkSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Settings for `pith rank`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RankSettings {
    /// Maximum ranked paragraphs to display.
    pub limit: usize,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RANK_LIMIT,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Tracing filter directive, e.g. `warn` or `pith_rank=debug`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Selection settings.
    select: SelectSettings,
    /// Split settings.
    split: SplitSettings,
    /// Chunk settings.
    chunk: ChunkSettings,
    /// Rank settings.
    rank: RankSettings,
    /// Log settings.
    log: LogSettings,
}
