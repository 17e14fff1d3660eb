//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence rules.

use std::path::PathBuf;

use crate::{
    ChunkSettings, Config, LogSettings, RankSettings, SelectSettings, SplitSettings,
    parse::{
        RawChunkSettings, RawConfig, RawLogSettings, RawRankSettings, RawSelectSettings,
        RawSplitSettings,
    },
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). Each scalar takes the value from the highest
/// precedence file that defines it, falling back to the built-in default.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut config = Config {
        config_root: configs
            .first()
            .and_then(|c| c.path.parent())
            .map(|p| p.to_path_buf()),
        ..Config::default()
    };

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref select) = raw.select {
            apply_raw_select(&mut config.select, select);
        }
        if let Some(ref split) = raw.split {
            apply_raw_split(&mut config.split, split);
        }
        if let Some(ref chunk) = raw.chunk {
            apply_raw_chunk(&mut config.chunk, chunk);
        }
        if let Some(ref rank) = raw.rank {
            apply_raw_rank(&mut config.rank, rank);
        }
        if let Some(ref log) = raw.log {
            apply_raw_log(&mut config.log, log);
        }
    }

    config
}

/// Applies raw selection settings to result, overwriting any present values.
fn apply_raw_select(result: &mut SelectSettings, raw: &RawSelectSettings) {
    if let Some(v) = raw.max_length {
        result.max_length = v;
    }
    if let Some(v) = raw.overflow {
        result.overflow = v;
    }
}

/// Applies raw split settings to result.
fn apply_raw_split(result: &mut SplitSettings, raw: &RawSplitSettings) {
    if let Some(v) = raw.mode {
        result.mode = v;
    }
    if let Some(v) = raw.passage_chars {
        result.passage_chars = v;
    }
}

/// Applies raw chunk settings to result.
fn apply_raw_chunk(result: &mut ChunkSettings, raw: &RawChunkSettings) {
    if let Some(v) = raw.size {
        result.size = v;
    }
}

/// Applies raw rank settings to result.
fn apply_raw_rank(result: &mut RankSettings, raw: &RawRankSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Applies raw log settings to result.
fn apply_raw_log(result: &mut LogSettings, raw: &RawLogSettings) {
    if let Some(ref v) = raw.level {
        result.level = v.clone();
    }
}
