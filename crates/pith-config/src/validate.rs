//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for settings that would make
//! pith produce empty or useless output.

use std::fmt;

use crate::{Config, SplitMode};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The selection budget is zero, so every selection is empty.
    ZeroMaxLength,
    /// The summarization chunk size is zero.
    ZeroChunkSize,
    /// Sentence splitting is enabled with a zero passage size.
    ZeroPassageChars,
    /// Sentence passages are larger than the selection budget.
    PassageExceedsBudget {
        /// Configured passage size.
        passage_chars: usize,
        /// Configured selection budget.
        max_length: usize,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxLength => {
                write!(f, "select.max_length is 0; every selection will be empty")
            }
            Self::ZeroChunkSize => write!(f, "chunk.size is 0; chunking is disabled"),
            Self::ZeroPassageChars => {
                write!(f, "split.passage_chars is 0; sentences will not be grouped")
            }
            Self::PassageExceedsBudget {
                passage_chars,
                max_length,
            } => write!(
                f,
                "split.passage_chars ({passage_chars}) exceeds select.max_length ({max_length}); \
                 full passages may never fit"
            ),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.select.max_length == 0 {
        warnings.push(ConfigWarning::ZeroMaxLength);
    }

    if config.chunk.size == 0 {
        warnings.push(ConfigWarning::ZeroChunkSize);
    }

    if config.split.mode == SplitMode::Sentences {
        if config.split.passage_chars == 0 {
            warnings.push(ConfigWarning::ZeroPassageChars);
        } else if config.select.max_length > 0
            && config.split.passage_chars > config.select.max_length
        {
            warnings.push(ConfigWarning::PassageExceedsBudget {
                passage_chars: config.split.passage_chars,
                max_length: config.select.max_length,
            });
        }
    }

    warnings
}
