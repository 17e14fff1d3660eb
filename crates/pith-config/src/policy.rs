//! Enumerated selection and splitting policies.
//!
//! These are configuration values, so they live here rather than in the ranking crate. Both
//! round-trip through TOML (lowercase names) and through `FromStr`/`Display` for the CLI.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseSettingError;

/// What to do with a ranked paragraph that does not fit in the remaining budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// End selection at the first paragraph that does not fit.
    #[default]
    Stop,
    /// Pass over the paragraph and keep trying lower-ranked ones.
    Skip,
    /// Cut the paragraph to the remaining budget, then end selection.
    Truncate,
}

impl OverflowPolicy {
    /// Accepted spellings, for error messages and help text.
    pub const NAMES: &'static str = "stop, skip, truncate";
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Skip => write!(f, "skip"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stop" => Ok(Self::Stop),
            "skip" => Ok(Self::Skip),
            "truncate" => Ok(Self::Truncate),
            _ => Err(ParseSettingError {
                setting: "overflow policy",
                value: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

/// How a document is cut into candidate passages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Blank-line boundaries only.
    #[default]
    Paragraphs,
    /// Blank-line boundaries, with oversized paragraphs regrouped by sentence.
    Sentences,
}

impl SplitMode {
    /// Accepted spellings, for error messages and help text.
    pub const NAMES: &'static str = "paragraphs, sentences";
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraphs => write!(f, "paragraphs"),
            Self::Sentences => write!(f, "sentences"),
        }
    }
}

impl FromStr for SplitMode {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paragraphs" | "paragraph" => Ok(Self::Paragraphs),
            "sentences" | "sentence" => Ok(Self::Sentences),
            _ => Err(ParseSettingError {
                setting: "split mode",
                value: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_policy_parses_case_insensitively() {
        assert_eq!("stop".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Stop));
        assert_eq!("SKIP".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Skip));
        assert_eq!(
            " Truncate ".parse::<OverflowPolicy>(),
            Ok(OverflowPolicy::Truncate)
        );
    }

    #[test]
    fn overflow_policy_rejects_unknown() {
        let err = "clip".parse::<OverflowPolicy>().unwrap_err();
        assert_eq!(err.value, "clip");
        assert!(err.to_string().contains("stop, skip, truncate"));
    }

    #[test]
    fn display_matches_parse() {
        for policy in [
            OverflowPolicy::Stop,
            OverflowPolicy::Skip,
            OverflowPolicy::Truncate,
        ] {
            assert_eq!(policy.to_string().parse::<OverflowPolicy>(), Ok(policy));
        }
        for mode in [SplitMode::Paragraphs, SplitMode::Sentences] {
            assert_eq!(mode.to_string().parse::<SplitMode>(), Ok(mode));
        }
    }

    #[test]
    fn split_mode_accepts_singular() {
        assert_eq!("sentence".parse::<SplitMode>(), Ok(SplitMode::Sentences));
        assert!("words".parse::<SplitMode>().is_err());
    }

    #[test]
    fn defaults_are_reference_behavior() {
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Stop);
        assert_eq!(SplitMode::default(), SplitMode::Paragraphs);
    }
}
