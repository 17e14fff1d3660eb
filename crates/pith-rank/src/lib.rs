//! Lexical passage ranking for prompt context.
//!
//! Given a long document and a short query, pith picks the passages most relevant to the query
//! and joins them into a text that fits a character budget. The result is meant to be embedded
//! in a prompt for a text-completion service, so only the relevant part of a large document is
//! sent along with a question.
//!
//! Ranking is purely lexical:
//!
//! 1. **Split**: cut the document into paragraphs at blank lines (optionally regrouping long
//!    paragraphs by sentence)
//! 2. **Weigh**: build a TF-IDF vector for each paragraph, with IDF computed over the
//!    document's own paragraphs
//! 3. **Compare**: score each paragraph by cosine similarity to the query's vector
//! 4. **Select**: append paragraphs in ranked order until the budget is reached
//!
//! Everything is computed per call; nothing is cached between calls.

#![warn(missing_docs)]

mod chunk;
mod corpus;
mod rank;
mod select;
mod split;
mod tokenize;
mod vector;

pub use chunk::chunk_text;
pub use corpus::{Corpus, idf, tf};
use pith_config::{Config, DEFAULT_MAX_LENGTH};
pub use pith_config::{OverflowPolicy, SplitMode};
pub use rank::{RankedParagraph, Ranking, build_corpus, rank_passages};
pub use select::{Selection, select};
pub use split::{Passage, SplitOptions, split_passages};
pub use tokenize::{tokenize, words};
pub use vector::{TermVector, cosine_similarity, vectorize};

/// Ranks and selects document passages for a query.
///
/// A `Ranker` only holds options; it keeps no state between calls and can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    /// How documents are split into passages.
    split: SplitOptions,
    /// Character budget for selections.
    max_length: usize,
    /// Handling of passages that do not fit.
    overflow: OverflowPolicy,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl Ranker {
    /// Creates a ranker with the given budget and default split and overflow behavior.
    pub fn new(max_length: usize) -> Self {
        Self {
            split: SplitOptions::default(),
            max_length,
            overflow: OverflowPolicy::default(),
        }
    }

    /// Creates a ranker from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            split: SplitOptions::from(&config.split),
            max_length: config.select.max_length,
            overflow: config.select.overflow,
        }
    }

    /// Sets the character budget.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Sets the split options.
    pub fn with_split(mut self, split: SplitOptions) -> Self {
        self.split = split;
        self
    }

    /// The character budget.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The overflow policy.
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// The split options.
    pub fn split(&self) -> SplitOptions {
        self.split
    }

    /// Splits a document into candidate passages.
    pub fn passages<'a>(&self, full_text: &'a str) -> Vec<Passage<'a>> {
        split_passages(full_text, &self.split)
    }

    /// Ranks the passages of `full_text` against `query`.
    pub fn rank<'a>(&self, full_text: &'a str, query: &str) -> Ranking<'a> {
        rank_passages(&self.passages(full_text), query)
    }

    /// Ranks the passages of `full_text` and selects the best within the budget.
    pub fn select(&self, full_text: &str, query: &str) -> Selection {
        select(&self.rank(full_text, query), self.max_length, self.overflow)
    }
}

/// Returns the passages of `full_text` most relevant to `query`, within `max_length`
/// characters.
///
/// Uses blank-line paragraphs and stops at the first paragraph that does not fit, so an
/// over-budget top paragraph yields an empty string. Degenerate inputs (empty document, empty
/// query, no shared terms) never fail; without any shared terms the result is the leading
/// paragraphs in document order.
pub fn find_most_relevant_text(full_text: &str, query: &str, max_length: usize) -> String {
    Ranker::new(max_length).select(full_text, query).text
}
