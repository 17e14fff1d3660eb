//! Passage ranking by TF-IDF cosine similarity.

use std::{cmp::Ordering, slice};

use serde::Serialize;

use crate::{
    corpus::Corpus,
    split::Passage,
    tokenize::tokenize,
    vector::{TermVector, cosine_similarity},
};

/// A passage with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedParagraph<'a> {
    /// Position of the passage in document order.
    pub index: usize,
    /// Byte offset of the passage within the document.
    pub offset: usize,
    /// Passage text.
    pub text: &'a str,
    /// Cosine similarity to the query.
    pub score: f64,
}

impl RankedParagraph<'_> {
    /// Length of the passage in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Passages ordered by descending similarity to a query.
///
/// Passages with equal scores keep their document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking<'a> {
    /// Ranked entries, best first.
    entries: Vec<RankedParagraph<'a>>,
}

impl<'a> Ranking<'a> {
    /// Number of ranked passages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the ranked passages, best first.
    pub fn iter(&self) -> slice::Iter<'_, RankedParagraph<'a>> {
        self.entries.iter()
    }

    /// The ranked passages as a slice, best first.
    pub fn entries(&self) -> &[RankedParagraph<'a>] {
        &self.entries
    }

    /// Keeps only the best `limit` passages.
    pub fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }
}

impl<'r, 'a> IntoIterator for &'r Ranking<'a> {
    type Item = &'r RankedParagraph<'a>;
    type IntoIter = slice::Iter<'r, RankedParagraph<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds the corpus of a set of passages.
pub fn build_corpus(passages: &[Passage<'_>]) -> Corpus {
    let mut corpus = Corpus::new();
    for passage in passages {
        corpus.add_tokens(passage.tokens());
    }
    corpus
}

/// Ranks passages by cosine similarity between their TF-IDF vectors and the query's.
///
/// The IDF statistics come from the passages alone; the query is vectorized against them
/// without being added. The sort is stable, so ties keep document order.
pub fn rank_passages<'a>(passages: &[Passage<'a>], query: &str) -> Ranking<'a> {
    let corpus = build_corpus(passages);
    let query_vector = TermVector::from_tokens(&tokenize(query), &corpus);

    let mut entries: Vec<RankedParagraph<'a>> = passages
        .iter()
        .map(|passage| {
            let vector = TermVector::from_tokens(passage.tokens(), &corpus);
            RankedParagraph {
                index: passage.index,
                offset: passage.offset,
                text: passage.text,
                score: cosine_similarity(&query_vector, &vector),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    tracing::debug!(
        passages = entries.len(),
        vocabulary = corpus.vocabulary_size(),
        query_terms = query_vector.len(),
        top_score = entries.first().map(|e| e.score),
        "ranked passages"
    );

    Ranking { entries }
}
