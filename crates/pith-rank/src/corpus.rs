//! Term and document frequency statistics.
//!
//! The corpus is the set of passages of one document. It is rebuilt for every ranking call and
//! never includes the query.

use std::collections::{BTreeMap, BTreeSet};

use crate::tokenize::tokenize;

/// Document frequency statistics over a set of passages.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Number of documents added.
    documents: usize,
    /// Number of documents containing each term at least once.
    document_frequency: BTreeMap<String, usize>,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from raw documents.
    ///
    /// Every document counts toward the corpus size, including documents without terms.
    /// Callers that want empty passages excluded should filter them first.
    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::new();
        for doc in documents {
            corpus.add_tokens(&tokenize(doc.as_ref()));
        }
        corpus
    }

    /// Adds one tokenized document.
    pub fn add_tokens(&mut self, tokens: &[String]) {
        self.documents += 1;
        let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in distinct {
            *self
                .document_frequency
                .entry(term.to_string())
                .or_insert(0) += 1;
        }
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents
    }

    /// Returns true if no documents were added.
    pub fn is_empty(&self) -> bool {
        self.documents == 0
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Inverse document frequency of `term`: `ln(N / (1 + df))`.
    ///
    /// The result is negative for terms found in more than `N/e - 1` documents and is not
    /// clamped. An empty corpus yields 0.
    pub fn idf(&self, term: &str) -> f64 {
        if self.documents == 0 {
            return 0.0;
        }
        let df = self.document_frequency(term) as f64;
        (self.documents as f64 / (1.0 + df)).ln()
    }

    /// Iterates over every term with its document frequency, in term order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.document_frequency
            .iter()
            .map(|(term, df)| (term.as_str(), *df))
    }

    /// Number of distinct terms.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }
}

/// Fraction of `tokens` equal to `term`; 0 for an empty token list.
fn term_frequency(term: &str, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let count = tokens.iter().filter(|t| *t == term).count();
    count as f64 / tokens.len() as f64
}

/// Term frequency of `term` in `document`.
///
/// Returns 0 when the document has no terms.
pub fn tf(term: &str, document: &str) -> f64 {
    term_frequency(term, &tokenize(document))
}

/// Inverse document frequency of `term` across `documents`.
pub fn idf<S: AsRef<str>>(term: &str, documents: &[S]) -> f64 {
    Corpus::from_documents(documents).idf(term)
}
