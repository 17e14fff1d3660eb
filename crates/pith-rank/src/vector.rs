//! Sparse TF-IDF term vectors and cosine similarity.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{corpus::Corpus, tokenize::tokenize};

/// Sparse mapping from term to TF-IDF weight.
///
/// Only terms that occur in the source text are present. Terms are kept in sorted order so
/// that sums over the vector are evaluated in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TermVector {
    /// Weight per term.
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Builds the TF-IDF vector of a tokenized text against `corpus`.
    pub fn from_tokens(tokens: &[String], corpus: &Corpus) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for term in tokens {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }

        let total = tokens.len() as f64;
        let weights = counts
            .into_iter()
            .map(|(term, count)| (term.to_string(), count as f64 / total * corpus.idf(term)))
            .collect();
        Self { weights }
    }

    /// Weight of `term`, if present.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// Number of terms in the vector.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the vector has no terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over `(term, weight)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(term, w)| (term.as_str(), *w))
    }

    /// Euclidean norm of the weights.
    pub fn magnitude(&self) -> f64 {
        self.weights
            .values()
            .fold(0.0, |acc, w| acc + w * w)
            .sqrt()
    }

    /// Dot product over the terms of `self`; terms missing from `other` contribute nothing.
    pub fn dot(&self, other: &Self) -> f64 {
        self.weights
            .iter()
            .fold(0.0, |acc, (term, w)| {
                acc + w * other.get(term).unwrap_or(0.0)
            })
    }
}

impl FromIterator<(String, f64)> for TermVector {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// Builds the TF-IDF vector of `doc` against `corpus`.
///
/// `doc` is not added to the corpus.
pub fn vectorize(doc: &str, corpus: &Corpus) -> TermVector {
    TermVector::from_tokens(&tokenize(doc), corpus)
}

/// Cosine similarity of two term vectors.
///
/// Returns exactly 0 when either vector has zero magnitude, so callers never see NaN.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let denominator = a.magnitude() * b.magnitude();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0)
}
