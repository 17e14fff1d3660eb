//! Word tokenization.
//!
//! A term is a maximal run of Unicode word characters (`\w`: letters, combining marks, digits
//! and connector punctuation such as `_`) in the lowercased text. There is no stemming and no
//! stopword filtering: every word counts.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of Unicode word characters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Finds the words of `text` in their original case, with their byte offsets.
///
/// Lowercasing a word found here yields the term [`tokenize`] produces for it.
pub fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    WORD.find_iter(text).map(|m| (m.start(), m.as_str()))
}

/// Splits text into lowercase terms, in order of appearance.
///
/// Returns an empty vector when the text has no word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}
