//! Splitting documents into candidate passages.
//!
//! The base unit is the paragraph: a run of non-blank lines, delimited by one or more lines
//! that contain only whitespace. Extracted PDF text often has no blank lines at all, which
//! would leave one giant paragraph; [`SplitMode::Sentences`] regroups such oversized paragraphs
//! into sentence-aligned passages.

use pith_config::{DEFAULT_PASSAGE_CHARS, SplitMode, SplitSettings};
use unicode_segmentation::UnicodeSegmentation;

use crate::tokenize::tokenize;

/// Options controlling how a document is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Splitting strategy.
    pub mode: SplitMode,
    /// Target passage size in characters when regrouping sentences.
    pub passage_chars: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            mode: SplitMode::Paragraphs,
            passage_chars: DEFAULT_PASSAGE_CHARS,
        }
    }
}

impl From<&SplitSettings> for SplitOptions {
    fn from(settings: &SplitSettings) -> Self {
        Self {
            mode: settings.mode,
            passage_chars: settings.passage_chars,
        }
    }
}

/// A candidate passage of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Passage<'a> {
    /// Position among the document's passages, in document order.
    pub index: usize,
    /// Byte offset of the passage within the document.
    pub offset: usize,
    /// Passage text as it appears in the document, indentation included.
    pub text: &'a str,
    /// Lowercase terms of the passage.
    tokens: Vec<String>,
}

impl Passage<'_> {
    /// Lowercase terms of the passage, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Length of the passage in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits a document into passages.
///
/// Passages without any terms are dropped. The result is deterministic for a given document
/// and options, and passages are numbered in document order.
pub fn split_passages<'a>(text: &'a str, options: &SplitOptions) -> Vec<Passage<'a>> {
    let mut passages = Vec::new();

    for (offset, paragraph) in paragraph_spans(text) {
        let pieces = match options.mode {
            SplitMode::Paragraphs => vec![(offset, paragraph)],
            SplitMode::Sentences => regroup_sentences(offset, paragraph, options.passage_chars),
        };

        for (offset, piece) in pieces {
            let tokens = tokenize(piece);
            if tokens.is_empty() {
                continue;
            }
            passages.push(Passage {
                index: passages.len(),
                offset,
                text: piece,
                tokens,
            });
        }
    }

    passages
}

/// Finds blank-line delimited paragraphs, returning each span with its byte offset.
///
/// A span runs from the start of its first non-blank line to the end of its last non-blank
/// line, without that line's terminator. Leading indentation and trailing spaces are kept so
/// budgets count the paragraph as written.
fn paragraph_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                spans.push((s, &text[s..end]));
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.trim_end_matches(['\n', '\r']).len();
        }
        offset += line.len();
    }

    if let Some(s) = start {
        spans.push((s, &text[s..end]));
    }

    spans
}

/// Trims `text[start..end]` and returns it with the offset of its first non-space byte.
fn trimmed_span(text: &str, start: usize, end: usize) -> (usize, &str) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    (start + leading, raw.trim())
}

/// Regroups a paragraph longer than `limit` characters into consecutive sentence groups.
///
/// Each group holds as many whole sentences as fit in `limit` characters; a single sentence
/// longer than the limit forms its own group. Paragraphs within the limit, and a zero limit,
/// leave the paragraph as is. Groups are trimmed.
fn regroup_sentences(offset: usize, paragraph: &str, limit: usize) -> Vec<(usize, &str)> {
    if limit == 0 || paragraph.chars().count() <= limit {
        return vec![(offset, paragraph)];
    }

    let mut groups = Vec::new();
    let mut group_start = 0;
    let mut group_chars = 0;

    for (idx, sentence) in paragraph.split_sentence_bound_indices() {
        let chars = sentence.chars().count();
        if group_chars > 0 && group_chars + chars > limit {
            groups.push(trimmed_span(paragraph, group_start, idx));
            group_start = idx;
            group_chars = 0;
        }
        group_chars += chars;
    }
    if group_start < paragraph.len() {
        groups.push(trimmed_span(paragraph, group_start, paragraph.len()));
    }

    tracing::trace!(
        offset,
        groups = groups.len(),
        "regrouped oversized paragraph by sentence"
    );

    groups
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(rel, text)| (offset + rel, text))
        .collect()
}
