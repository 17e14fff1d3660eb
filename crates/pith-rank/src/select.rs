//! Budgeted selection of ranked passages.
//!
//! Passages are appended in ranked order, each followed by a blank line, while the text so far
//! plus the next passage stays within the character budget. The finished text is trimmed, so
//! its length never exceeds the budget.

use pith_config::OverflowPolicy;
use serde::Serialize;

use crate::rank::Ranking;

/// Separator appended after each selected passage.
const SEPARATOR: &str = "\n\n";

/// Result of a budgeted selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Selected passages joined by blank lines, trimmed.
    pub text: String,
    /// Document-order indices of the selected passages, in selection order.
    pub included: Vec<usize>,
    /// Index of the passage that was cut to fit, if any.
    pub truncated: Option<usize>,
}

impl Selection {
    /// Length of the selected text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Selects ranked passages into at most `max_length` characters.
///
/// `overflow` decides what happens at the first passage that does not fit; see
/// [`OverflowPolicy`]. Zero-score passages are eligible like any other.
pub fn select(ranking: &Ranking<'_>, max_length: usize, overflow: OverflowPolicy) -> Selection {
    let mut text = String::new();
    let mut used = 0;
    let mut included = Vec::new();
    let mut truncated = None;

    for entry in ranking {
        let len = entry.char_len();
        if used + len <= max_length {
            text.push_str(entry.text);
            text.push_str(SEPARATOR);
            used += len + SEPARATOR.len();
            included.push(entry.index);
            continue;
        }

        match overflow {
            OverflowPolicy::Stop => break,
            OverflowPolicy::Skip => continue,
            OverflowPolicy::Truncate => {
                let remaining = max_length.saturating_sub(used);
                let cut = truncate_chars(entry.text, remaining).trim_end();
                if !cut.is_empty() {
                    text.push_str(cut);
                    included.push(entry.index);
                    truncated = Some(entry.index);
                }
                break;
            }
        }
    }

    let text = text.trim().to_string();

    tracing::debug!(
        max_length,
        %overflow,
        chars = text.chars().count(),
        included = included.len(),
        truncated = truncated.is_some(),
        "selected passages"
    );

    Selection {
        text,
        included,
        truncated,
    }
}

/// Returns the first `max_chars` characters of `text`.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
