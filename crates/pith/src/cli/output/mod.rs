//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
pub use pith_highlight::{dim, header, subheader, warning};
use pith_rank::{Corpus, OverflowPolicy, Passage, Ranking, Selection, SplitMode};
use serde::Serialize;

/// Characters of passage text shown in table previews.
const PREVIEW_CHARS: usize = 60;

/// JSON output for `pith select`.
#[derive(Serialize)]
pub struct JsonSelection<'a> {
    /// The query as given.
    pub query: &'a str,
    /// Character budget.
    pub max_length: usize,
    /// Overflow policy used.
    pub overflow: OverflowPolicy,
    /// Split mode used.
    pub split: SplitMode,
    /// Length of the selected text in characters.
    pub chars: usize,
    /// The selection itself.
    #[serde(flatten)]
    pub selection: &'a Selection,
}

/// JSON output for `pith rank`.
#[derive(Serialize)]
pub struct JsonRanking<'a> {
    /// The query as given.
    pub query: &'a str,
    /// Number of passages in the document.
    pub total_passages: usize,
    /// Ranked passages, best first.
    pub results: &'a Ranking<'a>,
}

/// A single chunk in JSON output.
#[derive(Serialize)]
pub struct JsonChunk<'a> {
    /// Position of the chunk.
    pub index: usize,
    /// Length in characters.
    pub chars: usize,
    /// Chunk text.
    pub text: &'a str,
}

/// JSON output for `pith chunks`.
#[derive(Serialize)]
pub struct JsonChunks<'a> {
    /// Characters per chunk.
    pub chunk_size: usize,
    /// The chunks, in document order.
    pub chunks: Vec<JsonChunk<'a>>,
}

/// Term statistics in JSON output.
#[derive(Serialize)]
pub struct JsonTerm<'a> {
    /// The term.
    pub term: &'a str,
    /// Passages containing the term.
    pub document_frequency: usize,
    /// Inverse document frequency.
    pub idf: f64,
}

/// Passage summary in JSON output.
#[derive(Serialize)]
pub struct JsonPassage {
    /// Position in document order.
    pub index: usize,
    /// Byte offset in the document.
    pub offset: usize,
    /// Length in characters.
    pub chars: usize,
    /// Number of terms.
    pub terms: usize,
}

/// JSON output for `pith inspect`.
#[derive(Serialize)]
pub struct JsonInspect<'a> {
    /// Number of passages.
    pub passages: Vec<JsonPassage>,
    /// Number of distinct terms.
    pub vocabulary: usize,
    /// Most common terms first.
    pub terms: Vec<JsonTerm<'a>>,
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Collapses whitespace and cuts text to `max_chars` characters for a one-line preview.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Builds a table of ranked passages.
pub fn ranking_table(ranking: &Ranking<'_>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Rank", "Passage", "Score", "Chars", "Text"]);

    for (rank, entry) in ranking.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(entry.index).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", entry.score)).set_alignment(CellAlignment::Right),
            Cell::new(entry.char_len()).set_alignment(CellAlignment::Right),
            Cell::new(preview(entry.text, PREVIEW_CHARS)),
        ]);
    }

    table
}

/// Builds a table of passages with their sizes.
pub fn passage_table(passages: &[Passage<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Passage", "Offset", "Chars", "Terms", "Text"]);

    for passage in passages {
        table.add_row(vec![
            Cell::new(passage.index).set_alignment(CellAlignment::Right),
            Cell::new(passage.offset).set_alignment(CellAlignment::Right),
            Cell::new(passage.char_len()).set_alignment(CellAlignment::Right),
            Cell::new(passage.tokens().len()).set_alignment(CellAlignment::Right),
            Cell::new(preview(passage.text, PREVIEW_CHARS)),
        ]);
    }

    table
}

/// Returns corpus terms ordered by descending document frequency, then alphabetically.
pub fn common_terms(corpus: &Corpus, limit: usize) -> Vec<(&str, usize)> {
    let mut terms: Vec<(&str, usize)> = corpus.terms().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(limit);
    terms
}

/// Builds a table of terms with document frequency and IDF.
pub fn term_table(corpus: &Corpus, terms: &[(&str, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Term", "DF", "IDF"]);

    for (term, df) in terms {
        table.add_row(vec![
            Cell::new(term),
            Cell::new(df).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", corpus.idf(term))).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use pith_rank::{SplitOptions, build_corpus, rank_passages, split_passages};

    use super::*;

    #[test]
    fn preview_flattens_and_cuts() {
        assert_eq!(preview("one\n two   three", 60), "one two three");
        assert_eq!(preview("abcdefghij", 5), "abcd…");
        assert_eq!(preview("abcde", 5), "abcde");
    }

    #[test]
    fn common_terms_orders_by_frequency() {
        let passages = split_passages("cats dogs\n\ncats birds\n\ncats", &SplitOptions::default());
        let corpus = build_corpus(&passages);

        let terms = common_terms(&corpus, 2);
        assert_eq!(terms, vec![("cats", 3), ("birds", 1)]);
    }

    #[test]
    fn ranking_table_has_a_row_per_passage() {
        let passages = split_passages("alpha\n\nbeta\n\ngamma", &SplitOptions::default());
        let ranking = rank_passages(&passages, "beta");
        let rendered = ranking_table(&ranking).to_string();

        assert!(rendered.contains("Score"));
        assert!(rendered.contains("beta"));
        assert!(rendered.contains("gamma"));
    }
}
