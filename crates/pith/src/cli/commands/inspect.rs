//! Implementation of `pith inspect`.

use std::process::ExitCode;

use pith_rank::{build_corpus, split_passages};

use super::shared::load_document_or_failure;
use crate::cli::{
    args::InspectCommand,
    context::CommandContext,
    output::{
        JsonInspect, JsonPassage, JsonTerm, common_terms, dim, header, passage_table, print_json,
        subheader, term_table,
    },
};

/// Terms shown when no limit is given.
const DEFAULT_TERM_LIMIT: usize = 20;

/// Shows how a document is split and the term statistics used for ranking.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let text = match load_document_or_failure(&cmd.file) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let options = cmd.split.options(&ctx.config);
    let passages = split_passages(&text, &options);
    let corpus = build_corpus(&passages);
    let terms = common_terms(&corpus, cmd.limit.unwrap_or(DEFAULT_TERM_LIMIT));

    if cmd.json {
        return print_json(&JsonInspect {
            passages: passages
                .iter()
                .map(|p| JsonPassage {
                    index: p.index,
                    offset: p.offset,
                    chars: p.char_len(),
                    terms: p.tokens().len(),
                })
                .collect(),
            vocabulary: corpus.vocabulary_size(),
            terms: terms
                .iter()
                .map(|&(term, document_frequency)| JsonTerm {
                    term,
                    document_frequency,
                    idf: corpus.idf(term),
                })
                .collect(),
        });
    }

    println!(
        "--- {} ---",
        header(&format!("{} ({} split)", cmd.file, options.mode))
    );
    println!(
        "{}",
        dim(&format!(
            "{} passages, {} distinct terms, {} characters",
            passages.len(),
            corpus.vocabulary_size(),
            text.chars().count()
        ))
    );
    println!();

    if passages.is_empty() {
        println!("{}", dim("(no passages with terms)"));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Passages:"));
    println!("{}", passage_table(&passages));
    println!();

    println!("{}", subheader("Terms (most common first):"));
    println!("{}", term_table(&corpus, &terms));
    if terms.len() < corpus.vocabulary_size() {
        println!(
            "{}",
            dim(&format!(
                "showing {} of {} terms",
                terms.len(),
                corpus.vocabulary_size()
            ))
        );
    }

    ExitCode::SUCCESS
}
