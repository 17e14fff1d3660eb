//! Implementation of `pith select`.

use std::process::ExitCode;

use pith_highlight::{emphasize_terms, query_terms};
use pith_rank::Ranker;

use super::shared::{joined_query, load_document_or_failure};
use crate::cli::{
    args::SelectCommand,
    context::CommandContext,
    output::{JsonSelection, dim, print_json},
};

/// Prints the passages most relevant to the query within the budget.
pub fn run(ctx: &CommandContext, cmd: &SelectCommand) -> ExitCode {
    let text = match load_document_or_failure(&cmd.file) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let query = joined_query(&cmd.query);

    let mut ranker = Ranker::from_config(&ctx.config).with_split(cmd.split.options(&ctx.config));
    if let Some(max_length) = cmd.max_length {
        ranker = ranker.with_max_length(max_length);
    }
    if let Some(overflow) = cmd.overflow {
        ranker = ranker.with_overflow(overflow);
    }

    let selection = ranker.select(&text, &query);

    if cmd.json {
        return print_json(&JsonSelection {
            query: &query,
            max_length: ranker.max_length(),
            overflow: ranker.overflow(),
            split: ranker.split().mode,
            chars: selection.char_len(),
            selection: &selection,
        });
    }

    if selection.is_empty() {
        eprintln!(
            "{}",
            dim(&format!(
                "No passage fits within {} characters.",
                ranker.max_length()
            ))
        );
        return ExitCode::SUCCESS;
    }

    if cmd.highlight {
        println!("{}", emphasize_terms(&selection.text, &query_terms(&query)));
    } else {
        println!("{}", selection.text);
    }

    ExitCode::SUCCESS
}
