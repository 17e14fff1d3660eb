//! Implementation of `pith rank`.

use std::process::ExitCode;

use pith_rank::{rank_passages, split_passages};

use super::shared::{joined_query, load_document_or_failure};
use crate::cli::{
    args::RankCommand,
    context::CommandContext,
    output::{JsonRanking, dim, print_json, ranking_table},
};

/// Prints every passage's similarity to the query, best first.
pub fn run(ctx: &CommandContext, cmd: &RankCommand) -> ExitCode {
    let text = match load_document_or_failure(&cmd.file) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let query = joined_query(&cmd.query);

    let passages = split_passages(&text, &cmd.split.options(&ctx.config));
    let mut ranking = rank_passages(&passages, &query);
    ranking.truncate(cmd.limit.unwrap_or(ctx.config.rank.limit));

    if cmd.json {
        return print_json(&JsonRanking {
            query: &query,
            total_passages: passages.len(),
            results: &ranking,
        });
    }

    if ranking.is_empty() {
        println!("{}", dim("No passages found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", ranking_table(&ranking));
    if ranking.len() < passages.len() {
        println!(
            "{}",
            dim(&format!(
                "showing {} of {} passages",
                ranking.len(),
                passages.len()
            ))
        );
    }

    ExitCode::SUCCESS
}
