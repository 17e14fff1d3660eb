//! Implementation of `pith chunks`.

use std::{num::NonZeroUsize, process::ExitCode};

use pith_rank::chunk_text;

use super::shared::load_document_or_failure;
use crate::cli::{
    args::ChunksCommand,
    context::CommandContext,
    output::{JsonChunk, JsonChunks, dim, header, print_json},
};

/// Cuts a document into fixed-size chunks and prints them.
pub fn run(ctx: &CommandContext, cmd: &ChunksCommand) -> ExitCode {
    let size = cmd.size.unwrap_or(ctx.config.chunk.size);
    let Some(chunk_size) = NonZeroUsize::new(size) else {
        eprintln!("error: chunk size must be greater than zero");
        return ExitCode::FAILURE;
    };

    let text = match load_document_or_failure(&cmd.file) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let chunks = chunk_text(&text, chunk_size);

    if cmd.json {
        return print_json(&JsonChunks {
            chunk_size: size,
            chunks: chunks
                .iter()
                .copied()
                .enumerate()
                .map(|(index, text)| JsonChunk {
                    index,
                    chars: text.chars().count(),
                    text,
                })
                .collect(),
        });
    }

    if chunks.is_empty() {
        println!("{}", dim("Document is empty."));
        return ExitCode::SUCCESS;
    }

    let total = chunks.len();
    for (index, chunk) in chunks.iter().enumerate() {
        let label = format!("chunk {}/{total}", index + 1);
        println!(
            "─── {} {} ───",
            header(&label),
            dim(&format!("({} chars)", chunk.chars().count()))
        );
        println!("{chunk}");
        println!();
    }

    ExitCode::SUCCESS
}
