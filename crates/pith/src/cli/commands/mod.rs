//! Command implementations and dispatch.

pub mod check;
pub mod chunks;
pub mod config;
pub mod init;
pub mod inspect;
pub mod rank;
pub mod select;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Select(cmd) => select::run(ctx, &cmd),
        Commands::Rank(cmd) => rank::run(ctx, &cmd),
        Commands::Chunks(cmd) => chunks::run(ctx, &cmd),
        Commands::Inspect(cmd) => inspect::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
