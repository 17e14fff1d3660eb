//! Command-line interface for the `pith` passage selector.

use std::process::ExitCode;

use pith::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = parse_cli();

    // `init` and `check` must run even when an existing config file is broken
    let ctx = match cli.command {
        Commands::Init(_) | Commands::Check => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    logging::init(cli.verbose, &ctx.config.log.level);

    commands::run(cli.command, &ctx)
}
