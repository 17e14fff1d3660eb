//! Implementation of `pith check`.

use std::process::ExitCode;

use pith_config::{ConfigWarning, discover_config_files};

use crate::cli::{
    context::{CommandContext, load_config_or_failure},
    output::{dim, subheader, warning},
};

/// Lists config files, loads them, and reports validation warnings.
///
/// Exits with failure on unreadable or invalid files and on warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("pith init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files (highest precedence first):"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let config = match load_config_or_failure(cwd) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::ZeroMaxLength => "Hint: set [select] max_length to a positive budget",
            ConfigWarning::ZeroChunkSize => "Hint: set [chunk] size to a positive number",
            ConfigWarning::ZeroPassageChars => {
                "Hint: set [split] passage_chars, or use mode = \"paragraphs\""
            }
            ConfigWarning::PassageExceedsBudget { .. } => {
                "Hint: keep [split] passage_chars at or below [select] max_length"
            }
        })
        .collect();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(hint));
    }
}
