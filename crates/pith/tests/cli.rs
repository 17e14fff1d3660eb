//! CLI integration tests for pith commands.
//!
//! These tests focus on exit codes and selected text, not on table formatting which may
//! change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::{Command, assert::Assert};
use predicates::prelude::*;

/// Three short paragraphs, one about garbage collection.
const LANGUAGES: &str = "Rust has ownership.\n\nPython has a garbage collector.\n\nGo has goroutines.";

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a pith command.
fn pith() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("pith").unwrap()
}

/// Helper to run `pith` with HOME isolated to the provided directory.
fn pith_with_home(home: &Path) -> Command {
    let mut cmd = pith();
    cmd.env("HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs `pith` inside `dir`, with HOME pointing at the same directory.
fn pith_in(dir: &Path) -> Command {
    let mut cmd = pith_with_home(dir);
    cmd.current_dir(dir);
    cmd
}

/// Writes the sample document and returns its file name.
fn write_languages(dir: &Path) -> &'static str {
    fs::write(dir.join("languages.txt"), LANGUAGES).unwrap();
    "languages.txt"
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Parses stdout as JSON.
fn stdout_json(assert: &Assert) -> serde_json::Value {
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

mod select {
    use super::*;

    #[test]
    fn prints_best_paragraph_within_budget() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["select", file, "garbage", "collector", "-n", "40"])
            .assert()
            .success()
            .stdout("Python has a garbage collector.\n");
    }

    #[test]
    fn reads_stdin() {
        let dir = temp_dir();

        pith_in(dir.path())
            .args(["select", "-", "garbage", "collector", "-n", "40"])
            .write_stdin(LANGUAGES)
            .assert()
            .success()
            .stdout("Python has a garbage collector.\n");
    }

    #[test]
    fn default_budget_keeps_whole_short_document() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["select", file, "garbage"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "Python has a garbage collector.\n\nRust has ownership.",
            ));
    }

    #[test]
    fn empty_selection_prints_nothing() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["select", file, "garbage", "-n", "5"])
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("No passage fits within 5 characters"));
    }

    #[test]
    fn empty_document_selects_nothing() {
        let dir = temp_dir();

        pith_in(dir.path())
            .args(["select", "-", "anything"])
            .write_stdin("")
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn json_output_format() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        let assert = pith_in(dir.path())
            .args(["select", file, "garbage", "collector", "-n", "40", "--json"])
            .assert()
            .success();

        let json = stdout_json(&assert);
        assert_eq!(json["query"], "garbage collector");
        assert_eq!(json["text"], "Python has a garbage collector.");
        assert_eq!(json["included"], serde_json::json!([1]));
        assert_eq!(json["chars"], 31);
        assert_eq!(json["max_length"], 40);
        assert_eq!(json["overflow"], "stop");
        assert_eq!(json["split"], "paragraphs");
        assert!(json["truncated"].is_null());
    }

    #[test]
    fn overflow_from_config_and_flag() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".pith.toml"),
            "[select]\nmax_length = 20\noverflow = \"skip\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("doc.txt"),
            "short one\n\nthis paragraph is clearly far too long\n\ntiny",
        )
        .unwrap();

        pith_in(dir.path())
            .args(["select", "doc.txt", "unrelated"])
            .assert()
            .success()
            .stdout("short one\n\ntiny\n");

        pith_in(dir.path())
            .args(["select", "doc.txt", "unrelated", "--overflow", "stop"])
            .assert()
            .success()
            .stdout("short one\n");
    }

    #[test]
    fn truncate_fills_the_budget() {
        let dir = temp_dir();
        fs::write(
            dir.path().join("doc.txt"),
            "short one\n\nthis paragraph is clearly far too long",
        )
        .unwrap();

        pith_in(dir.path())
            .args([
                "select",
                "doc.txt",
                "unrelated",
                "-n",
                "20",
                "--overflow",
                "truncate",
            ])
            .assert()
            .success()
            .stdout("short one\n\nthis para\n");
    }

    #[test]
    fn sentence_split_rescues_long_paragraph() {
        let dir = temp_dir();
        fs::write(
            dir.path().join("doc.txt"),
            "Rust has ownership and borrowing. Python has a garbage collector. \
             Go has goroutines and channels.",
        )
        .unwrap();

        pith_in(dir.path())
            .args(["select", "doc.txt", "garbage", "collector", "-n", "40"])
            .assert()
            .success()
            .stdout("");

        pith_in(dir.path())
            .args([
                "select",
                "doc.txt",
                "garbage",
                "collector",
                "-n",
                "40",
                "--split",
                "sentences",
                "--passage-chars",
                "40",
            ])
            .assert()
            .success()
            .stdout("Python has a garbage collector.\n");
    }

    #[test]
    fn highlight_marks_query_terms() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        let assert = pith_in(dir.path())
            .args(["select", file, "garbage", "-n", "40", "--highlight"])
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        assert!(stdout.contains("\u{1b}["));
        assert_eq!(strip_ansi(&stdout), "Python has a garbage collector.\n");
    }

    #[test]
    fn verbose_logs_stay_off_stdout() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["-vv", "select", file, "garbage", "collector", "-n", "40"])
            .assert()
            .success()
            .stdout("Python has a garbage collector.\n")
            .stderr(predicate::str::contains("ranked passages"));
    }

    #[test]
    fn fails_on_nonexistent_file() {
        let dir = temp_dir();

        pith_in(dir.path())
            .args(["select", "missing.txt", "query"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn fails_on_binary_file() {
        let dir = temp_dir();
        fs::write(dir.path().join("blob.bin"), [0u8, 159, 146, 150, 0]).unwrap();

        pith_in(dir.path())
            .args(["select", "blob.bin", "query"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("binary"));
    }

    #[test]
    fn fails_on_invalid_config() {
        let dir = temp_dir();
        let file = write_languages(dir.path());
        fs::write(dir.path().join(".pith.toml"), "[select\ninvalid").unwrap();

        pith_in(dir.path())
            .args(["select", file, "garbage"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn rejects_unknown_overflow_policy() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["select", file, "garbage", "--overflow", "wrap"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown overflow policy"));
    }
}

mod rank {
    use super::*;

    #[test]
    fn prints_table() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["rank", file, "garbage", "collector"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Score"))
            .stdout(predicate::str::contains("Python has a garbage collector."));
    }

    #[test]
    fn json_orders_by_score() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        let assert = pith_in(dir.path())
            .args(["rank", file, "garbage", "collector", "--json"])
            .assert()
            .success();

        let json = stdout_json(&assert);
        assert_eq!(json["total_passages"], 3);
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["index"], 1);
        assert!(results[0]["score"].as_f64().unwrap() > 0.0);
        assert_eq!(results[1]["index"], 0);
        assert_eq!(results[2]["index"], 2);
    }

    #[test]
    fn respects_limit() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        let assert = pith_in(dir.path())
            .args(["rank", file, "garbage", "-n", "1", "--json"])
            .assert()
            .success();

        let json = stdout_json(&assert);
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
        assert_eq!(json["total_passages"], 3);
    }

    #[test]
    fn limit_from_config() {
        let dir = temp_dir();
        let file = write_languages(dir.path());
        fs::write(dir.path().join(".pith.toml"), "[rank]\nlimit = 2\n").unwrap();

        let assert = pith_in(dir.path())
            .args(["rank", file, "garbage", "--json"])
            .assert()
            .success();

        assert_eq!(stdout_json(&assert)["results"].as_array().unwrap().len(), 2);
    }
}

mod chunks {
    use super::*;

    #[test]
    fn json_lists_fixed_size_chunks() {
        let dir = temp_dir();

        let assert = pith_in(dir.path())
            .args(["chunks", "-", "--size", "4", "--json"])
            .write_stdin("abcdefghij")
            .assert()
            .success();

        let json = stdout_json(&assert);
        assert_eq!(json["chunk_size"], 4);
        let texts: Vec<_> = json["chunks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["text"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn size_from_config() {
        let dir = temp_dir();
        fs::write(dir.path().join(".pith.toml"), "[chunk]\nsize = 5\n").unwrap();

        let assert = pith_in(dir.path())
            .args(["chunks", "-", "--json"])
            .write_stdin("abcdefghij")
            .assert()
            .success();

        assert_eq!(stdout_json(&assert)["chunks"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn prints_chunks() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["chunks", file])
            .assert()
            .success()
            .stdout(predicate::str::contains("chunk 1/1"))
            .stdout(predicate::str::contains("Go has goroutines."));
    }

    #[test]
    fn fails_on_zero_size() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        pith_in(dir.path())
            .args(["chunks", file, "--size", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("greater than zero"));
    }
}

mod inspect {
    use super::*;

    #[test]
    fn shows_passages_and_terms() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        let assert = pith_in(dir.path())
            .args(["inspect", file])
            .assert()
            .success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("3 passages"));
        assert!(stdout.contains("has"));
        assert!(stdout.contains("IDF"));
    }

    #[test]
    fn json_output_format() {
        let dir = temp_dir();
        let file = write_languages(dir.path());

        let assert = pith_in(dir.path())
            .args(["inspect", file, "--json", "-n", "1"])
            .assert()
            .success();

        let json = stdout_json(&assert);
        assert_eq!(json["passages"].as_array().unwrap().len(), 3);
        let terms = json["terms"].as_array().unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0]["term"], "has");
        assert_eq!(terms[0]["document_frequency"], 3);
        assert!(terms[0]["idf"].as_f64().unwrap() < 0.0);
    }

    #[test]
    fn fails_on_nonexistent_file() {
        let dir = temp_dir();

        pith_in(dir.path())
            .args(["inspect", "missing.txt"])
            .assert()
            .failure();
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let home = temp_dir();
        let dir = temp_dir();

        pith_with_home(home.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".pith.toml")).unwrap();
        assert!(contents.contains("# [select]"));
        assert!(!home.path().join(".pith.toml").exists());
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".pith.toml"), "existing").unwrap();

        pith_in(dir.path()).arg("init").assert().failure();
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        fs::write(dir.path().join(".pith.toml"), "old content").unwrap();

        pith_in(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".pith.toml")).unwrap();
        assert!(contents.contains("# [select]"));
    }

    #[test]
    fn global_writes_to_home() {
        let home = temp_dir();
        let dir = temp_dir();

        pith_with_home(home.path())
            .current_dir(dir.path())
            .args(["init", "--global"])
            .assert()
            .success();

        let contents = fs::read_to_string(home.path().join(".pith.toml")).unwrap();
        assert!(contents.contains("# [chunk]"));
        assert!(!dir.path().join(".pith.toml").exists());
    }

    #[test]
    fn prints_config_preview() {
        let home = temp_dir();
        let dir = temp_dir();

        let assert = pith_with_home(home.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("Configuration written:"));
        assert!(stdout.contains("max_length = 2000"));
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_defaults_without_config() {
        let dir = temp_dir();

        let assert = pith_in(dir.path()).arg("config").assert().success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("[select]"));
        assert!(stdout.contains("max_length = 2000"));
        assert!(stdout.contains("overflow = \"stop\""));
    }

    #[test]
    fn reflects_local_overrides() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".pith.toml"),
            "[select]\nmax_length = 123\n[split]\nmode = \"sentences\"\n",
        )
        .unwrap();

        let assert = pith_in(dir.path()).arg("config").assert().success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("max_length = 123"));
        assert!(stdout.contains("mode = \"sentences\""));
    }
}

mod check {
    use super::*;

    #[test]
    fn succeeds_without_config() {
        let dir = temp_dir();
        pith_in(dir.path()).arg("check").assert().success();
    }

    #[test]
    fn succeeds_with_valid_config() {
        let dir = temp_dir();
        fs::write(dir.path().join(".pith.toml"), "[select]\nmax_length = 500\n").unwrap();

        pith_in(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn fails_on_warnings() {
        let dir = temp_dir();
        fs::write(dir.path().join(".pith.toml"), "[select]\nmax_length = 0\n").unwrap();

        pith_in(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("max_length"));
    }

    #[test]
    fn fails_on_invalid_toml() {
        let dir = temp_dir();
        fs::write(dir.path().join(".pith.toml"), "[select\ninvalid").unwrap();

        pith_in(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn fails_on_unknown_keys() {
        let dir = temp_dir();
        fs::write(dir.path().join(".pith.toml"), "[select]\nbudget = 10\n").unwrap();

        pith_in(dir.path()).arg("check").assert().failure();
    }
}
