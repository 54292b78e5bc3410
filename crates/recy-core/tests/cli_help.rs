//! CLI help output tests for recy.
//!
//! These tests verify that all commands and subcommands correctly display
//! their help text without errors.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the recy binary.
fn recy() -> Command {
    cargo_bin_cmd!("recy")
}

// ============================================================================
// Top-level Help Tests
// ============================================================================

mod top_level {
    use super::*;

    #[test]
    fn help_flag_works() {
        recy()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Recycling Resolver"));
    }

    #[test]
    fn help_subcommand_works() {
        recy()
            .arg("help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Recycling Resolver"));
    }

    #[test]
    fn version_flag_works() {
        recy()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("recy"));
    }

    #[test]
    fn help_shows_all_commands() {
        recy()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("resolve"))
            .stdout(predicate::str::contains("scan"))
            .stdout(predicate::str::contains("share"))
            .stdout(predicate::str::contains("history"))
            .stdout(predicate::str::contains("catalog"))
            .stdout(predicate::str::contains("config"))
            .stdout(predicate::str::contains("schema"));
    }

    #[test]
    fn help_shows_global_options() {
        recy()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--format"))
            .stdout(predicate::str::contains("--catalog"))
            .stdout(predicate::str::contains("--no-history"));
    }
}

// ============================================================================
// Subcommand Help Tests
// ============================================================================

mod subcommands {
    use super::*;

    #[test]
    fn resolve_help() {
        recy()
            .args(["resolve", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("LABELS"));
    }

    #[test]
    fn scan_help() {
        recy()
            .args(["scan", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("stdin"));
    }

    #[test]
    fn share_help() {
        recy()
            .args(["share", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--out"))
            .stdout(predicate::str::contains("--name"));
    }

    #[test]
    fn history_help() {
        recy()
            .args(["history", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("list"))
            .stdout(predicate::str::contains("path"));
    }

    #[test]
    fn catalog_help() {
        recy()
            .args(["catalog", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("list"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn config_help() {
        recy()
            .args(["config", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("show"))
            .stdout(predicate::str::contains("validate"));
    }

    #[test]
    fn schema_help() {
        recy()
            .args(["schema", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--list"));
    }
}

// ============================================================================
// Argument Errors
// ============================================================================

mod argument_errors {
    use super::*;

    #[test]
    fn unknown_command_exits_with_args_error() {
        recy()
            .arg("nonexistent-command")
            .assert()
            .code(10)
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn resolve_requires_a_label() {
        recy().arg("resolve").assert().code(10);
    }

    #[test]
    fn invalid_format_rejected() {
        recy()
            .args(["--format", "yaml", "version"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn catalog_list_flags_conflict() {
        recy()
            .args(["catalog", "list", "--materials", "--items"])
            .assert()
            .code(10);
    }
}
