//! These tests are mostly here just to ensure that invalid arguments will be
//! caught when passing them to the binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn procmem() -> Command {
    Command::cargo_bin("procmem").unwrap()
}

#[test]
fn test_version() {
    procmem().arg("--version").assert().success();
}

#[test]
fn test_invalid_unit() {
    procmem()
        .args(["--unit", "tb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid unit"));
}

#[test]
fn test_invalid_pid() {
    procmem().arg("not-a-pid").assert().failure();
}

#[cfg(target_family = "unix")]
mod unix {
    use super::*;

    #[test]
    fn test_measures_self_by_default() {
        procmem()
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"^\d+(\.\d+)?\n$").unwrap());
    }

    #[test]
    fn test_measures_explicit_pid_in_mb() {
        let pid = std::process::id().to_string();

        procmem()
            .args([&pid, "--type", "rss", "--unit", "mb"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"^\d+(\.\d+)?\n$").unwrap());
    }

    #[test]
    fn test_missing_process_reports_zero() {
        // Way above any real pid; both measurement paths degrade to zero.
        procmem()
            .args(["2147483647", "--unit", "bytes"])
            .assert()
            .success()
            .stdout(predicate::eq("0\n"));
    }
}
