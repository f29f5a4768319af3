//! The portable fallback path: asking `ps` for a kilobyte count.
//!
//! Spawning `ps` takes noticeably more resources than reading smaps and has
//! been observed to hang under memory pressure. No timeout guards against
//! that; the call blocks until `ps` completes.

use std::process::Command;

use log::debug;

use super::Pid;
use crate::utils::data_units::KIBI_LIMIT_F64;

/// Invokes `ps -o <column>= -p <pid>` and converts the reported kilobyte
/// value to bytes.
///
/// The `=` suffix suppresses the header row, so the output is just the
/// number with surrounding whitespace. Empty or non-numeric output reads as
/// zero kilobytes rather than an error; `ps` prints nothing for a pid that
/// no longer exists, so a zero here may mean either "no accounted memory"
/// or "no such process".
pub(crate) fn memory_bytes(pid: Pid, column: &str) -> f64 {
    let kilobytes = Command::new("ps")
        .arg("-o")
        .arg(format!("{column}="))
        .arg("-p")
        .arg(pid.to_string())
        .output()
        .map_err(|err| debug!("failed to spawn ps for pid {pid}: {err}"))
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|stdout| stdout.trim().parse::<u64>().ok())
        .unwrap_or(0);

    kilobytes as f64 * KIBI_LIMIT_F64
}
