//! Per-process memory measurement.
//!
//! There are two acquisition strategies:
//! - [`smaps`]: sums a category over `/proc/<PID>/smaps`. Cheaper than
//!   spawning a process, and the only way to get the proportional set size.
//! - [`ps`]: shells out to `ps` for the resident set size. Works anywhere
//!   with a POSIX `ps`, used whenever smaps is unavailable or unreadable.
//!
//! Whether smaps exists for the target pid is probed once at construction;
//! every measurement after that branches on the stored flag instead of
//! hitting the filesystem again.

pub mod error;
mod ps;
mod smaps;

use std::{fmt, path::PathBuf};

use cfg_if::cfg_if;
use log::debug;

use crate::utils::data_units::{GIBI_LIMIT_F64, KIBI_LIMIT_F64, MEBI_LIMIT_F64};

cfg_if! {
    if #[cfg(target_family = "unix")] {
        /// A UNIX process ID.
        pub type Pid = libc::pid_t;
    } else {
        /// A process ID.
        pub type Pid = usize;
    }
}

/// The kind of memory measurement to take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemType {
    /// Resident set size; memory currently mapped into physical RAM, with no
    /// accounting for pages shared with other processes.
    Resident,

    /// Proportional set size; shared pages are divided evenly among every
    /// process mapping them. Only derivable from smaps.
    Proportional,

    /// An unrecognized kind, stored lowercased. Accepted but effectively
    /// inert: the smaps path has no category for it, and `ps` will reject
    /// the column, so measurements come out as zero.
    Other(String),
}

impl MemType {
    /// The category label as it appears in an smaps report.
    pub(crate) fn smaps_label(&self) -> Option<&'static str> {
        match self {
            MemType::Resident => Some("Rss"),
            MemType::Proportional => Some("Pss"),
            MemType::Other(_) => None,
        }
    }

    /// The column name to hand to `ps -o`.
    pub(crate) fn ps_column(&self) -> &str {
        match self {
            MemType::Resident => "rss",
            MemType::Proportional => "pss",
            MemType::Other(other) => other,
        }
    }
}

impl From<&str> for MemType {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "rss" => MemType::Resident,
            "pss" => MemType::Proportional,
            other => MemType::Other(other.to_string()),
        }
    }
}

impl From<String> for MemType {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl fmt::Display for MemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ps_column())
    }
}

/// A memory probe for a single process.
///
/// Each call to [`MemoryProbe::bytes`] re-reads the underlying report; no
/// measurement is ever cached. Probes hold no shared state, so independent
/// probes are safe to use from multiple threads.
pub struct MemoryProbe {
    pid: Pid,
    mem_type: MemType,
    report_path: PathBuf,

    /// Whether the smaps report existed when this probe was built. Checked
    /// once so repeated measurements skip the filesystem existence check.
    smaps_available: bool,
}

impl MemoryProbe {
    /// Creates a probe for the current process.
    pub fn new() -> Self {
        Self::from_pid(std::process::id() as Pid)
    }

    /// Creates a probe for an arbitrary process.
    ///
    /// The default measurement kind is [`MemType::Proportional`] when the
    /// smaps report exists for this pid, since proportional-share accounting
    /// is only meaningful when derived from memory maps, and
    /// [`MemType::Resident`] otherwise.
    pub fn from_pid(pid: Pid) -> Self {
        let report_path = PathBuf::from(format!("/proc/{pid}/smaps"));
        Self::with_report_path(pid, report_path)
    }

    /// Creates a probe with an explicit measurement kind instead of the
    /// availability-based default.
    pub fn with_mem_type(pid: Pid, mem_type: impl Into<MemType>) -> Self {
        let mut probe = Self::from_pid(pid);
        probe.set_mem_type(mem_type);
        probe
    }

    fn with_report_path(pid: Pid, report_path: PathBuf) -> Self {
        let smaps_available = report_path.exists();
        let mem_type = if smaps_available {
            MemType::Proportional
        } else {
            MemType::Resident
        };

        Self {
            pid,
            mem_type,
            report_path,
            smaps_available,
        }
    }

    /// The pid this probe measures.
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// The measurement kind taken by [`MemoryProbe::bytes`].
    pub fn mem_type(&self) -> &MemType {
        &self.mem_type
    }

    /// Changes the measurement kind. Inputs are lowercased before being
    /// stored, so `"PSS"` and `"pss"` are equivalent, and an unrecognized
    /// kind always reaches `ps` as a lowercase column name.
    pub fn set_mem_type(&mut self, mem_type: impl Into<MemType>) {
        let mut mem_type = mem_type.into();
        if let MemType::Other(other) = &mut mem_type {
            *other = other.to_lowercase();
        }
        self.mem_type = mem_type;
    }

    /// Whether the smaps report existed for this pid at construction time.
    pub fn is_smaps_available(&self) -> bool {
        self.smaps_available
    }

    /// Returns the measured memory size in bytes.
    ///
    /// The smaps path is tried first when available; if it yields nothing
    /// (unreadable report, no matching category lines, a malformed line),
    /// the `ps` fallback is used instead. A partially-parsed report is
    /// treated as untrustworthy rather than approximately correct, so there
    /// is no partial sum.
    ///
    /// A missing process is not an error; both paths degrade to `0.0`, which
    /// callers cannot distinguish from a process with no accounted memory.
    pub fn bytes(&self) -> f64 {
        if self.smaps_available {
            match smaps::report_total(&self.report_path, &self.mem_type) {
                Ok(bytes) => return bytes,
                Err(err) => {
                    debug!(
                        "smaps measurement for pid {} failed ({err}); falling back to ps",
                        self.pid
                    );
                }
            }
        }

        ps::memory_bytes(self.pid, self.fallback_column())
    }

    /// [`MemoryProbe::bytes`] in kilobytes.
    pub fn kb(&self) -> f64 {
        self.bytes() / KIBI_LIMIT_F64
    }

    /// [`MemoryProbe::bytes`] in megabytes.
    pub fn mb(&self) -> f64 {
        self.bytes() / MEBI_LIMIT_F64
    }

    /// [`MemoryProbe::bytes`] in gigabytes.
    pub fn gb(&self) -> f64 {
        self.bytes() / GIBI_LIMIT_F64
    }

    /// The `ps` column to query when falling back.
    ///
    /// `ps` has no pss column, so on smaps-capable systems a proportional
    /// request is downgraded to rss. Elsewhere the kind is passed through
    /// verbatim, in case some `ps` out there does understand it.
    fn fallback_column(&self) -> &str {
        if self.smaps_available && self.mem_type == MemType::Proportional {
            MemType::Resident.ps_column()
        } else {
            self.mem_type.ps_column()
        }
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}
