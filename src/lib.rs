//! A library for measuring how much memory a single process is using.
//!
//! On systems that expose per-process memory maps (`/proc/<PID>/smaps`), the
//! measurement is taken by summing the relevant category over every mapped
//! region, which also makes the proportional set size (PSS) available.
//! Everywhere else, or whenever the smaps read fails, the probe shells out to
//! `ps` for a coarser resident set size.
//!
//! ## Example
//!
//! ```no_run
//! use procmem::MemoryProbe;
//!
//! let probe = MemoryProbe::new();
//! println!("using {:.2} MB", probe.mb());
//! ```

pub mod collection;
pub mod options;

pub mod utils {
    pub mod data_units;
    pub mod logging;
}

pub use collection::{MemType, MemoryProbe, Pid};
