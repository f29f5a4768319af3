//! How the CLI is configured.

pub mod args;

pub use args::Args;
