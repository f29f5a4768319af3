//! Argument parsing via clap.

use clap::*;
use indoc::indoc;

use crate::collection::Pid;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "procmem [OPTIONS] [PID]";

/// The arguments for procmem.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        value_name = "PID",
        help = "The process to measure. Defaults to the current process."
    )]
    pub pid: Option<Pid>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "The measurement to take, either 'rss' or 'pss'.",
        long_help = "The measurement to take, either 'rss' (resident set size) or 'pss' \
                    (proportional set size). Defaults to 'pss' where /proc/<PID>/smaps exists \
                    and 'rss' elsewhere; 'pss' silently degrades to the resident number when \
                    smaps can't be read."
    )]
    pub mem_type: Option<String>,

    #[arg(
        short = 'u',
        long,
        value_name = "UNIT",
        default_value = "bytes",
        help = "The unit to report in (bytes, kb, mb, gb)."
    )]
    pub unit: String,
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }
}
