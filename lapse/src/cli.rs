use std::str::FromStr;

use clap::Parser;
use lapse_core::Resolution;

fn parse_resolution(input: &str) -> Result<Resolution, String> {
    Resolution::from_str(input.trim()).map_err(|_| {
        format!("invalid resolution '{input}' (expected one of: d, h, m, s, ms, us, ns)")
    })
}

#[derive(Debug, Parser)]
#[command(
    name = "lapse",
    version,
    about = "Run a command and report its elapsed time"
)]
pub struct Cli {
    /// Resolution the elapsed time is truncated to and rendered at.
    #[arg(
        short,
        long,
        value_parser = parse_resolution,
        default_value = "ms",
        env = "LAPSE_RESOLUTION"
    )]
    pub resolution: Resolution,

    /// Command to run, with its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
