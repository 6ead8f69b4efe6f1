use std::process::ExitCode;

use anyhow::Result;

fn main() -> Result<ExitCode> {
    gapminer::cli::run(std::env::args_os().skip(1))
}
