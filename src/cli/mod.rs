//! Command-line driver for gapminer
//!
//! Loads the startup configuration, parses the process arguments exactly once
//! and hands the frozen [`Opts`] to whatever runs next.

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Result;

use crate::config::MinerConfig;
use crate::opts::{self, Features, OptionKey, OptionRegistry, Opts, ParseError};

mod output;

pub use output::Output;

/// Run the binary with `args` (program name excluded)
pub fn run<I>(args: I) -> Result<ExitCode>
where
    I: IntoIterator<Item = OsString>,
{
    let config = MinerConfig::load()?;
    let features = config.features();

    let parsed = decode_args(args).and_then(|args| opts::get_instance_with(features, args));
    let opts = match parsed {
        Ok(opts) => opts,
        Err(err) => {
            reject(&err, features);
            return Ok(ExitCode::FAILURE);
        }
    };

    setup_logging(opts, &config);

    if opts.has_help() {
        print!("{}", opts.usage());
        return Ok(ExitCode::SUCCESS);
    }

    if opts.has_license() {
        println!("{}", license_notice());
        return Ok(ExitCode::SUCCESS);
    }

    let output = Output::new(opts.has_verbose(), opts.has_quiet());
    report(opts, &output);

    Ok(ExitCode::SUCCESS)
}

/// Turn raw process arguments into tokens, refusing anything not UTF-8
fn decode_args<I>(args: I) -> Result<Vec<String>, ParseError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|raw| ParseError::InvalidEncoding {
                token: raw.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

/// Diagnostic plus usage text on stderr
fn reject(err: &ParseError, features: Features) {
    Output::new(false, false).error(&err.to_string());
    eprint!(
        "\n{}",
        opts::help::usage(&OptionRegistry::build(features), crate::PKG_NAME)
    );
}

/// Print the effective command line options
fn report(opts: &Opts, output: &Output) {
    let active: Vec<_> = opts.active().collect();
    tracing::info!("Configuration ready: {} option(s) given", active.len());

    output.header("gapminer configuration");
    output.verbose(&format!(
        "gpu option group: {}",
        if opts.features().gpu { "enabled" } else { "disabled" }
    ));

    if active.is_empty() {
        output.info("No options given, run 'gapminer --help' for usage information");
        return;
    }

    for descriptor in active {
        let value = match (descriptor.takes_argument(), descriptor.key()) {
            (false, _) => "on",
            (true, OptionKey::Pass) => "********",
            (true, _) => descriptor.value(),
        };
        output.key_value(descriptor.long_name(), value, descriptor.takes_argument());
    }
}

fn license_notice() -> String {
    format!(
        "{} {}\nCopyright (C) {}\n\n\
         This program is distributed under the {} license in the hope that it\n\
         will be useful, but WITHOUT ANY WARRANTY; without even the implied\n\
         warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.",
        crate::PKG_NAME,
        crate::VERSION,
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE"),
    )
}

fn setup_logging(opts: &Opts, config: &MinerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if opts.has_quiet() {
            tracing_subscriber::EnvFilter::new("warn")
        } else if opts.has_verbose() {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::new(&config.log)
        }
    });

    // logs go to stderr so --help and reports stay clean on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
