//! # gapminer - command line front-end of the Gapcoin prime gap miner
//!
//! Declares every option the miner understands, parses the process arguments
//! exactly once and exposes the result as an immutable [`Opts`] that the
//! networking, sieve and GPU subsystems query through read-only accessors.
//!
//! ## Quick Start
//!
//! ```bash
//! gapminer --host 127.0.0.1 --port 31397 --user miner --pwd secret --threads 4
//! gapminer --help
//! ```

pub mod cli;
pub mod config;
pub mod opts;

pub use cli::Output;
pub use config::MinerConfig;
pub use opts::{Features, OptionKey, Opts, ParseError};

/// Result type alias for gapminer operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
