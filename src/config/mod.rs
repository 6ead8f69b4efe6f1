//! Startup configuration for gapminer
//!
//! Loaded with figment from embedded defaults, optional TOML files and
//! `GAPMINER_*` environment variables. Command line options live in
//! [`crate::opts`]; this layer only decides which option groups exist and the
//! default log filter.

mod core;

pub use self::core::MinerConfig;
