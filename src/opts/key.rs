//! Option identities and the startup feature set
//!
//! Every recognized command line option has an [`OptionKey`]. Keys are stable
//! across builds; whether an option is actually registered depends on the
//! [`Features`] the registry is built with.

use std::fmt;
use std::str::FromStr;

use super::error::UnknownOptionName;

/// Group an option belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionGroup {
    /// Connection, sieve and general switches
    Core,
    /// GPU dispatch options, only registered with GPU support
    Gpu,
    /// Chinese remainder theorem (ctr) file generation
    Ctr,
}

/// Startup feature set deciding which option groups get registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Register the GPU option group
    pub gpu: bool,
}

impl Features {
    /// Build without the GPU option group
    pub const fn cpu_only() -> Self {
        Self { gpu: false }
    }

    /// Build with the GPU option group
    pub const fn with_gpu() -> Self {
        Self { gpu: true }
    }

    /// Whether options of `group` are registered under this feature set
    pub fn includes(&self, group: OptionGroup) -> bool {
        match group {
            OptionGroup::Core | OptionGroup::Ctr => true,
            OptionGroup::Gpu => self.gpu,
        }
    }
}

impl Default for Features {
    /// Follows the `gpu` cargo feature
    fn default() -> Self {
        Self {
            gpu: cfg!(feature = "gpu"),
        }
    }
}

/// Identity of one recognized option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Host,
    Port,
    User,
    Pass,
    Quiet,
    Verbose,
    Stats,
    Threads,
    Pull,
    Timeout,
    Stratum,
    SieveSize,
    Primes,
    Shift,
    Cset,
    FermatThreads,
    Benchmark,
    UseGpu,
    GpuDev,
    WorkItems,
    QueueSize,
    Platform,
    NTests,
    CalcCtr,
    CtrStrength,
    CtrPrimes,
    CtrEvolution,
    CtrFixed,
    CtrNIvs,
    CtrRange,
    CtrBits,
    CtrMerit,
    CtrFile,
    Help,
    License,
}

impl OptionKey {
    /// All keys in registration order
    pub const ALL: [OptionKey; 35] = [
        OptionKey::Host,
        OptionKey::Port,
        OptionKey::User,
        OptionKey::Pass,
        OptionKey::Quiet,
        OptionKey::Verbose,
        OptionKey::Stats,
        OptionKey::Threads,
        OptionKey::Pull,
        OptionKey::Timeout,
        OptionKey::Stratum,
        OptionKey::SieveSize,
        OptionKey::Primes,
        OptionKey::Shift,
        OptionKey::Cset,
        OptionKey::FermatThreads,
        OptionKey::Benchmark,
        OptionKey::UseGpu,
        OptionKey::GpuDev,
        OptionKey::WorkItems,
        OptionKey::QueueSize,
        OptionKey::Platform,
        OptionKey::NTests,
        OptionKey::CalcCtr,
        OptionKey::CtrStrength,
        OptionKey::CtrPrimes,
        OptionKey::CtrEvolution,
        OptionKey::CtrFixed,
        OptionKey::CtrNIvs,
        OptionKey::CtrRange,
        OptionKey::CtrBits,
        OptionKey::CtrMerit,
        OptionKey::CtrFile,
        OptionKey::Help,
        OptionKey::License,
    ];

    /// Table name used by name based lookups
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::Host => "host",
            OptionKey::Port => "port",
            OptionKey::User => "user",
            OptionKey::Pass => "pass",
            OptionKey::Quiet => "quiet",
            OptionKey::Verbose => "verbose",
            OptionKey::Stats => "stats",
            OptionKey::Threads => "threads",
            OptionKey::Pull => "pull",
            OptionKey::Timeout => "timeout",
            OptionKey::Stratum => "stratum",
            OptionKey::SieveSize => "sieve_size",
            OptionKey::Primes => "primes",
            OptionKey::Shift => "shift",
            OptionKey::Cset => "cset",
            OptionKey::FermatThreads => "fermat_threads",
            OptionKey::Benchmark => "benchmark",
            OptionKey::UseGpu => "use_gpu",
            OptionKey::GpuDev => "gpu_dev",
            OptionKey::WorkItems => "work_items",
            OptionKey::QueueSize => "queue_size",
            OptionKey::Platform => "platform",
            OptionKey::NTests => "n_tests",
            OptionKey::CalcCtr => "calc_ctr",
            OptionKey::CtrStrength => "ctr_strength",
            OptionKey::CtrPrimes => "ctr_primes",
            OptionKey::CtrEvolution => "ctr_evolution",
            OptionKey::CtrFixed => "ctr_fixed",
            OptionKey::CtrNIvs => "ctr_n_ivs",
            OptionKey::CtrRange => "ctr_range",
            OptionKey::CtrBits => "ctr_bits",
            OptionKey::CtrMerit => "ctr_merit",
            OptionKey::CtrFile => "ctr_file",
            OptionKey::Help => "help",
            OptionKey::License => "license",
        }
    }

    /// Group this key is registered under
    pub fn group(self) -> OptionGroup {
        match self {
            OptionKey::Benchmark
            | OptionKey::UseGpu
            | OptionKey::GpuDev
            | OptionKey::WorkItems
            | OptionKey::QueueSize
            | OptionKey::Platform
            | OptionKey::NTests => OptionGroup::Gpu,
            OptionKey::CalcCtr
            | OptionKey::CtrStrength
            | OptionKey::CtrPrimes
            | OptionKey::CtrEvolution
            | OptionKey::CtrFixed
            | OptionKey::CtrNIvs
            | OptionKey::CtrRange
            | OptionKey::CtrBits
            | OptionKey::CtrMerit
            | OptionKey::CtrFile => OptionGroup::Ctr,
            _ => OptionGroup::Core,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKey {
    type Err = UnknownOptionName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        OptionKey::ALL
            .into_iter()
            .find(|key| key.name() == normalized)
            .ok_or_else(|| UnknownOptionName(s.to_string()))
    }
}
