//! Command line options of the miner
//!
//! The option set is a fixed table ([`OptionRegistry`]) filtered by the startup
//! [`Features`]. A command line is parsed exactly once into [`Opts`], which is
//! immutable afterwards and can be shared freely between threads.
//!
//! ```
//! use gapminer::opts::{Features, OptionKey, Opts};
//!
//! let opts = Opts::from_args(Features::cpu_only(), ["--host", "pool.example.com", "-q"]).unwrap();
//! assert!(opts.has_host());
//! assert_eq!(opts.get(OptionKey::Host), "pool.example.com");
//! assert!(opts.has_name("--quiet"));
//! ```

pub mod descriptor;
pub mod error;
pub mod help;
pub mod key;
pub mod lifecycle;
pub mod parser;
pub mod registry;

pub use descriptor::OptionDescriptor;
pub use error::{ParseError, UnknownOptionName};
pub use key::{Features, OptionGroup, OptionKey};
pub use lifecycle::{Lifecycle, get_instance, get_instance_with, instance};
pub use registry::OptionRegistry;

/// Parsed command line, frozen after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    registry: OptionRegistry,
}

impl Opts {
    /// Build the registry for `features` and parse `args` against it
    ///
    /// `args` must not contain the program name.
    pub fn from_args<I, S>(features: Features, args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = parser::parse(OptionRegistry::build(features), args)?;
        Ok(Self { registry })
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    pub fn features(&self) -> Features {
        self.registry.features()
    }

    /// Whether `key` was given; always false for unregistered options
    pub fn has(&self, key: OptionKey) -> bool {
        self.registry
            .descriptor(key)
            .is_some_and(OptionDescriptor::is_active)
    }

    /// Argument given for `key`, empty if none
    pub fn get(&self, key: OptionKey) -> &str {
        self.registry
            .descriptor(key)
            .map(OptionDescriptor::value)
            .unwrap_or_default()
    }

    /// Like [`Opts::has`], addressed by table name, short or long flag
    pub fn has_name(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|key| self.has(key))
    }

    /// Like [`Opts::get`], addressed by table name, short or long flag
    pub fn get_name(&self, name: &str) -> &str {
        self.resolve(name).map(|key| self.get(key)).unwrap_or_default()
    }

    /// Options given on the command line, in registration order
    pub fn active(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.registry.iter().filter(|d| d.is_active())
    }

    /// Aligned option list
    pub fn help(&self) -> String {
        help::render(&self.registry)
    }

    /// Usage line plus option list
    pub fn usage(&self) -> String {
        help::usage(&self.registry, crate::PKG_NAME)
    }

    fn resolve(&self, name: &str) -> Option<OptionKey> {
        match self.registry.lookup(name) {
            Some(descriptor) => Some(descriptor.key()),
            None => name.parse().ok(),
        }
    }
}

macro_rules! accessors {
    ($($key:ident => $has:ident $(, $get:ident)?;)*) => {
        impl Opts {
            $(
                pub fn $has(&self) -> bool {
                    self.has(OptionKey::$key)
                }

                $(
                    pub fn $get(&self) -> &str {
                        self.get(OptionKey::$key)
                    }
                )?
            )*
        }
    };
}

accessors! {
    Host => has_host, get_host;
    Port => has_port, get_port;
    User => has_user, get_user;
    Pass => has_pass, get_pass;
    Quiet => has_quiet;
    Verbose => has_verbose;
    Stats => has_stats, get_stats;
    Threads => has_threads, get_threads;
    Pull => has_pull, get_pull;
    Timeout => has_timeout, get_timeout;
    Stratum => has_stratum;
    SieveSize => has_sieve_size, get_sieve_size;
    Primes => has_primes, get_primes;
    Shift => has_shift, get_shift;
    Cset => has_cset, get_cset;
    FermatThreads => has_fermat_threads, get_fermat_threads;
    Benchmark => has_benchmark;
    UseGpu => has_use_gpu;
    GpuDev => has_gpu_dev, get_gpu_dev;
    WorkItems => has_work_items, get_work_items;
    QueueSize => has_queue_size, get_queue_size;
    Platform => has_platform, get_platform;
    NTests => has_n_tests, get_n_tests;
    CalcCtr => has_calc_ctr, get_calc_ctr;
    CtrStrength => has_ctr_strength, get_ctr_strength;
    CtrPrimes => has_ctr_primes, get_ctr_primes;
    CtrEvolution => has_ctr_evolution, get_ctr_evolution;
    CtrFixed => has_ctr_fixed, get_ctr_fixed;
    CtrNIvs => has_ctr_n_ivs, get_ctr_n_ivs;
    CtrRange => has_ctr_range, get_ctr_range;
    CtrBits => has_ctr_bits, get_ctr_bits;
    CtrMerit => has_ctr_merit, get_ctr_merit;
    CtrFile => has_ctr_file, get_ctr_file;
    Help => has_help;
    License => has_license;
}
