//! Option descriptors and the fixed option table

use super::key::{OptionGroup, OptionKey};

/// One recognized command line option
///
/// The declarative part (names, description, argument flag) is fixed when the
/// registry is built. `active` and `value` are written by the parser only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    key: OptionKey,
    short_name: Option<&'static str>,
    long_name: &'static str,
    description: &'static str,
    takes_argument: bool,
    active: bool,
    value: String,
}

impl OptionDescriptor {
    fn new(
        key: OptionKey,
        short_name: Option<&'static str>,
        long_name: &'static str,
        description: &'static str,
        takes_argument: bool,
    ) -> Self {
        Self {
            key,
            short_name,
            long_name,
            description,
            takes_argument,
            active: false,
            value: String::new(),
        }
    }

    pub fn key(&self) -> OptionKey {
        self.key
    }

    pub fn group(&self) -> OptionGroup {
        self.key.group()
    }

    pub fn short_name(&self) -> Option<&'static str> {
        self.short_name
    }

    pub fn long_name(&self) -> &'static str {
        self.long_name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Whether the parser consumes the following token as value
    pub fn takes_argument(&self) -> bool {
        self.takes_argument
    }

    /// Whether the option was given on the command line
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Captured argument, empty unless given
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Exact match against the short or long spelling
    pub fn matches(&self, token: &str) -> bool {
        self.long_name == token || self.short_name == Some(token)
    }

    /// Mark the option as seen, replacing any earlier value
    pub(crate) fn activate(&mut self, value: Option<String>) {
        self.active = true;
        if let Some(value) = value {
            self.value = value;
        }
    }
}

/// Every option the miner knows, in registration order
pub(crate) fn option_table() -> Vec<OptionDescriptor> {
    use OptionKey::*;

    vec![
        OptionDescriptor::new(Host, Some("-o"), "--host", "host ip address", true),
        OptionDescriptor::new(Port, Some("-p"), "--port", "port to connect to", true),
        OptionDescriptor::new(User, Some("-u"), "--user", "user for gapcoin rpc authentification", true),
        OptionDescriptor::new(Pass, Some("-x"), "--pwd", "password for gapcoin rpc authentification", true),
        OptionDescriptor::new(Quiet, Some("-q"), "--quiet", "be quiet (only prints shares)", false),
        OptionDescriptor::new(Verbose, Some("-i"), "--extra-verbose", "additional statistics output", false),
        OptionDescriptor::new(Stats, Some("-j"), "--stats-interval", "interval (sec) to print mining informations", true),
        OptionDescriptor::new(Threads, Some("-t"), "--threads", "number of mining threads", true),
        OptionDescriptor::new(Pull, Some("-l"), "--pull-interval", "seconds to wait between getwork request", true),
        OptionDescriptor::new(Timeout, Some("-m"), "--timeout", "seconds to wait for server to respond", true),
        OptionDescriptor::new(Stratum, Some("-c"), "--stratum", "use stratum protocol for connection", false),
        OptionDescriptor::new(SieveSize, Some("-s"), "--sieve-size", "the prime sieve size", true),
        OptionDescriptor::new(Primes, Some("-r"), "--sieve-primes", "number of primes to sieve", true),
        OptionDescriptor::new(Shift, Some("-f"), "--shift", "the adder shift", true),
        OptionDescriptor::new(Cset, Some("-z"), "--crt", "use the given chinese remainder theorem file", true),
        OptionDescriptor::new(FermatThreads, Some("-d"), "--fermat-threads", "number of fermat threads when using the crt", true),
        OptionDescriptor::new(Benchmark, Some("-b"), "--benchmark", "run a benchmark and exit", false),
        OptionDescriptor::new(UseGpu, Some("-g"), "--use-gpu", "use the gpu for fermat testing", false),
        OptionDescriptor::new(GpuDev, Some("-e"), "--gpu-dev", "the gpu device id", true),
        OptionDescriptor::new(WorkItems, Some("-w"), "--work-items", "gpu work items (default 2048)", true),
        OptionDescriptor::new(QueueSize, Some("-k"), "--queue-size", "gpu queue size (default 10)", true),
        OptionDescriptor::new(Platform, Some("-a"), "--platform", "gpu platform (amd or nvidia)", true),
        OptionDescriptor::new(NTests, Some("-n"), "--num-gpu-tests", "the number of tests per gpu work item", true),
        OptionDescriptor::new(CalcCtr, None, "--calc-ctr", "calculate a chinese remainder theorem file", true),
        OptionDescriptor::new(CtrStrength, None, "--ctr-strength", "more = longer time and mostly better result", true),
        OptionDescriptor::new(CtrPrimes, None, "--ctr-primes", "number of primes to use in the crt", true),
        OptionDescriptor::new(CtrEvolution, None, "--ctr-evolution", "whether to use evolutional algorithm", true),
        OptionDescriptor::new(CtrFixed, None, "--ctr-fixed", "number of fixed starting prime offsets", true),
        OptionDescriptor::new(CtrNIvs, None, "--ctr-ivs", "number of inverted vectors", true),
        OptionDescriptor::new(CtrRange, None, "--ctr-range", "percent deviation from the number of primes", true),
        OptionDescriptor::new(CtrBits, None, "--ctr-bits", "additional bits added to the primorial", true),
        OptionDescriptor::new(CtrMerit, None, "--ctr-merit", "the target merit", true),
        OptionDescriptor::new(CtrFile, None, "--ctr-file", "the target ctr output file", true),
        OptionDescriptor::new(Help, Some("-h"), "--help", "print this information", false),
        OptionDescriptor::new(License, Some("-v"), "--license", "show license of this program", false),
    ]
}
