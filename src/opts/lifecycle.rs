//! Parse-once storage for the process configuration
//!
//! The first caller builds and parses; concurrent first callers block inside
//! the `OnceLock` until that finishes. Arguments passed on any later call are
//! ignored and the stored outcome is returned as is.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Opts;
use super::error::ParseError;
use super::key::Features;

/// Global configuration - parsed once, read everywhere
static INSTANCE: Lifecycle = Lifecycle::new();

/// One-time construction cell for [`Opts`]
pub struct Lifecycle {
    cell: OnceLock<Result<Opts, ParseError>>,
    constructions: AtomicUsize,
}

impl Lifecycle {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Build from `args` on the first call, return the stored outcome after
    pub fn get_or_init<I, S>(&self, features: Features, args: I) -> Result<&Opts, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut built_here = false;
        let outcome = self.cell.get_or_init(|| {
            built_here = true;
            self.constructions.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("Building option registry (gpu: {})", features.gpu);
            Opts::from_args(features, args)
        });

        if !built_here {
            tracing::trace!("Options already parsed, ignoring arguments of this call");
        }

        outcome.as_ref().map_err(Clone::clone)
    }

    /// The parsed options, if construction already happened and succeeded
    pub fn get(&self) -> Option<&Opts> {
        self.cell.get().and_then(|outcome| outcome.as_ref().ok())
    }

    /// How many times construction actually ran (0 or 1)
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide options using the build's default feature set
pub fn get_instance<I, S>(args: I) -> Result<&'static Opts, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    INSTANCE.get_or_init(Features::default(), args)
}

/// Process-wide options with an explicit feature set (first call only)
pub fn get_instance_with<I, S>(features: Features, args: I) -> Result<&'static Opts, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    INSTANCE.get_or_init(features, args)
}

/// Process-wide options, if already parsed
pub fn instance() -> Option<&'static Opts> {
    INSTANCE.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_later_arguments_are_ignored() {
        let lifecycle = Lifecycle::new();
        assert!(lifecycle.get().is_none());

        let first = lifecycle
            .get_or_init(Features::cpu_only(), ["--threads", "2"])
            .unwrap();
        let second = lifecycle
            .get_or_init(Features::with_gpu(), ["--threads", "8", "--use-gpu"])
            .unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.get_threads(), "2");
        assert!(!second.has_use_gpu());
        assert_eq!(lifecycle.constructions(), 1);
    }

    #[test]
    fn test_failed_parse_is_stored() {
        let lifecycle = Lifecycle::new();
        let err = lifecycle
            .get_or_init(Features::cpu_only(), ["--bogus"])
            .unwrap_err();
        assert_eq!(err.token(), "--bogus");

        // a valid command line later does not retry
        let again = lifecycle.get_or_init(Features::cpu_only(), ["--quiet"]);
        assert_eq!(again.unwrap_err(), err);
        assert!(lifecycle.get().is_none());
        assert_eq!(lifecycle.constructions(), 1);
    }

    // only test touching the process-wide instance
    #[test]
    fn test_process_wide_instance() {
        assert!(instance().is_none());

        let first = get_instance_with(Features::cpu_only(), ["--host", "pool.example.com"]).unwrap();
        let second = get_instance(["--host", "elsewhere", "--stratum"]).unwrap();
        let third = get_instance_with(Features::with_gpu(), ["--use-gpu"]).unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, third));
        assert!(std::ptr::eq(first, instance().unwrap()));
        assert_eq!(third.get_host(), "pool.example.com");
        assert!(!third.has_stratum());
        assert!(!third.features().gpu);
        assert_eq!(INSTANCE.constructions(), 1);
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let lifecycle = Lifecycle::new();

        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..32)
                .map(|n| {
                    let lifecycle = &lifecycle;
                    scope.spawn(move || {
                        let threads = n.to_string();
                        let opts = lifecycle
                            .get_or_init(Features::cpu_only(), ["--threads", threads.as_str()])
                            .unwrap();
                        opts as *const Opts as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(lifecycle.constructions(), 1);
        assert!(lifecycle.get().unwrap().has_threads());
    }
}
