//! Single pass command line scanner
//!
//! Tokens are matched exactly against the registry. An option taking an
//! argument consumes the next token, which must not itself be a registered
//! option. Repeating an option overwrites the earlier value.

use super::error::ParseError;
use super::registry::OptionRegistry;

/// Scan `args` (program name excluded) and record what was given
///
/// Consumes the registry so a half-parsed registry never escapes on error.
pub fn parse<I, S>(mut registry: OptionRegistry, args: I) -> Result<OptionRegistry, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = args.into_iter().map(Into::<String>::into).peekable();

    while let Some(token) = tokens.next() {
        let Some(index) = registry.position(&token) else {
            return Err(ParseError::UnknownOption { token });
        };

        if !registry.descriptor_at(index).takes_argument() {
            tracing::trace!("Switch {} given", token);
            registry.descriptor_mut(index).activate(None);
            continue;
        }

        match tokens.next_if(|next| registry.position(next).is_none()) {
            Some(value) => {
                tracing::trace!("Option {} given with value {:?}", token, value);
                registry.descriptor_mut(index).activate(Some(value));
            }
            None => {
                return Err(ParseError::MissingArgument {
                    option: token,
                    followed_by: tokens.next(),
                });
            }
        }
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::key::{Features, OptionKey};

    fn parse_gpu(args: &[&str]) -> Result<OptionRegistry, ParseError> {
        parse(OptionRegistry::build(Features::with_gpu()), args.iter().copied())
    }

    fn value_of(registry: &OptionRegistry, key: OptionKey) -> &str {
        registry.descriptor(key).map(|d| d.value()).unwrap_or_default()
    }

    #[test]
    fn test_empty_args() {
        let registry = parse_gpu(&[]).unwrap();
        assert!(registry.iter().all(|d| !d.is_active()));
    }

    #[test]
    fn test_long_option_with_value() {
        let registry = parse_gpu(&["--host", "pool.example.com"]).unwrap();
        let host = registry.descriptor(OptionKey::Host).unwrap();
        assert!(host.is_active());
        assert_eq!(host.value(), "pool.example.com");
    }

    #[test]
    fn test_short_option_without_value_is_missing_argument() {
        let err = parse_gpu(&["-o"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                option: "-o".to_string(),
                followed_by: None,
            }
        );
    }

    #[test]
    fn test_value_that_is_an_option_is_missing_argument() {
        let err = parse_gpu(&["--host", "--port", "8080"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                option: "--host".to_string(),
                followed_by: Some("--port".to_string()),
            }
        );
    }

    #[test]
    fn test_dash_value_that_is_not_an_option() {
        let registry = parse_gpu(&["--shift", "-1"]).unwrap();
        assert_eq!(value_of(&registry, OptionKey::Shift), "-1");
    }

    #[test]
    fn test_unknown_option() {
        let err = parse_gpu(&["--host", "pool", "--frobnicate"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOption {
                token: "--frobnicate".to_string()
            }
        );
    }

    #[test]
    fn test_stray_value_is_unknown_option() {
        let err = parse_gpu(&["--quiet", "pool"]).unwrap_err();
        assert_eq!(err.token(), "pool");
    }

    #[test]
    fn test_equals_form_is_not_supported() {
        let err = parse_gpu(&["--host=pool"]).unwrap_err();
        assert!(matches!(err, ParseError::UnknownOption { .. }));
    }

    #[test]
    fn test_short_option_clusters_are_not_supported() {
        let err = parse_gpu(&["-qi"]).unwrap_err();
        assert!(matches!(err, ParseError::UnknownOption { .. }));
    }

    #[test]
    fn test_gpu_option_rejected_without_gpu() {
        let registry = OptionRegistry::build(Features::cpu_only());
        let err = parse(registry, ["--use-gpu"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOption {
                token: "--use-gpu".to_string()
            }
        );
    }

    #[test]
    fn test_short_and_long_forms_equivalent() {
        let short = parse_gpu(&["-q", "-t", "4"]).unwrap();
        let long = parse_gpu(&["--quiet", "--threads", "4"]).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_last_write_wins() {
        let registry = parse_gpu(&["--threads", "2", "--threads", "4"]).unwrap();
        assert_eq!(value_of(&registry, OptionKey::Threads), "4");

        let registry = parse_gpu(&["-t", "2", "--threads", "8"]).unwrap();
        assert_eq!(value_of(&registry, OptionKey::Threads), "8");
    }

    #[test]
    fn test_repeated_switch_stays_active() {
        let registry = parse_gpu(&["--stratum", "-c"]).unwrap();
        let stratum = registry.descriptor(OptionKey::Stratum).unwrap();
        assert!(stratum.is_active());
        assert!(stratum.value().is_empty());
    }

    #[test]
    fn test_mixed_command_line() {
        let registry = parse_gpu(&[
            "-o", "127.0.0.1", "-p", "31397", "-u", "miner", "-x", "secret", "--stratum", "-g",
            "--calc-ctr", "1", "--ctr-ivs", "12",
        ])
        .unwrap();

        assert_eq!(value_of(&registry, OptionKey::Host), "127.0.0.1");
        assert_eq!(value_of(&registry, OptionKey::Port), "31397");
        assert_eq!(value_of(&registry, OptionKey::User), "miner");
        assert_eq!(value_of(&registry, OptionKey::Pass), "secret");
        assert_eq!(value_of(&registry, OptionKey::CalcCtr), "1");
        assert_eq!(value_of(&registry, OptionKey::CtrNIvs), "12");
        assert!(registry.descriptor(OptionKey::UseGpu).unwrap().is_active());
        assert!(!registry.descriptor(OptionKey::Quiet).unwrap().is_active());
    }
}
