//! Help text rendering

use std::fmt::Write;

use super::registry::OptionRegistry;

/// One aligned line per registered option, in registration order
pub fn render(registry: &OptionRegistry) -> String {
    let short_width = registry
        .iter()
        .filter_map(|d| d.short_name())
        .map(str::len)
        .max()
        .unwrap_or(0);
    let long_width = registry
        .iter()
        .map(|d| d.long_name().len())
        .max()
        .unwrap_or(0);

    let mut text = String::new();
    for descriptor in registry.iter() {
        let _ = writeln!(
            text,
            "  {:<short_width$}  {:<long_width$}  {}",
            descriptor.short_name().unwrap_or(""),
            descriptor.long_name(),
            descriptor.description(),
        );
    }
    text
}

/// Usage header followed by the option lines
pub fn usage(registry: &OptionRegistry, program: &str) -> String {
    format!("Usage: {program} [--options]\n\n{}", render(registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::key::{Features, OptionGroup};

    #[test]
    fn test_one_line_per_option_in_order() {
        let registry = OptionRegistry::build(Features::with_gpu());
        let text = render(&registry);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), registry.len());

        for (line, descriptor) in lines.iter().zip(registry.iter()) {
            assert!(line.contains(descriptor.long_name()), "{line}");
            assert!(line.ends_with(descriptor.description()), "{line}");
        }
    }

    #[test]
    fn test_gpu_options_omitted_without_gpu() {
        let gpu = OptionRegistry::build(Features::with_gpu());
        let registry = OptionRegistry::build(Features::cpu_only());
        let text = render(&registry);

        assert_eq!(text.lines().count(), registry.len());
        for descriptor in gpu.iter().filter(|d| d.group() == OptionGroup::Gpu) {
            assert!(!text.contains(descriptor.long_name()), "{}", descriptor.long_name());
        }
    }

    #[test]
    fn test_columns_are_aligned() {
        let registry = OptionRegistry::build(Features::with_gpu());
        let text = render(&registry);

        let description_columns: Vec<usize> = text
            .lines()
            .zip(registry.iter())
            .map(|(line, d)| line.len() - d.description().len())
            .collect();
        assert!(description_columns.windows(2).all(|w| w[0] == w[1]));

        let long_columns: Vec<usize> = text
            .lines()
            .zip(registry.iter())
            .map(|(line, d)| line.find(d.long_name()).unwrap())
            .collect();
        assert!(long_columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_is_repeatable() {
        let registry = OptionRegistry::build(Features::cpu_only());
        assert_eq!(render(&registry), render(&registry));
    }

    #[test]
    fn test_usage_header() {
        let registry = OptionRegistry::build(Features::cpu_only());
        let text = usage(&registry, "gapminer");
        assert!(text.starts_with("Usage: gapminer [--options]\n\n"));
        assert!(text.ends_with(&render(&registry)));
    }
}
