//! Styled terminal output for gapminer
//!
//! Honors `--quiet` and `--extra-verbose`. Errors always go to stderr.

use console::style;

/// Width of the key column in key-value listings
const KEY_WIDTH: usize = 18;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an error message (shown even in quiet mode)
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only with --extra-verbose)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a key-value pair, keys padded to a common column
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if !self.quiet {
            println!("{}", key_value_line(key, value, highlight));
        }
    }
}

fn key_value_line(key: &str, value: &str, highlight: bool) -> String {
    let styled_value = if highlight {
        style(value).green().bold()
    } else {
        style(value).white()
    };
    let key = format!("{key:<KEY_WIDTH$}");
    format!("  {} {}", style(key).dim(), styled_value)
}
