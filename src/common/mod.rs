//! Common utilities shared across the crate

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::Config;
pub use error::{Error, Result};

/// Last `max` non-empty lines of a process output stream, joined with
/// newlines. Used to keep diagnostics short when a tool is chatty.
pub fn tail_lines(text: &str, max: usize) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();
    let start = lines.len().saturating_sub(max);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_lines_keeps_last_lines() {
        let text = "one\ntwo\n\nthree\nfour\n";
        assert_eq!(tail_lines(text, 2), "three\nfour");
    }

    #[test]
    fn test_tail_lines_short_input() {
        assert_eq!(tail_lines("only\n", 5), "only");
        assert_eq!(tail_lines("", 5), "");
    }
}
