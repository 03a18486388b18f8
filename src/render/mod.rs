//! The rendering pipeline.
//!
//! Diff operations become numbered display lines, lines are grouped into
//! context-padded blocks, and blocks are serialized as styled text. Data
//! flows strictly forward; each stage is a pure function of the previous
//! one.

pub mod block;
pub mod line;
pub mod printer;

pub use block::{blocks_from_lines, Block};
pub use line::{lines_from_ops, Line, Span};
pub use printer::{print, render, write, Printer};

use crate::ops::{diff_ops, DiffAlgorithm, Granularity};

/// Convenience function to diff two texts and render the result with the
/// default configuration.
pub fn render_strings(name: &str, old: &str, new: &str) -> String {
    let ops = diff_ops(old, new, DiffAlgorithm::default(), Granularity::default());
    render(name, &ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_strings_convenience() {
        let text = render_strings("greeting.txt", "hello world", "hello there");

        assert!(text.contains("greeting.txt"));
        assert!(!text.is_empty());
    }

    #[test]
    fn test_render_strings_identical_inputs() {
        assert_eq!(render_strings("same.txt", "abc", "abc"), "");
    }
}
