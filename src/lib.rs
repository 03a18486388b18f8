//! Colorized, line-numbered terminal rendering for character-level diffs.
//!
//! The input is a flat stream of [`DiffOp`] values (insert / equal /
//! delete segments), typically produced by the [`similar`] crate. The
//! output is a readable terminal diff: changed regions with paired
//! left/right line numbers, surrounded by a configurable amount of
//! unchanged context, with well-separated regions split into visually
//! distinct blocks. A line carrying both an insertion and a deletion is
//! rendered as a deletion/insertion pair.
//!
//! ```
//! use diffprint::{DiffOp, Printer, Theme};
//!
//! let ops = vec![
//!     DiffOp::equal("stays the same\n"),
//!     DiffOp::delete("old"),
//!     DiffOp::insert("new"),
//! ];
//!
//! let printer = Printer::new().theme(Theme::plain());
//! let text = printer.render("example.txt", &ops);
//! assert!(text.contains("old"));
//! assert!(text.contains("new"));
//! ```

pub mod cli;
pub mod config;
pub mod ops;
pub mod render;
pub mod theme;

pub use ops::{diff_ops, ops_from_changes, DiffAlgorithm, DiffKind, DiffOp, Granularity};
pub use render::{print, render, render_strings, write, Printer};
pub use theme::{formatter, Formatter, Theme};
