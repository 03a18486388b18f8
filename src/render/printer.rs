use std::io;
use std::sync::OnceLock;

use crate::ops::{DiffKind, DiffOp};
use crate::render::block::{blocks_from_lines, Block};
use crate::render::line::{lines_from_ops, Line};
use crate::theme::Theme;

/// Renders diff operations as colorized, line-numbered text.
///
/// A `Printer` is a plain configuration value. Cloning it and adjusting
/// the clone is how per-call overrides are expressed, so one configured
/// printer can be shared across threads without callers ever observing
/// each other's overrides.
///
/// ```
/// use diffprint::{DiffOp, Printer, Theme};
///
/// let ops = vec![DiffOp::delete("cat"), DiffOp::insert("dog")];
/// let printer = Printer::new().theme(Theme::plain());
///
/// let text = printer.render("pets.txt", &ops);
/// assert!(text.starts_with("pets.txt - (before) (after)\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Printer {
    before_label: String,
    after_label: String,
    context: usize,
    theme: Theme,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            before_label: "(before)".to_string(),
            after_label: "(after)".to_string(),
            context: 2,
            theme: Theme::default(),
        }
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header label for the "before" side of the diff.
    pub fn before_label(mut self, text: impl Into<String>) -> Self {
        self.before_label = text.into();
        self
    }

    /// Header label for the "after" side of the diff.
    pub fn after_label(mut self, text: impl Into<String>) -> Self {
        self.after_label = text.into();
        self
    }

    /// Number of unchanged lines shown above and below each run of
    /// changed lines.
    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    /// The formatters used to style the output.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the named diff to a string. Identical inputs render as an
    /// empty string.
    pub fn render(&self, name: &str, ops: &[DiffOp]) -> String {
        let lines = lines_from_ops(ops);
        let blocks = blocks_from_lines(&lines, self.context);
        tracing::debug!(
            ops = ops.len(),
            lines = lines.len(),
            blocks = blocks.len(),
            "rendering diff"
        );
        self.serialize(name, &blocks)
    }

    /// Write the rendered diff to `w`. The sink is best-effort: write
    /// errors are not surfaced.
    pub fn write<W: io::Write>(&self, w: &mut W, name: &str, ops: &[DiffOp]) {
        let _ = w.write_all(self.render(name, ops).as_bytes());
    }

    /// Print the rendered diff to stdout.
    pub fn print(&self, name: &str, ops: &[DiffOp]) {
        self.write(&mut io::stdout(), name, ops);
    }

    fn serialize(&self, name: &str, blocks: &[Block]) -> String {
        if blocks.is_empty() {
            return String::new();
        }

        let mut out = String::new();

        out.push_str(&format!(
            "{} - {} {}\n",
            (self.theme.name)(name),
            (self.theme.delete_line)(&self.before_label),
            (self.theme.insert_line)(&self.after_label),
        ));

        // Line numbers only grow, so the last line of the last block
        // holds the widest number on each side.
        let (left_width, right_width) = blocks
            .last()
            .and_then(|block| block.lines.last())
            .map(|line| {
                (
                    number_width(line.left_number),
                    number_width(line.right_number),
                )
            })
            .unwrap_or((1, 1));

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                out.push_str(&(self.theme.equal)(&"~".repeat(left_width)));
                out.push_str("   ");
                out.push_str(&(self.theme.equal)(&"~".repeat(right_width)));
                out.push('\n');
            }

            for line in &block.lines {
                if line.has_both_diff() {
                    let (first, second) = line.split();
                    self.write_line(&mut out, &first, left_width, right_width);
                    self.write_line(&mut out, &second, left_width, right_width);
                    continue;
                }

                self.write_line(&mut out, line, left_width, right_width);
            }
        }

        out
    }

    fn write_line(&self, out: &mut String, line: &Line, left_width: usize, right_width: usize) {
        self.write_numbers(out, line, left_width, right_width);

        if !line.has_left_num() {
            out.push_str(&(self.theme.insert_line)("+"));
        } else if !line.has_right_num() {
            out.push_str(&(self.theme.delete_line)("-"));
        } else {
            out.push(' ');
        }
        out.push(' ');

        for span in &line.spans {
            match span.kind {
                DiffKind::Delete => out.push_str(&(self.theme.delete_text)(&span.text)),
                DiffKind::Insert => out.push_str(&(self.theme.insert_text)(&span.text)),
                DiffKind::Equal => {
                    // Unchanged text on a one-sided line takes that
                    // side's line styling.
                    if line.has_left_num() && !line.has_right_num() {
                        out.push_str(&(self.theme.delete_line)(&span.text));
                    } else if line.has_right_num() && !line.has_left_num() {
                        out.push_str(&(self.theme.insert_line)(&span.text));
                    } else if line.has_left_num() && line.has_right_num() {
                        out.push_str(&(self.theme.equal)(&span.text));
                    } else {
                        out.push_str(&span.text);
                    }
                }
            }
        }
        out.push('\n');
    }

    fn write_numbers(&self, out: &mut String, line: &Line, left_width: usize, right_width: usize) {
        if line.has_left_num() {
            let text = format!(
                "{:>width$} | ",
                line.left_number.unwrap_or(0),
                width = left_width
            );
            if !line.has_right_num() {
                out.push_str(&(self.theme.delete_line)(&text));
            } else {
                out.push_str(&(self.theme.equal)(&text));
            }
        } else {
            out.push_str(&" ".repeat(left_width + 3));
        }

        if line.has_right_num() {
            let text = format!(
                "{:>width$} | ",
                line.right_number.unwrap_or(0),
                width = right_width
            );
            if !line.has_left_num() {
                out.push_str(&(self.theme.insert_line)(&text));
            } else {
                out.push_str(&(self.theme.equal)(&text));
            }
        } else {
            out.push_str(&" ".repeat(right_width + 3));
        }
    }
}

fn number_width(number: Option<usize>) -> usize {
    number.unwrap_or(0).to_string().len()
}

static DEFAULT_PRINTER: OnceLock<Printer> = OnceLock::new();

fn default_printer() -> &'static Printer {
    DEFAULT_PRINTER.get_or_init(Printer::default)
}

/// Render a named diff to a string with the default configuration.
pub fn render(name: &str, ops: &[DiffOp]) -> String {
    default_printer().render(name, ops)
}

/// Write a named diff to `w` with the default configuration.
pub fn write<W: io::Write>(w: &mut W, name: &str, ops: &[DiffOp]) {
    default_printer().write(w, name, ops)
}

/// Print a named diff to stdout with the default configuration.
pub fn print(name: &str, ops: &[DiffOp]) {
    default_printer().print(name, ops)
}
