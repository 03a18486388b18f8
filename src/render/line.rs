use crate::ops::{DiffKind, DiffOp};

/// A single-kind run of text within one display line.
///
/// Spans never contain embedded newlines; [`lines_from_ops`] splits
/// operations on newline boundaries before building spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: DiffKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// One display row: an optional 1-based line number on each side plus the
/// spans making up its content.
///
/// `None` on a side means the row has no counterpart there, which only
/// happens on the halves produced by [`Line::split`]. A line always holds
/// at least one span; an empty line holds one empty equal span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub left_number: Option<usize>,
    pub right_number: Option<usize>,
    pub spans: Vec<Span>,
}

impl Line {
    fn numbered(left: usize, right: usize) -> Self {
        Self {
            left_number: Some(left),
            right_number: Some(right),
            spans: Vec::new(),
        }
    }

    /// True if any span is an insertion or deletion.
    pub fn has_diff(&self) -> bool {
        self.spans.iter().any(|s| s.kind != DiffKind::Equal)
    }

    /// True if the left line number should be rendered: the number is
    /// present and at least one span is not an insertion.
    pub fn has_left_num(&self) -> bool {
        self.left_number.is_some() && self.spans.iter().any(|s| s.kind != DiffKind::Insert)
    }

    /// True if the right line number should be rendered: the number is
    /// present and at least one span is not a deletion.
    pub fn has_right_num(&self) -> bool {
        self.right_number.is_some() && self.spans.iter().any(|s| s.kind != DiffKind::Delete)
    }

    /// True if the line holds both inserted and deleted text and must be
    /// split into two display lines before rendering.
    pub fn has_both_diff(&self) -> bool {
        self.spans.iter().any(|s| s.kind == DiffKind::Insert)
            && self.spans.iter().any(|s| s.kind == DiffKind::Delete)
    }

    /// Split a line holding both insertions and deletions into two lines,
    /// one per edit kind.
    ///
    /// Equal spans are kept on both halves; the half whose edit kind
    /// appears first in span order comes first. The side numbers are
    /// partitioned so each half is numbered only on the side it renders.
    pub fn split(&self) -> (Line, Line) {
        let first_kind = self
            .spans
            .iter()
            .map(|s| s.kind)
            .find(|kind| *kind != DiffKind::Equal)
            .unwrap_or(DiffKind::Equal);

        let (mut first, mut second) = if first_kind == DiffKind::Insert {
            (
                Line {
                    left_number: None,
                    right_number: self.right_number,
                    spans: Vec::new(),
                },
                Line {
                    left_number: self.left_number,
                    right_number: None,
                    spans: Vec::new(),
                },
            )
        } else {
            (
                Line {
                    left_number: self.left_number,
                    right_number: None,
                    spans: Vec::new(),
                },
                Line {
                    left_number: None,
                    right_number: self.right_number,
                    spans: Vec::new(),
                },
            )
        };

        for span in &self.spans {
            if span.kind == DiffKind::Equal {
                first.spans.push(span.clone());
                second.spans.push(span.clone());
            } else if span.kind == first_kind {
                first.spans.push(span.clone());
            } else {
                second.spans.push(span.clone());
            }
        }

        (first, second)
    }
}

/// Convert a flat stream of diff operations into display lines, splitting
/// on embedded newlines and assigning 1-based line numbers to each side.
///
/// Deletions advance only the left number, insertions only the right, and
/// unchanged text advances both. Every returned line holds at least one
/// span; an empty input produces a single empty line numbered (1, 1).
pub fn lines_from_ops(ops: &[DiffOp]) -> Vec<Line> {
    let mut lines = Vec::new();

    let mut left_line = 1;
    let mut right_line = 1;
    let mut current = Line::numbered(1, 1);

    for op in ops {
        for (i, fragment) in op.text.split('\n').enumerate() {
            if i > 0 {
                // The previous fragment ended a line.
                if current.spans.is_empty() {
                    current.spans.push(Span::new(DiffKind::Equal, ""));
                }
                lines.push(current);

                match op.kind {
                    DiffKind::Delete => left_line += 1,
                    DiffKind::Equal => {
                        left_line += 1;
                        right_line += 1;
                    }
                    DiffKind::Insert => right_line += 1,
                }

                current = Line::numbered(left_line, right_line);
            }

            // A newline-only equal fragment would otherwise leave a
            // spurious empty equal span in front of the line's content.
            if op.kind != DiffKind::Equal || !fragment.is_empty() {
                current.spans.push(Span::new(op.kind, fragment));
            }
        }
    }

    if current.spans.is_empty() {
        current.spans.push(Span::new(DiffKind::Equal, ""));
    }
    lines.push(current);

    lines
}
