use std::fs;

use diffprint::render::{blocks_from_lines, lines_from_ops};
use diffprint::{diff_ops, DiffAlgorithm, DiffKind, DiffOp, Granularity, Printer, Theme};
use tempfile::TempDir;

fn plain_printer() -> Printer {
    Printer::new().theme(Theme::plain())
}

#[test]
fn test_render_mixed_change_end_to_end() {
    let ops = vec![
        DiffOp::equal("a\nb\n"),
        DiffOp::delete("c"),
        DiffOp::insert("C"),
        DiffOp::equal("\nd"),
    ];

    let text = plain_printer().render("name", &ops);

    assert_eq!(
        text,
        concat!(
            "name - (before) (after)\n",
            "1 | 1 |   a\n",
            "2 | 2 |   b\n",
            "3 |     - c\n",
            "    3 | + C\n",
            "4 | 4 |   d\n",
        )
    );
}

#[test]
fn test_identical_inputs_render_empty() {
    let ops = diff_ops(
        "no changes here\nat all",
        "no changes here\nat all",
        DiffAlgorithm::Myers,
        Granularity::Char,
    );

    assert_eq!(plain_printer().render("unchanged.txt", &ops), "");
}

#[test]
fn test_diff_files_from_disk() {
    let dir = TempDir::new().expect("create temp dir");
    let old_path = dir.path().join("old.rs");
    let new_path = dir.path().join("new.rs");

    fs::write(&old_path, "fn main() {\n    println!(\"hello\");\n}\n").expect("write old");
    fs::write(&new_path, "fn main() {\n    println!(\"goodbye\");\n}\n").expect("write new");

    let old = fs::read_to_string(&old_path).expect("read old");
    let new = fs::read_to_string(&new_path).expect("read new");

    let ops = diff_ops(&old, &new, DiffAlgorithm::Myers, Granularity::Char);
    let text = plain_printer().render("main.rs", &ops);

    assert!(text.starts_with("main.rs - (before) (after)\n"));
    assert!(text.contains("hello"));
    assert!(text.contains("goodbye"));
}

#[test]
fn test_write_into_a_sink() {
    let ops = vec![DiffOp::delete("a"), DiffOp::insert("b")];

    let mut out = Vec::new();
    plain_printer().write(&mut out, "t", &ops);

    let text = String::from_utf8(out).expect("utf8 output");
    assert_eq!(
        text,
        concat!(
            "t - (before) (after)\n",
            "1 |     - a\n",
            "    1 | + b\n",
        )
    );
}

// Rebuild one side's text from the line model. A side gains a newline
// exactly where its line number advances.
fn side_text(
    lines: &[diffprint::render::Line],
    skip: DiffKind,
    number: fn(&diffprint::render::Line) -> Option<usize>,
) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        for span in &line.spans {
            if span.kind != skip {
                out.push_str(&span.text);
            }
        }
        if let Some(next) = lines.get(i + 1) {
            if number(next) > number(line) {
                out.push('\n');
            }
        }
    }
    out
}

#[test]
fn test_computed_diff_reconstructs_both_inputs() {
    let old = "alpha\nbeta\ngamma\ndelta\n";
    let new = "alpha\nbeard\ngamma\n";

    let ops = diff_ops(old, new, DiffAlgorithm::Myers, Granularity::Char);
    let lines = lines_from_ops(&ops);

    let before = side_text(&lines, DiffKind::Insert, |line| line.left_number);
    let after = side_text(&lines, DiffKind::Delete, |line| line.right_number);

    assert_eq!(before, old);
    assert_eq!(after, new);
}

#[test]
fn test_changed_lines_covered_for_any_context() {
    let old = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj\n";
    let new = "a\nB\nc\nd\ne\nf\ng\nh\nI\nj\n";

    let ops = diff_ops(old, new, DiffAlgorithm::Myers, Granularity::Char);
    let lines = lines_from_ops(&ops);

    for context in 0..5 {
        let blocks = blocks_from_lines(&lines, context);

        let changed_total = lines.iter().filter(|line| line.has_diff()).count();
        let changed_in_blocks: usize = blocks
            .iter()
            .map(|b| b.lines.iter().filter(|line| line.has_diff()).count())
            .sum();

        assert_eq!(
            changed_in_blocks, changed_total,
            "context = {}",
            context
        );
    }
}

#[test]
fn test_default_theme_output_is_styled() {
    let text = diffprint::render_strings("styled.txt", "old text", "new text");

    assert!(text.contains('\u{1b}'));
    assert!(text.contains("styled.txt"));
}
