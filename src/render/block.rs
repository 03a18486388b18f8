use crate::render::line::Line;

/// A contiguous run of display lines rendered together: one or more
/// changed lines plus their surrounding unchanged context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<Line>,
}

/// Group lines into blocks of changes padded with up to `context`
/// unchanged lines on each side.
///
/// Runs of changes closer together than the context window are folded
/// into a single block; unchanged lines further than `context` positions
/// from any change are dropped, which is what produces the visible gap
/// between blocks. A single forward scan suffices: a block stays open
/// until `context` unchanged lines have passed since the last change.
pub fn blocks_from_lines(lines: &[Line], context: usize) -> Vec<Block> {
    let mut blocks = Vec::new();

    let mut open = false;
    let mut block_lines: Vec<Line> = Vec::new();
    let mut last_diff = 0usize;

    for (i, line) in lines.iter().enumerate() {
        if !open {
            if !line.has_diff() {
                continue;
            }

            let start = i.saturating_sub(context);
            block_lines.extend_from_slice(&lines[start..=i]);
            last_diff = i;
            open = true;
            continue;
        }

        if line.has_diff() {
            // Pull in the gap since the previous change along with the
            // change itself.
            block_lines.extend_from_slice(&lines[last_diff + 1..=i]);
            last_diff = i;
        } else if i - last_diff > context {
            block_lines.extend_from_slice(&lines[last_diff + 1..last_diff + 1 + context]);
            blocks.push(Block {
                lines: std::mem::take(&mut block_lines),
            });
            open = false;
        }
    }

    if open {
        let end = (last_diff + 1 + context).min(lines.len());
        block_lines.extend_from_slice(&lines[last_diff + 1..end]);
        blocks.push(Block { lines: block_lines });
    }

    blocks
}
