use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag};

/// The kind of edit a [`DiffOp`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Insert,
    Equal,
    Delete,
}

impl From<ChangeTag> for DiffKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Insert => DiffKind::Insert,
            ChangeTag::Equal => DiffKind::Equal,
            ChangeTag::Delete => DiffKind::Delete,
        }
    }
}

/// A single diff operation: one kind of edit applied to a run of text.
///
/// The text may be empty and may contain embedded newlines; the rendering
/// pipeline splits multi-line operations into display lines itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffOp {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// An operation for text present only in the "after" input.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Insert, text)
    }

    /// An operation for text present in both inputs.
    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Equal, text)
    }

    /// An operation for text present only in the "before" input.
    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Delete, text)
    }
}

/// Convert tagged changes produced by [`similar`] into diff operations.
///
/// This is a one-to-one mapping over the output of the `similar::utils`
/// diff helpers, so existing diff results can be rendered without
/// recomputing anything.
pub fn ops_from_changes<S: AsRef<str>>(changes: &[(ChangeTag, S)]) -> Vec<DiffOp> {
    changes
        .iter()
        .map(|(tag, text)| DiffOp::new(DiffKind::from(*tag), text.as_ref()))
        .collect()
}

/// Diff algorithms available when computing operations from two texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Classic Myers diff (fastest, default)
    #[default]
    Myers,
    /// Patience diff (better output for moved blocks)
    Patience,
    /// Longest common subsequence
    Lcs,
}

impl DiffAlgorithm {
    fn to_similar(self) -> Algorithm {
        match self {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Token size used when computing operations from two texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Character-level changes (default)
    #[default]
    Char,
    /// Word-level changes
    Word,
    /// Line-level changes
    Line,
}

/// Compute diff operations between two texts.
///
/// Adjacent changes of the same kind are merged into a single operation,
/// so a deleted word comes back as one delete even when diffing at
/// character granularity.
pub fn diff_ops(
    old: &str,
    new: &str,
    algorithm: DiffAlgorithm,
    granularity: Granularity,
) -> Vec<DiffOp> {
    let alg = algorithm.to_similar();
    let ops = match granularity {
        Granularity::Char => ops_from_changes(&similar::utils::diff_chars(alg, old, new)),
        Granularity::Word => ops_from_changes(&similar::utils::diff_words(alg, old, new)),
        Granularity::Line => ops_from_changes(&similar::utils::diff_lines(alg, old, new)),
    };
    coalesce(ops)
}

fn coalesce(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut out: Vec<DiffOp> = Vec::with_capacity(ops.len());
    for op in ops {
        match out.last_mut() {
            Some(last) if last.kind == op.kind => last.text.push_str(&op.text),
            _ => out.push(op),
        }
    }
    out
}
