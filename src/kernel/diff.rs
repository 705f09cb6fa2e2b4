//! Line diff engine.
//!
//! Wraps `similar`'s slice diff and flattens its grouped ops into one
//! operation per line. Within a replaced block every removed line is emitted
//! before the added ones.
//!
//! None of the algorithms is difflib's longest-matching-block matcher, so on
//! inputs with repeated lines the alignment can differ from `ndiff`'s.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl DiffAlgorithm {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "myers" => Some(Self::Myers),
            "patience" => Some(Self::Patience),
            "lcs" => Some(Self::Lcs),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Myers => "myers",
            Self::Patience => "patience",
            Self::Lcs => "lcs",
        }
    }
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(value: DiffAlgorithm) -> Self {
        match value {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Unchanged,
    Removed,
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOperation {
    pub kind: DiffKind,
    pub text: String,
    /// 0-based index in the original sequence (unchanged/removed only).
    pub original_index: Option<usize>,
    /// 0-based index in the modified sequence (unchanged/added only).
    pub modified_index: Option<usize>,
}

impl DiffOperation {
    fn unchanged(text: &str, original_index: usize, modified_index: usize) -> Self {
        Self {
            kind: DiffKind::Unchanged,
            text: text.to_string(),
            original_index: Some(original_index),
            modified_index: Some(modified_index),
        }
    }

    fn removed(text: &str, original_index: usize) -> Self {
        Self {
            kind: DiffKind::Removed,
            text: text.to_string(),
            original_index: Some(original_index),
            modified_index: None,
        }
    }

    fn added(text: &str, modified_index: usize) -> Self {
        Self {
            kind: DiffKind::Added,
            text: text.to_string(),
            original_index: None,
            modified_index: Some(modified_index),
        }
    }
}

pub fn diff(original: &[String], modified: &[String]) -> Vec<DiffOperation> {
    diff_with(DiffAlgorithm::default(), original, modified)
}

pub fn diff_with(
    algorithm: DiffAlgorithm,
    original: &[String],
    modified: &[String],
) -> Vec<DiffOperation> {
    let ops = capture_diff_slices(algorithm.into(), original, modified);
    let mut out = Vec::with_capacity(original.len().max(modified.len()));

    for op in ops {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for i in 0..len {
                    out.push(DiffOperation::unchanged(
                        &original[old_index + i],
                        old_index + i,
                        new_index + i,
                    ));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for i in old_index..old_index + old_len {
                    out.push(DiffOperation::removed(&original[i], i));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for i in new_index..new_index + new_len {
                    out.push(DiffOperation::added(&modified[i], i));
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                for i in old_index..old_index + old_len {
                    out.push(DiffOperation::removed(&original[i], i));
                }
                for i in new_index..new_index + new_len {
                    out.push(DiffOperation::added(&modified[i], i));
                }
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub removed: usize,
    pub added: usize,
}

impl DiffSummary {
    pub fn from_ops(ops: &[DiffOperation]) -> Self {
        let mut summary = Self::default();
        for op in ops {
            match op.kind {
                DiffKind::Unchanged => summary.unchanged += 1,
                DiffKind::Removed => summary.removed += 1,
                DiffKind::Added => summary.added += 1,
            }
        }
        summary
    }

    pub fn has_changes(&self) -> bool {
        self.removed > 0 || self.added > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/diff.rs"]
mod tests;
