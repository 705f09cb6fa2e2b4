//! Maps diff operations back to the lines each pane should mark.
//!
//! The default mapping looks a removed/added line up by its text and marks
//! the first line with equal content, scanning from the top of the buffer
//! for every operation. With duplicated lines this may mark an unchanged
//! copy instead of the one that actually changed. `Aligned` uses the index
//! the diff engine reported instead.

use super::diff::{DiffKind, DiffOperation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferSide {
    Original,
    Modified,
}

impl BufferSide {
    pub const ALL: [BufferSide; 2] = [BufferSide::Original, BufferSide::Modified];

    pub fn index(self) -> usize {
        match self {
            BufferSide::Original => 0,
            BufferSide::Modified => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            BufferSide::Original => BufferSide::Modified,
            BufferSide::Modified => BufferSide::Original,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BufferSide::Original => "Original",
            BufferSide::Modified => "Modified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMapping {
    #[default]
    FirstMatch,
    Aligned,
}

/// Marked lines per side, 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub original: BTreeSet<usize>,
    pub modified: BTreeSet<usize>,
}

impl Highlights {
    pub fn lines(&self, side: BufferSide) -> &BTreeSet<usize> {
        match side {
            BufferSide::Original => &self.original,
            BufferSide::Modified => &self.modified,
        }
    }

    pub fn is_marked(&self, side: BufferSide, line: usize) -> bool {
        self.lines(side).contains(&line)
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.modified.is_empty()
    }
}

pub fn compute_highlights(
    ops: &[DiffOperation],
    original: &[String],
    modified: &[String],
) -> Highlights {
    compute_highlights_with(HighlightMapping::FirstMatch, ops, original, modified)
}

pub fn compute_highlights_with(
    mapping: HighlightMapping,
    ops: &[DiffOperation],
    original: &[String],
    modified: &[String],
) -> Highlights {
    let mut out = Highlights::default();

    for op in ops {
        let (buffer, index, marks) = match op.kind {
            DiffKind::Unchanged => continue,
            DiffKind::Removed => (original, op.original_index, &mut out.original),
            DiffKind::Added => (modified, op.modified_index, &mut out.modified),
        };

        let position = match mapping {
            HighlightMapping::FirstMatch => buffer.iter().position(|line| *line == op.text),
            HighlightMapping::Aligned => index.filter(|&i| i < buffer.len()),
        };

        match position {
            Some(i) => {
                marks.insert(i + 1);
            }
            None => tracing::debug!(
                kind = ?op.kind,
                text = %op.text.trim_end(),
                "diff op has no line in buffer"
            ),
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/highlight.rs"]
mod tests;
