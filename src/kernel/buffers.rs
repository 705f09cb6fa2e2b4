//! Dual buffer model: the `original` baseline and the `modified` copy.

use super::diff::{diff_with, DiffAlgorithm, DiffOperation};
use super::highlight::BufferSide;
use super::services::ports::file::{FileProvider, Result};
use crate::models::LineBuffer;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualBuffers {
    original: LineBuffer,
    modified: LineBuffer,
}

impl DualBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both sides start as the same content.
    pub fn from_text(text: &str) -> Self {
        let original = LineBuffer::from_text(text);
        Self {
            modified: original.clone(),
            original,
        }
    }

    /// Read `path` and use its lines for both sides.
    pub fn load(provider: &dyn FileProvider, path: &Path) -> Result<Self> {
        let text = provider.read_file(path)?;
        let buffers = Self::from_text(&text);
        tracing::info!(
            path = %path.display(),
            lines = buffers.original.len(),
            "file loaded"
        );
        Ok(buffers)
    }

    pub fn original(&self) -> &LineBuffer {
        &self.original
    }

    pub fn modified(&self) -> &LineBuffer {
        &self.modified
    }

    pub fn buffer(&self, side: BufferSide) -> &LineBuffer {
        match side {
            BufferSide::Original => &self.original,
            BufferSide::Modified => &self.modified,
        }
    }

    pub fn set_original(&mut self, lines: Vec<String>) {
        self.original.replace(lines);
    }

    pub fn set_modified(&mut self, lines: Vec<String>) {
        self.modified.replace(lines);
    }

    pub fn set(&mut self, side: BufferSide, lines: Vec<String>) {
        match side {
            BufferSide::Original => self.set_original(lines),
            BufferSide::Modified => self.set_modified(lines),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.original != self.modified
    }

    pub fn diff(&self, algorithm: DiffAlgorithm) -> Vec<DiffOperation> {
        diff_with(algorithm, &self.original, &self.modified)
    }

    /// Write the modified lines to `path`, then make them the new baseline.
    /// On a failed write neither side changes.
    pub fn commit(&mut self, provider: &dyn FileProvider, path: &Path) -> Result<()> {
        provider.write_file(path, &self.modified.to_text())?;
        self.original = self.modified.clone();
        tracing::info!(
            path = %path.display(),
            lines = self.modified.len(),
            "changes committed"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/buffers.rs"]
mod tests;
