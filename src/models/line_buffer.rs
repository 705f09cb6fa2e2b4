//! Line buffer: one side of the comparison as an ordered list of lines.
//!
//! Each line keeps its own terminator (`"\n"` or `"\r\n"`), so joining the
//! lines back together reproduces the source text byte for byte. The last
//! line may have no terminator at all.

use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// Concatenate every line, terminators included.
    pub fn to_text(&self) -> String {
        let cap = self.lines.iter().map(String::len).sum();
        let mut out = String::with_capacity(cap);
        for line in &self.lines {
            out.push_str(line);
        }
        out
    }

    /// Whole content with surrounding whitespace removed (what "copy entire
    /// text" puts on the clipboard).
    pub fn trimmed_text(&self) -> String {
        self.to_text().trim().to_string()
    }
}

impl Deref for LineBuffer {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.lines
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Split `text` into lines, keeping terminators. An empty string yields no
/// lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
#[path = "../../tests/unit/models/line_buffer.rs"]
mod tests;
