//! Editable text surface of one pane.
//!
//! - text storage (Rope)
//! - cursor as (row, grapheme column), terminators excluded
//! - row/column ↔ char offset mapping

use super::line_buffer::{split_lines, strip_terminator};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Borrow the slice as `&str` when it is contiguous, copy otherwise.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// Width of `g` when it starts at screen column `x`.
pub fn grapheme_width(g: &str, x: usize, tab_width: usize) -> usize {
    if g == "\t" {
        let tab = tab_width.max(1);
        tab - x % tab
    } else {
        UnicodeWidthStr::width(g)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaneText {
    rope: Rope,
    cursor: (usize, usize),
    preferred_col: Option<usize>,
}

impl PaneText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            preferred_col: None,
        }
    }

    pub fn from_lines(lines: &[String]) -> Self {
        Self::from_text(&lines.concat())
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Content as terminator-preserving lines, ready for the buffer model.
    pub fn lines(&self) -> Vec<String> {
        split_lines(&self.text())
    }

    /// Replace the content, keeping the cursor as close as possible.
    pub fn replace_text(&mut self, text: &str) {
        let (row, col) = self.cursor;
        self.rope = Rope::from_str(text);
        self.preferred_col = None;
        self.set_cursor(row, col);
    }

    /// Number of display rows. A trailing terminator opens one more empty row.
    pub fn len_rows(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.len_rows().saturating_sub(1));
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
    }

    /// Row text without its terminator.
    pub fn row_text(&self, row: usize) -> Option<Cow<'_, str>> {
        if row >= self.len_rows() {
            return None;
        }
        Some(match slice_to_cow(self.rope.line(row)) {
            Cow::Borrowed(s) => Cow::Borrowed(strip_terminator(s)),
            Cow::Owned(s) => Cow::Owned(strip_terminator(&s).to_string()),
        })
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        self.row_text(row)
            .map(|text| text.graphemes(true).count())
            .unwrap_or(0)
    }

    /// Screen column of grapheme `col` on `row`, tabs expanded to `tab_width` stops.
    pub fn display_col(&self, row: usize, col: usize, tab_width: usize) -> usize {
        let Some(text) = self.row_text(row) else {
            return 0;
        };
        text.graphemes(true)
            .take(col)
            .fold(0, |x, g| x + grapheme_width(g, x, tab_width))
    }

    /// Grapheme column under screen column `x` on `row` (clamped to the row end).
    pub fn col_at_display(&self, row: usize, x: usize, tab_width: usize) -> usize {
        let Some(text) = self.row_text(row) else {
            return 0;
        };
        let mut at = 0;
        for (col, g) in text.graphemes(true).enumerate() {
            let w = grapheme_width(g, at, tab_width);
            if x < at + w.max(1) {
                return col;
            }
            at += w;
        }
        text.graphemes(true).count()
    }

    fn terminator_chars(&self, row: usize) -> usize {
        if row >= self.len_rows() {
            return 0;
        }
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        if line.ends_with("\r\n") {
            2
        } else if line.ends_with('\n') {
            1
        } else {
            0
        }
    }

    pub fn pos_to_char(&self, row: usize, col: usize) -> usize {
        let start = self.rope.line_to_char(row);
        let Some(text) = self.row_text(row) else {
            return start;
        };
        start
            + text
                .graphemes(true)
                .take(col)
                .map(|g| g.chars().count())
                .sum::<usize>()
    }

    fn cursor_char(&self) -> usize {
        self.pos_to_char(self.cursor.0, self.cursor.1)
    }

    fn line_ending(&self) -> &'static str {
        let first = slice_to_cow(self.rope.line(0));
        if first.ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        }
    }

    // ==================== edits (return whether the text changed) ====================

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf))
    }

    pub fn insert_newline(&mut self) -> bool {
        let ending = self.line_ending();
        self.insert_str(ending)
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let at = self.cursor_char();
        self.rope.insert(at, text);

        let end = at + text.chars().count();
        let row = self.rope.char_to_line(end);
        let line_start = self.rope.line_to_char(row);
        let col = self
            .rope
            .slice(line_start..end)
            .to_string()
            .graphemes(true)
            .count();
        self.cursor = (row, col);
        self.preferred_col = None;
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            let end = self.pos_to_char(row, col);
            let start = self.pos_to_char(row, col - 1);
            self.rope.remove(start..end);
            self.cursor = (row, col - 1);
        } else if row > 0 {
            let prev = row - 1;
            let prev_len = self.line_grapheme_len(prev);
            let end = self.rope.line_to_char(row);
            let start = end - self.terminator_chars(prev);
            self.rope.remove(start..end);
            self.cursor = (prev, prev_len);
        } else {
            return false;
        }
        self.preferred_col = None;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let len = self.line_grapheme_len(row);
        if col < len {
            let start = self.pos_to_char(row, col);
            let end = self.pos_to_char(row, col + 1);
            self.rope.remove(start..end);
        } else {
            let term = self.terminator_chars(row);
            if term == 0 {
                return false;
            }
            let start = self.pos_to_char(row, len);
            self.rope.remove(start..start + term);
        }
        self.preferred_col = None;
        true
    }

    // ==================== cursor movement (return whether the cursor moved) ====================

    fn move_to(&mut self, row: usize, col: usize, keep_preferred: bool) -> bool {
        let before = self.cursor;
        self.set_cursor(row, col);
        if !keep_preferred {
            self.preferred_col = None;
        }
        self.cursor != before
    }

    pub fn move_left(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            self.move_to(row, col - 1, false)
        } else if row > 0 {
            let len = self.line_grapheme_len(row - 1);
            self.move_to(row - 1, len, false)
        } else {
            false
        }
    }

    pub fn move_right(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.move_to(row, col + 1, false)
        } else if row + 1 < self.len_rows() {
            self.move_to(row + 1, 0, false)
        } else {
            false
        }
    }

    pub fn move_vertical(&mut self, delta: isize) -> bool {
        let (row, col) = self.cursor;
        let last = self.len_rows().saturating_sub(1) as isize;
        let target = (row as isize + delta).clamp(0, last) as usize;
        let want = *self.preferred_col.get_or_insert(col);
        self.move_to(target, want, true)
    }

    pub fn move_line_start(&mut self) -> bool {
        let row = self.cursor.0;
        self.move_to(row, 0, false)
    }

    pub fn move_line_end(&mut self) -> bool {
        let row = self.cursor.0;
        let len = self.line_grapheme_len(row);
        self.move_to(row, len, false)
    }

    pub fn move_file_start(&mut self) -> bool {
        self.move_to(0, 0, false)
    }

    pub fn move_file_end(&mut self) -> bool {
        let row = self.len_rows().saturating_sub(1);
        let len = self.line_grapheme_len(row);
        self.move_to(row, len, false)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/pane_text.rs"]
mod tests;
