use ratatui::layout::Rect;

pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Width of the line-number gutter for `rows` rows (digits plus one space).
pub(super) fn gutter_width(rows: usize) -> u16 {
    let digits = rows.max(1).ilog10() + 1;
    digits.max(3) as u16 + 1
}
