use super::util::{centered_rect, gutter_width};
use super::{
    LayoutCache, PaneLayout, Workbench, BUTTON_ROW_HEIGHT, STATUS_HEIGHT, TOOLBAR_HEIGHT,
};
use crate::kernel::{Action as KernelAction, BufferSide};
use crate::models::grapheme_width;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub(super) const OPEN_LABEL: &str = "[Open Text File]";
pub(super) const APPLY_LABEL: &str = "[Apply Changes]";
const YES_LABEL: &str = "[Yes]";
const NO_LABEL: &str = "[No]";
const OK_LABEL: &str = "[ OK ]";
const KEY_HINTS: &str = "^O Open  ^S Apply  ^L Copy line  ^T Copy pane  F6 Switch  ^Q Quit";

pub(super) fn copy_label(side: BufferSide) -> &'static str {
    match side {
        BufferSide::Original => "[Copy Original Code]",
        BufferSide::Modified => "[Copy Modified Code]",
    }
}

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let gutters = if state.editor.show_line_numbers {
        BufferSide::ALL.map(|side| gutter_width(state.pane(side).text.len_rows()))
    } else {
        [0, 0]
    };
    workbench.layout = compute_layout(area, gutters);

    for side in BufferSide::ALL {
        let text = workbench.layout.panes[side.index()].text;
        let _ = workbench.dispatch_kernel(KernelAction::PaneSetViewSize {
            side,
            height: text.height as usize,
            width: text.width as usize,
        });
    }

    workbench.render_toolbar(frame);
    for side in BufferSide::ALL {
        workbench.render_pane(frame, side);
    }
    workbench.render_status(frame);

    // Modal layers, bottom to top.
    workbench.render_context_menu(frame, area);
    workbench.render_input_dialog(frame, area);
    workbench.render_confirm_dialog(frame, area);
    workbench.render_notification(frame, area);
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    let state = workbench.store.state();
    let ui = &state.ui;
    if ui.notification.is_some() || ui.confirm_dialog.visible || ui.context_menu.visible {
        return None;
    }
    if ui.input_dialog.visible {
        return input_dialog_cursor(workbench);
    }

    let side = ui.focus;
    let pane = state.pane(side);
    let text = workbench.layout.panes[side.index()].text;
    let (row, col) = pane.text.cursor();

    let y = row.checked_sub(pane.scroll_row)?;
    let x = pane
        .text
        .display_col(row, col, state.editor.tab_width())
        .checked_sub(pane.scroll_col)?;
    if y >= text.height as usize || x >= text.width as usize {
        return None;
    }
    Some((text.x + x as u16, text.y + y as u16))
}

fn compute_layout(area: Rect, gutters: [u16; 2]) -> LayoutCache {
    let toolbar = Rect::new(area.x, area.y, area.width, TOOLBAR_HEIGHT.min(area.height));
    let status_height = STATUS_HEIGHT.min(area.height - toolbar.height);
    let status = Rect::new(
        area.x,
        area.bottom() - status_height,
        area.width,
        status_height,
    );
    let body = Rect::new(
        area.x,
        toolbar.bottom(),
        area.width,
        status.y - toolbar.bottom(),
    );

    let open_button = button_rect(toolbar, area.x + 1, OPEN_LABEL);
    let apply_button = button_rect(toolbar, open_button.right() + 1, APPLY_LABEL);

    let left = body.width / 2;
    let columns = [
        Rect::new(body.x, body.y, left, body.height),
        Rect::new(body.x + left, body.y, body.width - left, body.height),
    ];
    let panes = BufferSide::ALL.map(|side| {
        let i = side.index();
        pane_layout(columns[i], gutters[i], copy_label(side))
    });

    LayoutCache {
        area,
        open_button,
        apply_button,
        panes,
        status,
        confirm_buttons: None,
        menu: None,
    }
}

fn button_rect(row: Rect, x: u16, label: &str) -> Rect {
    let x = x.min(row.right());
    let width = (label.width() as u16).min(row.right() - x);
    Rect::new(x, row.y, width, row.height)
}

fn pane_layout(column: Rect, gutter: u16, label: &str) -> PaneLayout {
    let button_height = BUTTON_ROW_HEIGHT.min(column.height);
    let block = Rect::new(
        column.x,
        column.y,
        column.width,
        column.height - button_height,
    );
    let label_width = (label.width() as u16).min(column.width);
    let copy_button = Rect::new(
        column.x + (column.width - label_width) / 2,
        block.bottom(),
        label_width,
        button_height,
    );

    let inner = Block::default().borders(Borders::ALL).inner(block);
    let gutter = gutter.min(inner.width);
    PaneLayout {
        block,
        gutter: Rect::new(inner.x, inner.y, gutter, inner.height),
        text: Rect::new(inner.x + gutter, inner.y, inner.width - gutter, inner.height),
        copy_button,
    }
}

/// The part of `text` visible between screen columns `scroll_col` and
/// `scroll_col + width`, tabs expanded. Returns the string and its width.
pub(super) fn visible_segment(
    text: &str,
    scroll_col: usize,
    width: usize,
    tab_width: usize,
) -> (String, usize) {
    let mut out = String::new();
    let mut x = 0;
    let mut used = 0;

    for g in text.graphemes(true) {
        let w = grapheme_width(g, x, tab_width);
        let start = x;
        x += w;
        if x <= scroll_col {
            continue;
        }
        if start < scroll_col {
            // Wide grapheme or tab cut by the left edge.
            let n = (x - scroll_col).min(width);
            out.extend(std::iter::repeat(' ').take(n));
            used += n;
            continue;
        }
        if used + w > width {
            break;
        }
        if g == "\t" {
            out.extend(std::iter::repeat(' ').take(w));
        } else if !g.chars().all(char::is_control) {
            out.push_str(g);
        }
        used += w;
    }

    (out, used)
}

impl Workbench {
    fn render_toolbar(&self, frame: &mut Frame) {
        let state = self.store.state();
        let area = self.layout.area;
        let toolbar = Rect::new(area.x, area.y, area.width, TOOLBAR_HEIGHT.min(area.height));

        let button = Style::default().bg(self.theme.button_bg).fg(self.theme.button_fg);
        let path = state
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "No file opened".to_string());
        let dirty = if state.is_dirty() { " [+]" } else { "" };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(OPEN_LABEL, button),
            Span::raw(" "),
            Span::styled(APPLY_LABEL, button),
            Span::raw("  "),
            Span::styled(path, Style::default().fg(self.theme.header_fg)),
            Span::styled(dirty, Style::default().fg(self.theme.accent_fg)),
        ]);
        frame.render_widget(Paragraph::new(line), toolbar);
    }

    fn render_pane(&self, frame: &mut Frame, side: BufferSide) {
        let layout = self.layout.panes[side.index()];
        let state = self.store.state();
        let pane = state.pane(side);
        let marked = state.highlights.lines(side);

        let border = if state.ui.focus == side {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        let title = if marked.is_empty() {
            format!(" {} ", side.label())
        } else {
            format!(" {} ({} marked) ", side.label(), marked.len())
        };
        frame.render_widget(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
            layout.block,
        );

        let mark_bg = match side {
            BufferSide::Original => self.theme.removed_bg,
            BufferSide::Modified => self.theme.added_bg,
        };
        let mark_style = Style::default().bg(mark_bg).fg(self.theme.marked_fg);
        let gutter_style = Style::default().fg(self.theme.gutter_fg);
        let number_width = (layout.gutter.width as usize).saturating_sub(1);
        let width = layout.text.width as usize;
        let tab_width = state.editor.tab_width();

        let mut gutter_lines = Vec::with_capacity(layout.text.height as usize);
        let mut text_lines = Vec::with_capacity(layout.text.height as usize);
        for offset in 0..layout.text.height as usize {
            let row = pane.scroll_row + offset;
            let Some(content) = pane.text.row_text(row) else {
                break;
            };
            let is_marked = marked.contains(&(row + 1));

            let number_style = if is_marked {
                gutter_style.fg(self.theme.accent_fg)
            } else {
                gutter_style
            };
            gutter_lines.push(Line::styled(
                format!("{:>number_width$} ", row + 1),
                number_style,
            ));

            let (segment, used) = visible_segment(&content, pane.scroll_col, width, tab_width);
            if is_marked {
                // Pad so the background covers the whole row.
                let padded = format!("{segment}{}", " ".repeat(width - used));
                text_lines.push(Line::styled(padded, mark_style));
            } else {
                text_lines.push(Line::raw(segment));
            }
        }

        if layout.gutter.width > 0 {
            frame.render_widget(Paragraph::new(gutter_lines), layout.gutter);
        }
        frame.render_widget(Paragraph::new(text_lines), layout.text);

        let button = Style::default().bg(self.theme.button_bg).fg(self.theme.button_fg);
        frame.render_widget(
            Paragraph::new(Span::styled(copy_label(side), button)),
            layout.copy_button,
        );
    }

    fn render_status(&self, frame: &mut Frame) {
        let state = self.store.state();
        let summary = &state.summary;
        let (row, col) = state.focused_pane().text.cursor();
        let text = format!(
            " -{} +{} ={} | {} Ln {}, Col {} | {}",
            summary.removed,
            summary.added,
            summary.unchanged,
            state.ui.focus.label(),
            row + 1,
            col + 1,
            KEY_HINTS,
        );
        let style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        frame.render_widget(Paragraph::new(text).style(style), self.layout.status);
    }

    fn render_context_menu(&mut self, frame: &mut Frame, area: Rect) {
        self.layout.menu = None;
        let menu = &self.store.state().ui.context_menu;
        if !menu.visible || menu.items.is_empty() {
            return;
        }

        let width = menu
            .items
            .iter()
            .map(|item| item.label().width() as u16)
            .max()
            .unwrap_or(0)
            + 4;
        let height = menu.items.len() as u16 + 2;
        let rect = anchored_rect(menu.anchor, width, height, area);
        if rect.width < 4 || rect.height < 3 {
            return;
        }

        let base = Style::default().bg(self.theme.dialog_bg).fg(self.theme.dialog_fg);
        let selected = Style::default()
            .bg(self.theme.menu_selected_bg)
            .fg(self.theme.menu_selected_fg)
            .add_modifier(Modifier::BOLD);
        let inner_width = rect.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = menu
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let label = format!(" {:<w$}", item.label(), w = inner_width.saturating_sub(1));
                let style = if i == menu.selected { selected } else { base };
                Line::styled(label, style)
            })
            .collect();

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines).style(base).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.dialog_border)),
            ),
            rect,
        );
        self.layout.menu = Some(rect);
    }

    fn render_input_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.input_dialog;
        if !dialog.visible {
            return;
        }

        let popup = input_dialog_area(area);
        if popup.width < 20 || popup.height < 5 {
            return;
        }
        let base = Style::default().bg(self.theme.dialog_bg).fg(self.theme.dialog_fg);
        let block = Block::default()
            .title(format!(" {} ", dialog.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.dialog_border));

        let error = dialog.error.as_deref().unwrap_or_default();
        let lines = vec![
            Line::from(vec![Span::raw("> "), Span::raw(dialog.value.as_str())]),
            Line::styled(error, Style::default().fg(self.theme.error_fg)),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(self.theme.accent_fg)),
                Span::raw(" Open  "),
                Span::styled("[Esc]", Style::default().fg(self.theme.inactive_border)),
                Span::raw(" Cancel"),
            ]),
        ];

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).style(base).block(block), popup);
    }

    fn render_confirm_dialog(&mut self, frame: &mut Frame, area: Rect) {
        self.layout.confirm_buttons = None;
        let dialog = &self.store.state().ui.confirm_dialog;
        if !dialog.visible {
            return;
        }

        let width = 52.min(area.width.saturating_sub(4));
        let popup = centered_rect(width, 7, area);
        if popup.width < 20 || popup.height < 5 {
            return;
        }
        let block = Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.dialog_border));
        let inner = block.inner(popup);
        let base = Style::default().bg(self.theme.dialog_bg).fg(self.theme.dialog_fg);

        frame.render_widget(Clear, popup);
        frame.render_widget(block.style(base), popup);
        frame.render_widget(
            Paragraph::new(dialog.message.as_str()).wrap(Wrap { trim: true }),
            Rect::new(inner.x, inner.y, inner.width, 2.min(inner.height)),
        );

        let button = Style::default().bg(self.theme.button_bg).fg(self.theme.button_fg);
        let buttons_width = (YES_LABEL.width() + 2 + NO_LABEL.width()) as u16;
        let y = inner.y + inner.height.saturating_sub(2);
        let x = inner.x + inner.width.saturating_sub(buttons_width) / 2;
        let yes = Rect::new(x, y, YES_LABEL.width() as u16, 1);
        let no = Rect::new(yes.right() + 2, y, NO_LABEL.width() as u16, 1);
        frame.render_widget(Paragraph::new(Span::styled(YES_LABEL, button)), yes);
        frame.render_widget(Paragraph::new(Span::styled(NO_LABEL, button)), no);

        let hint = Line::styled(
            "Enter/y: apply   Esc/n: cancel",
            Style::default().fg(self.theme.inactive_border),
        )
        .centered();
        frame.render_widget(
            Paragraph::new(hint),
            Rect::new(inner.x, y + 1, inner.width, 1).intersection(inner),
        );

        self.layout.confirm_buttons = Some((yes, no));
    }

    fn render_notification(&self, frame: &mut Frame, area: Rect) {
        let Some(notification) = self.store.state().ui.notification.as_ref() else {
            return;
        };

        let content_width = notification
            .message
            .width()
            .max(notification.title.width() + 2)
            .min(u16::MAX as usize) as u16;
        let max_width = area.width.saturating_sub(4).max(1);
        let width = content_width.saturating_add(6).max(30).min(max_width);
        let inner_width = width.saturating_sub(2).max(1);
        let message_lines = (notification.message.width() as u16).div_ceil(inner_width).max(1) + 1;
        let popup = centered_rect(width, message_lines + 4, area);

        let border = if notification.is_error() {
            self.theme.error_fg
        } else {
            self.theme.dialog_border
        };
        let block = Block::default()
            .title(format!(" {} ", notification.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(popup);
        let base = Style::default().bg(self.theme.dialog_bg).fg(self.theme.dialog_fg);

        frame.render_widget(Clear, popup);
        frame.render_widget(block.style(base), popup);
        frame.render_widget(
            Paragraph::new(notification.message.as_str()).wrap(Wrap { trim: true }),
            Rect::new(inner.x, inner.y, inner.width, message_lines.min(inner.height)),
        );

        let ok = Line::styled(
            OK_LABEL,
            Style::default().bg(self.theme.button_bg).fg(self.theme.button_fg),
        )
        .centered();
        let ok_row = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
        frame.render_widget(Paragraph::new(ok), ok_row.intersection(inner));
    }
}

fn anchored_rect(anchor: (u16, u16), width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = anchor.0.clamp(area.x, area.right() - width);
    let y = anchor.1.clamp(area.y, area.bottom() - height);
    Rect::new(x, y, width, height)
}

fn input_dialog_area(area: Rect) -> Rect {
    let width = (area.width.saturating_mul(6) / 10).max(40);
    centered_rect(width, 5, area)
}

fn input_dialog_cursor(workbench: &Workbench) -> Option<(u16, u16)> {
    let dialog = &workbench.store.state().ui.input_dialog;
    let popup = input_dialog_area(workbench.layout.area);
    if popup.width < 20 || popup.height < 5 {
        return None;
    }

    let before = dialog.value.get(..dialog.cursor).unwrap_or_default();
    let x = (popup.x + 1 + 2)
        .saturating_add(before.width() as u16)
        .min(popup.right().saturating_sub(2));
    Some((x, popup.y + 1))
}
