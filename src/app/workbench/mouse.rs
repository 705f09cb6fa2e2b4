use super::util::rect_contains;
use super::Workbench;
use crate::core::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crate::core::Command;
use crate::kernel::{Action as KernelAction, BufferSide, CopyScope};
use crate::tui::view::EventResult;

/// Which part of a pane the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaneHit {
    /// Gutter or text; `row` is relative to the viewport, `x` to the text area.
    Body { row: u16, x: u16 },
    CopyButton,
}

impl Workbench {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let ui = &self.store.state().ui;
        let changed = if ui.notification.is_some() {
            self.notification_mouse(event)
        } else if ui.confirm_dialog.visible {
            self.confirm_dialog_mouse(event)
        } else if ui.input_dialog.visible {
            // The prompt is keyboard driven; swallow pointer input behind it.
            false
        } else if ui.context_menu.visible {
            self.context_menu_mouse(event)
        } else {
            self.workspace_mouse(event)
        };

        if self.should_quit() {
            return EventResult::Quit;
        }
        EventResult::from_changed(changed)
    }

    fn notification_mouse(&mut self, event: &MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Down(_) => self.dispatch_kernel(KernelAction::DismissNotification),
            _ => false,
        }
    }

    fn confirm_dialog_mouse(&mut self, event: &MouseEvent) -> bool {
        let MouseEventKind::Down(MouseButton::Left) = event.kind else {
            return false;
        };
        let Some((yes, no)) = self.layout.confirm_buttons else {
            return false;
        };
        if rect_contains(yes, event.column, event.row) {
            self.dispatch_kernel(KernelAction::ConfirmDialogAccept)
        } else if rect_contains(no, event.column, event.row) {
            self.dispatch_kernel(KernelAction::ConfirmDialogCancel)
        } else {
            false
        }
    }

    fn context_menu_mouse(&mut self, event: &MouseEvent) -> bool {
        let item = self.menu_item_at(event.column, event.row);
        match (event.kind, item) {
            (MouseEventKind::Moved, Some(index)) => {
                self.dispatch_kernel(KernelAction::ContextMenuSelect { index })
            }
            (MouseEventKind::Down(MouseButton::Left), Some(index)) => {
                let _ = self.dispatch_kernel(KernelAction::ContextMenuSelect { index });
                self.dispatch_kernel(KernelAction::ContextMenuActivate)
            }
            (MouseEventKind::Down(_), None) => {
                self.dispatch_kernel(KernelAction::ContextMenuClose)
            }
            _ => false,
        }
    }

    fn menu_item_at(&self, x: u16, y: u16) -> Option<usize> {
        let menu = self.layout.menu?;
        if !rect_contains(menu, x, y) {
            return None;
        }
        let index = y.checked_sub(menu.y + 1)? as usize;
        (index < self.store.state().ui.context_menu.items.len()).then_some(index)
    }

    fn workspace_mouse(&mut self, event: &MouseEvent) -> bool {
        let (x, y) = (event.column, event.row);

        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            if rect_contains(self.layout.open_button, x, y) {
                return self.dispatch_kernel(KernelAction::RunCommand(Command::OpenFile));
            }
            if rect_contains(self.layout.apply_button, x, y) {
                return self.dispatch_kernel(KernelAction::RunCommand(Command::ApplyChanges));
            }
        }

        let Some((side, hit)) = self.pane_hit(x, y) else {
            return false;
        };
        let step = self.store.state().editor.scroll_step() as isize;

        match (event.kind, hit) {
            (MouseEventKind::Down(MouseButton::Left), PaneHit::CopyButton) => {
                self.dispatch_kernel(KernelAction::CopyRequested {
                    side,
                    scope: CopyScope::All,
                })
            }
            (
                MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left),
                PaneHit::Body { row, x },
            ) => self.dispatch_kernel(KernelAction::PaneClick {
                side,
                row: row as usize,
                x: x as usize,
            }),
            (MouseEventKind::Down(MouseButton::Right), PaneHit::Body { row, .. }) => {
                let scroll_row = self.store.state().pane(side).scroll_row;
                self.dispatch_kernel(KernelAction::ContextMenuOpen {
                    side,
                    row: Some(scroll_row + row as usize),
                    x,
                    y,
                })
            }
            (MouseEventKind::ScrollUp | MouseEventKind::ScrollDown, PaneHit::Body { .. }) => {
                let delta = if event.kind == MouseEventKind::ScrollUp {
                    -step
                } else {
                    step
                };
                self.dispatch_kernel(KernelAction::PaneScroll {
                    side,
                    delta,
                    horizontal: event.modifiers.contains(KeyModifiers::SHIFT),
                })
            }
            (MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight, PaneHit::Body { .. }) => {
                let delta = if event.kind == MouseEventKind::ScrollLeft {
                    -step
                } else {
                    step
                };
                self.dispatch_kernel(KernelAction::PaneScroll {
                    side,
                    delta,
                    horizontal: true,
                })
            }
            _ => false,
        }
    }

    fn pane_hit(&self, x: u16, y: u16) -> Option<(BufferSide, PaneHit)> {
        BufferSide::ALL.into_iter().find_map(|side| {
            let pane = &self.layout.panes[side.index()];
            if rect_contains(pane.copy_button, x, y) {
                return Some((side, PaneHit::CopyButton));
            }
            let in_body = rect_contains(pane.text, x, y) || rect_contains(pane.gutter, x, y);
            in_body.then(|| {
                let hit = PaneHit::Body {
                    row: y - pane.text.y,
                    x: x.saturating_sub(pane.text.x),
                };
                (side, hit)
            })
        })
    }
}
