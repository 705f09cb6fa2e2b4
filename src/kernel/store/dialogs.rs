use crate::kernel::state::{ConfirmDialogState, PendingAction};
use crate::kernel::{Action, Effect};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_dialog_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ConfirmDialogAccept => {
                if !self.state.ui.confirm_dialog.visible {
                    return DispatchResult::unchanged();
                }
                let pending = std::mem::take(&mut self.state.ui.confirm_dialog).on_confirm;
                match pending {
                    Some(PendingAction::Commit { path }) => {
                        DispatchResult::effect(Effect::CommitFile(path), true)
                    }
                    None => DispatchResult::changed(true),
                }
            }
            Action::ConfirmDialogCancel => {
                if !self.state.ui.confirm_dialog.visible {
                    return DispatchResult::unchanged();
                }
                self.state.ui.confirm_dialog = ConfirmDialogState::default();
                DispatchResult::changed(true)
            }
            Action::Notify(notification) => {
                if notification.is_error() {
                    tracing::warn!(message = %notification.message, "error reported");
                }
                DispatchResult::changed(self.notify(notification))
            }
            Action::DismissNotification => {
                DispatchResult::changed(self.state.ui.notification.take().is_some())
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
