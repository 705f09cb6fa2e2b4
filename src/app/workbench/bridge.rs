use super::Workbench;
use crate::kernel::{Action as KernelAction, DualBuffers, Effect as KernelEffect, Notification};

impl Workbench {
    /// Dispatch into the store and run whatever effects come back. Returns
    /// whether anything visible changed.
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    /// Effects run synchronously; their outcome is fed back as an action.
    fn run_effect(&mut self, effect: KernelEffect) -> bool {
        let follow_up = match effect {
            KernelEffect::LoadFile(path) => match DualBuffers::load(self.files.as_ref(), &path) {
                Ok(buffers) => KernelAction::FileOpened { path, buffers },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "open failed");
                    KernelAction::Notify(Notification::error(format!(
                        "Failed to open file: {e}"
                    )))
                }
            },
            KernelEffect::CommitFile(path) => {
                // Commit a copy so a failed write leaves the store untouched.
                let mut buffers = self.store.state().buffers.clone();
                match buffers.commit(self.files.as_ref(), &path) {
                    Ok(()) => KernelAction::Committed { path, buffers },
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "commit failed");
                        KernelAction::Notify(Notification::error(format!(
                            "Failed to apply changes: {e}"
                        )))
                    }
                }
            }
            KernelEffect::SetClipboardText { text, success } => {
                match self.clipboard.set_text(&text) {
                    Ok(()) => {
                        tracing::debug!(bytes = text.len(), "clipboard updated");
                        KernelAction::Notify(success)
                    }
                    Err(e) => KernelAction::Notify(Notification::error(format!(
                        "Failed to copy to clipboard: {e}"
                    ))),
                }
            }
        };
        self.dispatch_kernel(follow_up)
    }
}
