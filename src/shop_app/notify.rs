// shop_app/notify.rs - Alerts and confirmations
//
// The screens never show dialogs themselves; they hand a Notice to a
// Notifier and, for destructive actions, ask it to confirm.

use tracing::info;

use crate::shop_app::model::Notice;

pub trait Notifier {
    fn notify(&self, notice: &Notice);

    /// Ask the user to accept `notice`. `true` means the destructive choice was picked.
    fn confirm(&self, notice: &Notice) -> bool;
}

/// Writes notices to the log and answers confirmations with a fixed choice
#[derive(Clone, Copy, Debug)]
pub struct LogNotifier {
    pub auto_confirm: bool,
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self { auto_confirm: true }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        info!("{}", notice);
    }

    fn confirm(&self, notice: &Notice) -> bool {
        info!("{} -> {}", notice, if self.auto_confirm { "Eliminar" } else { "Cancelar" });
        self.auto_confirm
    }
}
