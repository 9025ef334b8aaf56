use std::sync::OnceLock;

use windows::Win32::Foundation::{BOOL, FALSE, TRUE};
use windows::Win32::System::Console::SetConsoleCtrlHandler;

use crate::listener::EventSender;

static SHUTDOWN: OnceLock<EventSender> = OnceLock::new();

unsafe extern "system" fn on_console_event(_ctrl_type: u32) -> BOOL {
    match SHUTDOWN.get() {
        Some(sender) if sender.shutdown() => TRUE,
        _ => FALSE,
    }
}

/// Shuts the listener down on Ctrl+C, Ctrl+Break and console close.
///
/// Only the first installed sender is used.
pub fn install_shutdown_handler(sender: EventSender) -> windows::core::Result<()> {
    let _ = SHUTDOWN.set(sender);
    unsafe { SetConsoleCtrlHandler(Some(on_console_event), TRUE) }
}
