//! Toast notification module
//!
//! Shows a short status message over the window and hides it after a timeout.

use crate::{
    global_util,
    slint_generatedAppWindow::{AppWindow, ToastSetting},
};
use slint::{ComponentHandle, Timer, TimerMode};

/// Macro to show warning toast notification
///
/// # Parameters
/// - `$ui`: AppWindow instance
/// - `$msg`: Warning message
#[macro_export]
macro_rules! toast_warn {
    ($ui:expr, $msg:expr) => {
        $ui.global::<$crate::slint_generatedAppWindow::Util>()
            .invoke_show_toast(
                slint::format!("{}", $msg),
                $crate::slint_generatedAppWindow::ToastStatus::Warning,
            )
    };
}

/// Seconds a toast stays visible; longer messages stay longer.
fn timeout_secs(msg: &str) -> u64 {
    if msg.chars().count() > 20 { 5 } else { 2 }
}

pub fn init(ui: &AppWindow) {
    let timer = Timer::default();
    let ui_weak = ui.as_weak();
    global_util!(ui).on_show_toast(move |msg, status| {
        let ui = ui_weak.unwrap();

        if timer.running() {
            timer.stop();
        }

        let interval = timeout_secs(&msg);

        ui.global::<ToastSetting>().set_is_timeout(false);
        ui.global::<ToastSetting>().invoke_set(msg, status);

        timer.start(
            TimerMode::SingleShot,
            std::time::Duration::from_secs(interval),
            move || {
                ui.global::<ToastSetting>().set_is_timeout(true);
            },
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_secs() {
        assert_eq!(timeout_secs("Open link failed"), 2);
        assert_eq!(timeout_secs("Open link failed. Reason: no browser"), 5);
        assert_eq!(timeout_secs("🎲🎲🎲🎲🎲🎲🎲🎲🎲🎲"), 2);
    }
}
