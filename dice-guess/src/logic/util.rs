//! Window management and URL opening.

use crate::{config, global_store, global_util, slint_generatedAppWindow::AppWindow, toast_warn};
use slint::ComponentHandle;
use std::str::FromStr;
use webbrowser::{self, Browser};

pub fn init(ui: &AppWindow) {
    global_util!(ui).on_close_window(move || {
        log::info!("quit");
        _ = slint::quit_event_loop();
    });

    let ui_weak = ui.as_weak();
    global_util!(ui).on_update_window_size(move || {
        let ui = ui_weak.unwrap();
        let preference = config::all().preference;

        let scale = ui.window().scale_factor();
        let psize = slint::PhysicalSize::from_logical(
            slint::LogicalSize {
                width: preference.win_width as f32,
                height: preference.win_height as f32,
            },
            scale,
        );
        ui.window().set_size(psize);
    });

    global_store!(ui).set_always_on_top(config::all().preference.always_on_top);

    let ui_weak = ui.as_weak();
    global_util!(ui).on_open_url(move |browser, url| {
        let ui = ui_weak.unwrap();
        let browser = pick_browser(&browser);

        log::info!("open {url} with {browser:?}");
        if let Err(e) = webbrowser::open_browser(browser, url.as_str()) {
            log::warn!("open {url} failed: {e:?}");
            toast_warn!(ui, format!("Open link failed. Reason: {e}"));
        }
    });
}

/// Resolves a browser name from the config, falling back to the system default
/// when the name is unknown or that browser isn't installed.
fn pick_browser(name: &str) -> Browser {
    let browser = Browser::from_str(&name.to_lowercase()).unwrap_or_default();

    if browser.exists() {
        browser
    } else {
        Browser::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_browser_unknown_name() {
        assert_eq!(pick_browser("no-such-browser"), Browser::Default);
        assert_eq!(pick_browser("default"), Browser::Default);
        assert_eq!(pick_browser(""), Browser::Default);
    }
}
