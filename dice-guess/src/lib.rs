//! Dice Rolling Game
//!
//! A desktop guessing game built with the Slint framework.
//!
//! # Architecture
//! - `desktop_main`: entry point used by the `dice-guess` binary
//! - Global configuration management (`config`)
//! - UI logic initialization and callback handling (`logic`)
//! - Game rules live in the `dice-core` crate

slint::include_modules!();

#[macro_use]
extern crate derivative;

mod config;
mod logic;
mod version;

use anyhow::{Context, Result};

/// Initializes the logger.
///
/// Every line carries a local timestamp, the level, the source file name and
/// line number. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Performs initialization tasks before UI creation.
///
/// # Tasks
/// - Initializes logger
/// - Loads configuration
/// - Sets XDG app ID on Linux
fn ui_before() -> Result<()> {
    init_logger();
    config::init()?;

    #[cfg(target_os = "linux")]
    {
        _ = slint::set_xdg_app_id("dice-guess".to_string());
    }

    Ok(())
}

/// Performs initialization tasks after UI creation.
///
/// Fails when the background colors or the dice images from the
/// configuration cannot be used.
fn ui_after(ui: &AppWindow) -> Result<()> {
    logic::init(ui)
}

/// Main entry point for desktop applications.
///
/// # Tasks
/// - Performs pre-UI initialization
/// - Creates the application window
/// - Initializes UI logic
/// - Applies the configured window size
/// - Runs the event loop
pub fn desktop_main() -> Result<()> {
    ui_before()?;
    log::debug!("start...");

    let ui = AppWindow::new().with_context(|| "create window failed")?;
    ui_after(&ui)?;

    global_util!(ui).invoke_update_window_size();

    ui.run().with_context(|| "run event loop failed")?;

    log::debug!("exit...");
    Ok(())
}
