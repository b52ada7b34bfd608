//! UI logic and callback management module
//!
//! Contains macros and initialization functions for connecting Slint UI callbacks
//! to Rust functions. Provides global access to UI components and utilities.

use crate::slint_generatedAppWindow::AppWindow;
use anyhow::Result;

mod about;
mod background;
mod dice;
mod game;
mod links;
mod toast;
mod util;

/// Macro to access the global Store component
///
/// # Parameters
/// - `$ui`: AppWindow instance
#[macro_export]
macro_rules! global_store {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Store>()
    };
}

/// Macro to access the global Logic component
///
/// # Parameters
/// - `$ui`: AppWindow instance
#[macro_export]
macro_rules! global_logic {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Logic>()
    };
}

/// Macro to access the global Util component
///
/// # Parameters
/// - `$ui`: AppWindow instance
#[macro_export]
macro_rules! global_util {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Util>()
    };
}

/// Macro to connect Slint callbacks to Rust functions
///
/// Creates a callback connection holding only a weak reference to the window.
///
/// # Parameters
/// - `$callback_name`: Name of the callback function
/// - `$ui`: AppWindow instance
/// - `$($arg:ident),*`: Callback arguments
#[macro_export]
macro_rules! logic_cb {
    ($callback_name:ident, $ui:expr, $($arg:ident),*) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move |$($arg),*| {
                        $callback_name(&ui_weak.unwrap(), $($arg),*)
                    });
            }
        }}
    };
    ($callback_name:ident, $ui:expr) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move || {
                        $callback_name(&ui_weak.unwrap())
                    });
            }
        }}
    };
}

/// Initializes all UI logic modules
///
/// # Errors
/// Fails when the configured background colors or dice images can't be used.
pub fn init(ui: &AppWindow) -> Result<()> {
    util::init(ui);
    toast::init(ui);
    about::init(ui);
    links::init(ui);

    background::init(ui)?;
    dice::init(ui)?;
    game::init(ui);

    Ok(())
}
