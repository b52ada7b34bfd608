//! Footer with the application name and version.

use crate::slint_generatedAppWindow::{AboutSetting, AppWindow};
use crate::{config, version};
use slint::ComponentHandle;

pub fn init(ui: &AppWindow) {
    ui.global::<AboutSetting>()
        .set_app_name(config::all().app_name.into());

    ui.global::<AboutSetting>()
        .set_version(version::version_text().into());
}
