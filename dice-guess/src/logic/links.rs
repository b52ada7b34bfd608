use crate::{config, global_util, logic_cb, slint_generatedAppWindow::AppWindow};
use slint::ComponentHandle;

pub fn init(ui: &AppWindow) {
    logic_cb!(open_dice_games, ui);
}

fn open_dice_games(ui: &AppWindow) {
    let link = config::all().link;
    global_util!(ui).invoke_open_url(link.browser.into(), link.url.into());
}
