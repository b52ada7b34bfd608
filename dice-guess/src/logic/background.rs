//! Gradient background.
//!
//! The bands are computed once for the configured window size; the UI scales
//! them to the actual window height.

use crate::{
    config, global_store,
    slint_generatedAppWindow::{AppWindow, Band as UIBand},
};
use anyhow::{Context, Result};
use dice_core::{Band, Color, GradientSpec, gradient_bands};
use slint::{ComponentHandle, ModelRc, VecModel};

pub fn init(ui: &AppWindow) -> Result<()> {
    let conf = config::all();

    let spec = GradientSpec::from_hex(
        conf.preference.win_width,
        conf.preference.win_height,
        &conf.background.start_color,
        &conf.background.end_color,
    )
    .and_then(|spec| spec.with_steps(conf.background.steps).validate())
    .with_context(|| "invalid background in config")?;

    let bands = gradient_bands(&spec)
        .into_iter()
        .map(UIBand::from)
        .collect::<Vec<_>>();

    log::debug!(
        "background {} -> {}, {} bands",
        spec.start,
        spec.end,
        bands.len()
    );

    global_store!(ui).set_background_height(spec.height as f32);
    global_store!(ui).set_accent_color(to_slint_color(spec.start));
    global_store!(ui).set_background_bands(ModelRc::new(VecModel::from(bands)));

    Ok(())
}

fn to_slint_color(color: Color) -> slint::Color {
    slint::Color::from_rgb_u8(color.r, color.g, color.b)
}

impl From<Band> for UIBand {
    fn from(band: Band) -> Self {
        UIBand {
            y_start: band.y_start as f32,
            y_end: band.y_end as f32,
            color: to_slint_color(band.color),
        }
    }
}
