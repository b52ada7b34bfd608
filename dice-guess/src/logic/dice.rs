//! Die face images.
//!
//! With `dice.image_dir` set, all six images must load or startup fails.
//! Otherwise the UI draws the face with pips.

use crate::{config, global_store, slint_generatedAppWindow::AppWindow};
use anyhow::{Context, Result};
use dice_core::load_dice_faces;
use image::RgbaImage;
use slint::{ComponentHandle, Image, ModelRc, Rgba8Pixel, SharedPixelBuffer, VecModel};

pub fn init(ui: &AppWindow) -> Result<()> {
    let dice = config::all().dice;

    if dice.image_dir.trim().is_empty() {
        log::info!("no dice image directory configured, drawing pips");
        global_store!(ui).set_use_dice_images(false);
        return Ok(());
    }

    let faces = load_dice_faces(&dice.image_dir, &dice.image_ext, dice.image_size)
        .with_context(|| format!("load dice images from {} failed", dice.image_dir))?;

    log::info!("loaded {} dice images from {}", faces.len(), dice.image_dir);

    let images = faces.iter().map(to_slint_image).collect::<Vec<_>>();
    global_store!(ui).set_dice_images(ModelRc::new(VecModel::from(images)));
    global_store!(ui).set_use_dice_images(true);

    Ok(())
}

fn to_slint_image(face: &RgbaImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(face.as_raw(), face.width(), face.height());
    Image::from_rgba8(buffer)
}
