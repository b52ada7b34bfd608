use crate::{DiceError, DiceResult};
use image::{RgbaImage, imageops::FilterType};
use std::path::{Path, PathBuf};

pub const FACE_COUNT: usize = 6;

/// Path of the image for `face` (1-based), e.g. `dir/dice3.jpg`.
pub fn face_path(dir: impl AsRef<Path>, ext: &str, face: usize) -> PathBuf {
    dir.as_ref().join(format!("dice{face}.{ext}"))
}

/// Loads `dice1.<ext>` .. `dice6.<ext>` from `dir`, each resized to `size x size`.
///
/// # Errors
/// `DiceError::FileNotFound` for the first missing file, `DiceError::Image`
/// if a file cannot be decoded.
pub fn load_dice_faces(dir: impl AsRef<Path>, ext: &str, size: u32) -> DiceResult<Vec<RgbaImage>> {
    let dir = dir.as_ref();

    (1..=FACE_COUNT)
        .map(|face| {
            let path = face_path(dir, ext, face);
            if !path.is_file() {
                return Err(DiceError::FileNotFound(path));
            }

            let img = image::open(&path)?.to_rgba8();
            log::debug!(
                "load {} ({}x{})",
                path.display(),
                img.width(),
                img.height()
            );

            Ok(image::imageops::resize(&img, size, size, FilterType::Lanczos3))
        })
        .collect()
}
