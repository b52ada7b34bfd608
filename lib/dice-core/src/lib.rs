//! Game logic for the dice guessing app, free of any UI toolkit.
//!
//! - `color` / `gradient`: banded background gradient
//! - `roll` / `guess`: dice rolls and guess evaluation
//! - `game`: the state that the UI renders after every action
//! - `faces`: loading the six die-face images

pub mod color;
pub mod faces;
pub mod game;
pub mod gradient;
pub mod guess;
pub mod roll;

pub use color::Color;
pub use faces::{FACE_COUNT, load_dice_faces};
pub use game::{Action, GameState, Mood};
pub use gradient::{Band, DEFAULT_STEPS, GradientSpec, gradient_bands};
pub use guess::{Guess, GuessOutcome, evaluate, evaluate_with, step_guess};
pub use roll::{DiceRoll, LUCKY_FACE, RollOutcome, roll_only};

use std::path::PathBuf;

pub type DiceResult<T> = Result<T, DiceError>;

#[derive(thiserror::Error, Debug)]
pub enum DiceError {
    #[error("Invalid color format: {0:?}, expected `#` followed by 6 hex digits")]
    InvalidColorFormat(String),

    #[error("Invalid gradient: {0} must be greater than 0")]
    InvalidGradient(&'static str),

    #[error("Dice image not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
