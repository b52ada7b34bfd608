//! Piecewise-constant vertical gradient.
//!
//! The background is painted as a stack of horizontal bands, each filled with
//! a single color interpolated between `start` and `end`.

use crate::{Color, DiceError, DiceResult};

/// Band count used when none is configured.
pub const DEFAULT_STEPS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub width: u32,
    pub height: u32,
    pub start: Color,
    pub end: Color,
    pub steps: u32,
}

impl GradientSpec {
    pub fn new(width: u32, height: u32, start: Color, end: Color) -> Self {
        Self {
            width,
            height,
            start,
            end,
            steps: DEFAULT_STEPS,
        }
    }

    /// Builds a spec from two `#rrggbb` strings.
    ///
    /// # Errors
    /// `DiceError::InvalidColorFormat` if either string is malformed,
    /// `DiceError::InvalidGradient` if `width` or `height` is zero.
    pub fn from_hex(width: u32, height: u32, start: &str, end: &str) -> DiceResult<Self> {
        Self::new(
            width,
            height,
            Color::from_hex(start)?,
            Color::from_hex(end)?,
        )
        .validate()
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Width, height and band count must all be positive.
    ///
    /// # Errors
    /// `DiceError::InvalidGradient` naming the first zero field.
    pub fn validate(self) -> DiceResult<Self> {
        let zero = [
            ("width", self.width),
            ("height", self.height),
            ("steps", self.steps),
        ]
        .into_iter()
        .find(|(_, v)| *v == 0);

        match zero {
            Some((field, _)) => Err(DiceError::InvalidGradient(field)),
            None => Ok(self),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub y_start: f64,
    pub y_end: f64,
    pub color: Color,
}

impl Band {
    pub fn height(&self) -> f64 {
        self.y_end - self.y_start
    }
}

/// Splits `[0, height)` into `spec.steps` bands, top to bottom.
///
/// Band `i` uses `ratio = i / steps`, so the first band is exactly `start`
/// and the last one stops one step short of `end`.
pub fn gradient_bands(spec: &GradientSpec) -> Vec<Band> {
    let steps = spec.steps;
    let height = f64::from(spec.height);
    let offset = |i: u32| f64::from(i) * height / f64::from(steps);

    (0..steps)
        .map(|i| {
            let ratio = f64::from(i) / f64::from(steps);

            Band {
                y_start: offset(i),
                y_end: offset(i + 1),
                color: spec.start.lerp(spec.end, ratio),
            }
        })
        .collect()
}
