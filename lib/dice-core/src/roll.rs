use rand::Rng;
use std::fmt;

/// Face that the plain "Roll Dice" button celebrates, whatever the guess is.
pub const LUCKY_FACE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceRoll(u8);

impl DiceRoll {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Returns `None` outside `1..=6`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN..=Self::MAX))
    }

    /// Draws from the thread-local generator.
    pub fn roll() -> Self {
        Self::draw(&mut rand::rng())
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position in a list of six face images.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl Default for DiceRoll {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub roll: DiceRoll,
    pub lucky: bool,
}

impl From<DiceRoll> for RollOutcome {
    fn from(roll: DiceRoll) -> Self {
        Self {
            roll,
            lucky: roll.value() == LUCKY_FACE,
        }
    }
}

impl RollOutcome {
    pub fn headline(&self) -> String {
        format!("🎲 You rolled: {}", self.roll)
    }

    pub fn message(&self) -> String {
        if self.lucky {
            format!(
                "🎉 Congratulations! You rolled a: {} Your guess was correct!",
                self.roll
            )
        } else {
            format!("❌ Wrong guess! Try again. {}", self.roll)
        }
    }
}

/// Rolls without comparing against any guess.
pub fn roll_only() -> RollOutcome {
    DiceRoll::roll().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new() {
        assert!(DiceRoll::new(0).is_none());
        assert!(DiceRoll::new(7).is_none());
        assert_eq!(DiceRoll::new(6).map(DiceRoll::value), Some(6));
        assert_eq!(DiceRoll::new(1).map(DiceRoll::index), Some(0));
    }

    #[test]
    fn test_draw_covers_all_faces() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let roll = DiceRoll::draw(&mut rng);
            assert!((1..=6).contains(&roll.value()));
            seen[roll.index()] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_roll_only_lucky() {
        for value in 1..=6 {
            let outcome = RollOutcome::from(DiceRoll::new(value).unwrap());
            assert_eq!(outcome.lucky, value == LUCKY_FACE);
        }

        let outcome = roll_only();
        assert_eq!(outcome.lucky, outcome.roll.value() == 5);
    }

    #[test]
    fn test_roll_messages() {
        let five = RollOutcome::from(DiceRoll::new(5).unwrap());
        assert_eq!(five.headline(), "🎲 You rolled: 5");
        assert_eq!(
            five.message(),
            "🎉 Congratulations! You rolled a: 5 Your guess was correct!"
        );

        let two = RollOutcome::from(DiceRoll::new(2).unwrap());
        assert_eq!(two.message(), "❌ Wrong guess! Try again. 2");
    }
}
