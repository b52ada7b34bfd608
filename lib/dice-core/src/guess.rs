//! Guess parsing and evaluation.

use crate::DiceRoll;
use std::num::IntErrorKind;

/// A player's guess, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    InvalidInput,
    OutOfRange,
    Correct(DiceRoll),
    Incorrect(DiceRoll),
}

impl Guess {
    /// Parses the text of the guess box.
    ///
    /// Numeric text too large for `i64` still counts as a number, so it is
    /// reported as `OutOfRange` rather than `InvalidInput`.
    pub fn parse(input: &str) -> Result<Self, GuessOutcome> {
        let value = match input.trim().parse::<i64>() {
            Ok(v) => v,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    return Err(GuessOutcome::OutOfRange);
                }
                _ => return Err(GuessOutcome::InvalidInput),
            },
        };

        u8::try_from(value)
            .ok()
            .and_then(DiceRoll::new)
            .map(|roll| Self(roll.value()))
            .ok_or(GuessOutcome::OutOfRange)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn check(self, roll: DiceRoll) -> GuessOutcome {
        if self.0 == roll.value() {
            GuessOutcome::Correct(roll)
        } else {
            GuessOutcome::Incorrect(roll)
        }
    }
}

impl GuessOutcome {
    /// The roll, if one was drawn.
    pub fn roll(&self) -> Option<DiceRoll> {
        match self {
            Self::Correct(roll) | Self::Incorrect(roll) => Some(*roll),
            Self::InvalidInput | Self::OutOfRange => None,
        }
    }

    /// Headline text; rejected guesses leave the headline alone.
    pub fn headline(&self) -> Option<String> {
        self.roll().map(|roll| format!("🎲 The dice rolled: {roll}"))
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidInput => "❌ Please enter a valid number (1-6).",
            Self::OutOfRange => "❌ Please enter a number between 1 and 6.",
            Self::Correct(_) => "🎉 Correct! You guessed it right! 🎉",
            Self::Incorrect(_) => "❌ Wrong guess! Try again.",
        }
    }
}

/// Evaluates the guess against a fresh thread-local roll.
pub fn evaluate(input: &str) -> GuessOutcome {
    evaluate_with(input, DiceRoll::roll)
}

/// Same as [`evaluate`] with the roll supplied by `draw`.
///
/// `draw` is only called once the guess has been accepted.
pub fn evaluate_with(input: &str, draw: impl FnOnce() -> DiceRoll) -> GuessOutcome {
    match Guess::parse(input) {
        Ok(guess) => guess.check(draw()),
        Err(rejected) => rejected,
    }
}

/// Moves the guess box value up or down, clamped to `1..=6`.
pub fn step_guess(input: &str, delta: i32) -> String {
    let current = Guess::parse(input)
        .map(|g| i64::from(g.value()))
        .unwrap_or(i64::from(DiceRoll::MIN) - i64::from(delta.signum()));

    (current + i64::from(delta))
        .clamp(i64::from(DiceRoll::MIN), i64::from(DiceRoll::MAX))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(value: u8) -> DiceRoll {
        DiceRoll::new(value).unwrap()
    }

    #[test]
    fn test_correct_iff_equal() {
        for g in 1..=6u8 {
            for r in 1..=6u8 {
                let outcome = evaluate_with(&g.to_string(), || face(r));
                if g == r {
                    assert_eq!(outcome, GuessOutcome::Correct(face(r)));
                } else {
                    assert_eq!(outcome, GuessOutcome::Incorrect(face(r)));
                }
            }
        }
    }

    #[test]
    fn test_forced_roll() {
        assert_eq!(evaluate_with("3", || face(3)), GuessOutcome::Correct(face(3)));
        assert_eq!(evaluate("abc"), GuessOutcome::InvalidInput);
        assert_eq!(evaluate("9"), GuessOutcome::OutOfRange);
    }

    #[test]
    fn test_invalid_input() {
        for text in ["", " ", "abc", "3.0", "three", "1e1", "--2", "4 4", "0x3", "1_0", "٣"] {
            assert_eq!(evaluate(text), GuessOutcome::InvalidInput, "{text:?}");
        }
    }

    #[test]
    fn test_out_of_range() {
        for text in ["0", "7", "-1", "-6", "256", "99999999999999999999999", "-99999999999999999999999"] {
            assert_eq!(evaluate(text), GuessOutcome::OutOfRange, "{text:?}");
        }
    }

    #[test]
    fn test_whitespace_and_sign() {
        assert_eq!(evaluate_with(" 4\n", || face(4)), GuessOutcome::Correct(face(4)));
        assert_eq!(evaluate_with("+2", || face(5)), GuessOutcome::Incorrect(face(5)));
    }

    #[test]
    fn test_rejected_guess_draws_nothing() {
        for text in ["abc", "0", "12"] {
            let outcome = evaluate_with(text, || panic!("no roll expected for {text:?}"));
            assert!(outcome.roll().is_none());
            assert!(outcome.headline().is_none());
        }
    }

    #[test]
    fn test_evaluate_draws_valid_roll() {
        for _ in 0..100 {
            let roll = evaluate("2").roll().unwrap();
            assert!((1..=6).contains(&roll.value()));
        }
    }

    #[test]
    fn test_messages() {
        let correct = GuessOutcome::Correct(face(6));
        assert_eq!(correct.headline().as_deref(), Some("🎲 The dice rolled: 6"));
        assert_eq!(correct.message(), "🎉 Correct! You guessed it right! 🎉");
        assert_eq!(
            GuessOutcome::OutOfRange.message(),
            "❌ Please enter a number between 1 and 6."
        );
    }

    #[test]
    fn test_step_guess() {
        assert_eq!(step_guess("1", 1), "2");
        assert_eq!(step_guess("6", 1), "6");
        assert_eq!(step_guess("1", -1), "1");
        assert_eq!(step_guess("4", -1), "3");
        assert_eq!(step_guess("abc", 1), "1");
        assert_eq!(step_guess("abc", -1), "1");
        assert_eq!(step_guess("42", -1), "1");
    }
}
