//! What the window shows, updated one action at a time.
//!
//! The UI forwards every user action to [`GameState::dispatch`] and then
//! renders the whole state, so no callback mutates widgets directly.

use crate::{DiceRoll, GuessOutcome, RollOutcome, evaluate_with};

pub const INITIAL_HEADLINE: &str = "🎲 Roll the dice!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Idle,
    Won,
    Lost,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The "Roll Dice" button.
    Roll,
    /// The "Guess" button with the current guess box text.
    Guess(String),
    /// The guess box text changed.
    ClearMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub face: DiceRoll,
    pub headline: String,
    pub message: String,
    pub mood: Mood,
    /// Set by the first roll; the headline keeps its result style from then on.
    pub rolled: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            face: DiceRoll::default(),
            headline: INITIAL_HEADLINE.to_string(),
            message: String::new(),
            mood: Mood::Idle,
            rolled: false,
        }
    }
}

impl GameState {
    pub fn dispatch(&mut self, action: Action, mut draw: impl FnMut() -> DiceRoll) {
        match action {
            Action::Roll => self.apply_roll(RollOutcome::from(draw())),
            Action::Guess(text) => self.apply_guess(evaluate_with(&text, &mut draw)),
            Action::ClearMessage => {
                self.message.clear();
                self.mood = Mood::Idle;
            }
        }
    }

    fn apply_roll(&mut self, outcome: RollOutcome) {
        log::debug!("rolled {} (lucky: {})", outcome.roll, outcome.lucky);

        self.face = outcome.roll;
        self.rolled = true;
        self.headline = outcome.headline();
        self.message = outcome.message();
        self.mood = if outcome.lucky { Mood::Won } else { Mood::Lost };
    }

    fn apply_guess(&mut self, outcome: GuessOutcome) {
        log::debug!("guess outcome: {outcome:?}");

        if let Some(roll) = outcome.roll() {
            self.face = roll;
            self.rolled = true;
        }

        if let Some(headline) = outcome.headline() {
            self.headline = headline;
        }

        self.message = outcome.message().to_string();
        self.mood = match outcome {
            GuessOutcome::Correct(_) => Mood::Won,
            GuessOutcome::Incorrect(_) => Mood::Lost,
            GuessOutcome::InvalidInput | GuessOutcome::OutOfRange => Mood::Warning,
        };
    }
}
