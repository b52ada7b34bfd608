//! Game callbacks.
//!
//! Each callback turns a user action into an [`Action`], dispatches it on the
//! shared [`GameState`] and renders the result into the `Store` global.

use crate::{
    global_logic, global_store,
    slint_generatedAppWindow::{AppWindow, GameMood},
};
use dice_core::{Action, DiceRoll, GameState, Mood, step_guess};
use rand::rngs::ThreadRng;
use slint::{ComponentHandle, SharedString};
use std::{cell::RefCell, rc::Rc};

#[derive(Default)]
struct Game {
    state: GameState,
    rng: ThreadRng,
}

impl Game {
    fn dispatch(&mut self, action: Action) -> &GameState {
        let rng = &mut self.rng;
        self.state.dispatch(action, || DiceRoll::draw(&mut *rng));
        &self.state
    }
}

pub fn init(ui: &AppWindow) {
    let game = Rc::new(RefCell::new(Game::default()));
    render(ui, &game.borrow().state);

    on_action(ui, &game, |logic, handler| {
        logic.on_roll_dice(move || handler(Action::Roll))
    });

    on_action(ui, &game, |logic, handler| {
        logic.on_check_guess(move |text| handler(Action::Guess(text.into())))
    });

    on_action(ui, &game, |logic, handler| {
        logic.on_guess_edited(move |_| handler(Action::ClearMessage))
    });

    global_logic!(ui).on_step_guess(move |text, delta| step_guess(&text, delta).into());
}

/// Connects one `Logic` callback, given a handler that dispatches and renders.
fn on_action(
    ui: &AppWindow,
    game: &Rc<RefCell<Game>>,
    connect: impl FnOnce(crate::Logic<'_>, Box<dyn Fn(Action)>),
) {
    let ui_weak = ui.as_weak();
    let game = game.clone();

    let handler = Box::new(move |action: Action| {
        let ui = ui_weak.unwrap();
        let mut game = game.borrow_mut();
        render(&ui, game.dispatch(action));
    });

    connect(global_logic!(ui), handler);
}

fn render(ui: &AppWindow, state: &GameState) {
    let store = global_store!(ui);

    store.set_dice_face(i32::from(state.face.value()));
    store.set_headline(SharedString::from(state.headline.as_str()));
    store.set_message(SharedString::from(state.message.as_str()));
    store.set_mood(state.mood.into());
    store.set_rolled(state.rolled);
}

impl From<Mood> for GameMood {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Idle => GameMood::Idle,
            Mood::Won => GameMood::Won,
            Mood::Lost => GameMood::Lost,
            Mood::Warning => GameMood::Warning,
        }
    }
}
