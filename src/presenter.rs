//! Presentation adapter between a rendering surface and [`GameState`].
//!
//! The surface hands raw input to [`Presenter::submit`] and renders the
//! [`Update`] it gets back. It never reads or mutates the game state itself.

use crate::debug_log;
use crate::game_state::{GameState, GuessOutcome, OutcomeKind, Status};

/// Everything a surface needs to draw one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub progress: String,
    pub letter_count: String,
    pub remaining: String,
    pub wrong_letters: String,
    pub message: String,
    /// End-of-round announcement, set once the round is won or lost.
    pub banner: Option<String>,
    pub status: Status,
    pub accepting_guesses: bool,
    pub wrong_guesses: u32,
    pub guess_budget: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// Input was refused; show the message and leave everything else alone.
    Rejected(String),
    /// Input was taken; clear the input field and redraw.
    Refresh(Screen),
}

pub struct Presenter {
    game: GameState,
}

impl Presenter {
    #[must_use]
    pub fn new(secret_word: &str, guess_budget: u32) -> Self {
        Self {
            game: GameState::new(secret_word, guess_budget),
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.game.status()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.build_screen(String::new())
    }

    pub fn submit(&mut self, raw: &str) -> Update {
        match self.game.apply_guess(raw) {
            Ok(outcome) => {
                debug_log!(
                    "Guess '{}' -> {:?}, {} remaining",
                    outcome.guess,
                    outcome.kind,
                    outcome.remaining_guesses
                );
                let message = outcome_message(&outcome);
                Update::Refresh(self.build_screen(message))
            }
            Err(e) => {
                debug_log!("Guess {:?} rejected: {:?}", raw, e);
                Update::Rejected(e.to_string())
            }
        }
    }

    fn build_screen(&self, message: String) -> Screen {
        let status = self.game.status();
        Screen {
            progress: format!("Progress: {}", spaced(&self.game.progress_display())),
            letter_count: format!("Your word has {} letters", self.game.word_length()),
            remaining: remaining_text(self.game.remaining_guesses()),
            wrong_letters: self.game.wrong_letters_display(),
            message,
            banner: self.banner(status),
            status,
            accepting_guesses: !status.is_over(),
            wrong_guesses: self.game.wrong_guess_count(),
            guess_budget: self.game.guess_budget(),
        }
    }

    fn banner(&self, status: Status) -> Option<String> {
        match status {
            Status::InProgress => None,
            Status::Won => Some(format!("You win! The word was {}.", self.game.secret_word())),
            Status::Lost => Some(format!(
                "Out of guesses! The word was {}.",
                self.game.secret_word()
            )),
        }
    }
}

fn outcome_message(outcome: &GuessOutcome) -> String {
    let is_word = outcome.guess.chars().count() > 1;
    match outcome.kind {
        OutcomeKind::Correct => "Good guess!".to_string(),
        OutcomeKind::Incorrect if is_word => "Nope, that's not the word.".to_string(),
        OutcomeKind::Incorrect => "Nope, not in the word.".to_string(),
        OutcomeKind::AlreadyGuessed => format!("You already guessed '{}'.", outcome.guess),
        // The banner carries the news.
        OutcomeKind::Won | OutcomeKind::Lost => String::new(),
    }
}

fn remaining_text(remaining: u32) -> String {
    if remaining == 1 {
        "1 guess remaining!".to_string()
    } else {
        format!("{remaining} guesses remaining!")
    }
}

fn spaced(progress: &str) -> String {
    progress
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
