//! Round state for a single game of Hangman.
//!
//! `GameState` is the only thing allowed to change the guess history or the
//! remaining-guess counter. Everything else reads it through the display
//! methods below.

use thiserror::Error;

pub const DEFAULT_GUESS_BUDGET: u32 = 6;
pub const PLACEHOLDER: char = '_';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a single accepted guess did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    Correct,
    Incorrect,
    AlreadyGuessed,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    pub kind: OutcomeKind,
    pub status: Status,
    pub progress: String,
    pub remaining_guesses: u32,
    /// Normalized guess, as it was compared against the secret word.
    pub guess: String,
}

/// Reasons a guess is refused. Neither one changes the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a letter or a word to guess.")]
    EmptyInput,

    #[error("The game is over. Start a new game to keep playing.")]
    GameAlreadyOver,
}

#[derive(Clone, Debug)]
pub struct GameState {
    secret_word: Vec<char>,
    guessed_letters: Vec<char>,
    remaining_guesses: u32,
    guess_budget: u32,
}

impl GameState {
    /// Starts a round. The word is trimmed and uppercased; callers are expected
    /// to have validated it (see `wordbank::is_valid_word`).
    ///
    /// The word must not be blank and the budget must be at least 1: a blank
    /// word counts as already won and a zero budget as already lost.
    #[must_use]
    pub fn new(secret_word: &str, guess_budget: u32) -> Self {
        let secret_word: Vec<char> = secret_word.trim().to_uppercase().chars().collect();
        debug_assert!(!secret_word.is_empty(), "secret word must not be blank");
        debug_assert!(guess_budget >= 1, "guess budget must be at least 1");
        Self {
            secret_word,
            guessed_letters: Vec::new(),
            remaining_guesses: guess_budget,
            guess_budget,
        }
    }

    #[must_use]
    pub fn secret_word(&self) -> String {
        self.secret_word.iter().collect()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret_word.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    #[must_use]
    pub fn guess_budget(&self) -> u32 {
        self.guess_budget
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> u32 {
        self.guess_budget - self.remaining_guesses
    }

    /// Every letter guessed so far, in the order it was guessed.
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self
            .secret_word
            .iter()
            .all(|c| self.guessed_letters.contains(c))
        {
            Status::Won
        } else if self.remaining_guesses == 0 {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    pub fn apply_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::GameAlreadyOver);
        }

        let guess = input.trim().to_uppercase();
        let mut chars = guess.chars();
        let kind = match (chars.next(), chars.next()) {
            (None, _) => return Err(GuessError::EmptyInput),
            (Some(letter), None) => self.guess_letter(letter),
            (Some(_), Some(_)) => self.guess_word(&guess),
        };

        let status = self.status();
        let kind = match status {
            Status::Won => OutcomeKind::Won,
            Status::Lost => OutcomeKind::Lost,
            Status::InProgress => kind,
        };

        Ok(GuessOutcome {
            kind,
            status,
            progress: self.progress_display(),
            remaining_guesses: self.remaining_guesses,
            guess,
        })
    }

    fn guess_letter(&mut self, letter: char) -> OutcomeKind {
        if self.guessed_letters.contains(&letter) {
            return OutcomeKind::AlreadyGuessed;
        }
        self.guessed_letters.push(letter);
        if self.secret_word.contains(&letter) {
            OutcomeKind::Correct
        } else {
            self.use_guess();
            OutcomeKind::Incorrect
        }
    }

    fn guess_word(&mut self, guess: &str) -> OutcomeKind {
        if guess.chars().eq(self.secret_word.iter().copied()) {
            for &letter in &self.secret_word {
                if !self.guessed_letters.contains(&letter) {
                    self.guessed_letters.push(letter);
                }
            }
            OutcomeKind::Correct
        } else {
            // No partial credit for near misses.
            self.use_guess();
            OutcomeKind::Incorrect
        }
    }

    fn use_guess(&mut self) {
        self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
    }

    /// The secret word with unguessed positions masked, e.g. `_A_`.
    #[must_use]
    pub fn progress_display(&self) -> String {
        self.secret_word
            .iter()
            .map(|c| {
                if self.guessed_letters.contains(c) {
                    *c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Guessed letters that are not in the word, in guess order.
    #[must_use]
    pub fn wrong_letters_display(&self) -> String {
        self.guessed_letters
            .iter()
            .filter(|c| !self.secret_word.contains(c))
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
