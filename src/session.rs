//! Session loop shared by every rendering surface.
//!
//! A session plays rounds back to back. Each round gets a fresh word and a
//! fresh [`Presenter`]; the surface only ever sees [`Screen`] values and
//! rejection messages.

use crate::presenter::{Presenter, Screen, Update};
use crate::wordbank::choose_word;
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// A rendering surface: the CLI and the TUI both implement this.
pub trait GameInterface {
    /// Redraw everything and clear the input field.
    fn display_screen(&mut self, screen: &Screen);
    /// Show a rejection message without touching anything else.
    fn display_rejection(&mut self, message: &str);
    /// Wait for the next user action. `None` means nothing to act on yet.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_exit_message(&mut self);
}

pub fn game_loop<I: GameInterface>(words: &[String], guess_budget: u32, interface: &mut I) {
    game_loop_with_rng(words, guess_budget, interface, &mut rand::rng());
}

pub fn game_loop_with_rng<I: GameInterface, R: Rng + ?Sized>(
    words: &[String],
    guess_budget: u32,
    interface: &mut I,
    rng: &mut R,
) {
    let Some(mut presenter) = new_round(words, guess_budget, rng) else {
        log::error!("Word bank is empty, nothing to play");
        return;
    };
    interface.display_screen(&presenter.screen());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - Action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                if let Some(next) = new_round(words, guess_budget, rng) {
                    presenter = next;
                }
                interface.display_screen(&presenter.screen());
            }
            UserAction::Guess(raw) => match presenter.submit(&raw) {
                Update::Rejected(message) => interface.display_rejection(&message),
                Update::Refresh(screen) => {
                    if let Some(banner) = &screen.banner {
                        info_log!("Round over: {}", banner);
                    }
                    interface.display_screen(&screen);
                }
            },
        }
    }
}

fn new_round<R: Rng + ?Sized>(words: &[String], guess_budget: u32, rng: &mut R) -> Option<Presenter> {
    let word = choose_word(words, rng)?;
    info_log!("New round: {} letters, {} guesses", word.len(), guess_budget);
    Some(Presenter::new(word, guess_budget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Status;

    /// Scripted surface that records what it was asked to show.
    struct ScriptedInterface {
        actions: std::vec::IntoIter<Option<UserAction>>,
        screens: Vec<Screen>,
        rejections: Vec<String>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into_iter(),
                screens: Vec::new(),
                rejections: Vec::new(),
                exited: false,
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_screen(&mut self, screen: &Screen) {
            self.screens.push(screen.clone());
        }

        fn display_rejection(&mut self, message: &str) {
            self.rejections.push(message.to_string());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.next().unwrap_or(Some(UserAction::Exit))
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn guess(s: &str) -> Option<UserAction> {
        Some(UserAction::Guess(s.to_string()))
    }

    #[test]
    fn test_immediate_exit() {
        let words = vec!["CAT".to_string()];
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&words, 6, &mut interface);

        assert!(interface.exited);
        assert_eq!(interface.screens.len(), 1);
        assert_eq!(interface.screens[0].progress, "Progress: _ _ _");
    }

    #[test]
    fn test_win_round() {
        let words = vec!["CAT".to_string()];
        let mut interface =
            ScriptedInterface::new(vec![guess("a"), None, guess("z"), guess("cat")]);
        game_loop(&words, 6, &mut interface);

        let last = interface.screens.last().unwrap();
        assert_eq!(last.status, Status::Won);
        assert!(!last.accepting_guesses);
        assert_eq!(interface.screens.len(), 4);
        assert!(interface.rejections.is_empty());
    }

    #[test]
    fn test_rejections_do_not_refresh() {
        let words = vec!["DOG".to_string()];
        let mut interface = ScriptedInterface::new(vec![guess(""), guess("X"), guess("D")]);
        game_loop(&words, 1, &mut interface);

        assert_eq!(interface.rejections.len(), 2);
        assert!(interface.rejections[0].contains("letter or a word"));
        assert!(interface.rejections[1].contains("game is over"));
        // Initial screen plus the losing guess
        assert_eq!(interface.screens.len(), 2);
        assert_eq!(interface.screens[1].status, Status::Lost);
    }

    #[test]
    fn test_new_game_resets_round() {
        let words = vec!["DOG".to_string()];
        let mut interface = ScriptedInterface::new(vec![
            guess("X"),
            Some(UserAction::NewGame),
            guess("D"),
        ]);
        game_loop(&words, 1, &mut interface);

        assert!(interface.rejections.is_empty());
        let last = interface.screens.last().unwrap();
        assert_eq!(last.progress, "Progress: D _ _");
        assert_eq!(last.status, Status::InProgress);
    }

    #[test]
    fn test_empty_wordbank_returns() {
        let mut interface = ScriptedInterface::new(vec![]);
        game_loop(&[], 6, &mut interface);
        assert!(interface.screens.is_empty());
        assert!(!interface.exited);
    }
}
