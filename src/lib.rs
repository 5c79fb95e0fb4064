// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod game_state;
pub mod logging;
pub mod presenter;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game_state::{GameState, GuessError, GuessOutcome, OutcomeKind, Status};
pub use presenter::{Presenter, Screen, Update};
pub use session::{GameInterface, UserAction, game_loop, game_loop_with_rng};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
