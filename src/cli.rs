use crate::debug_log;
use crate::game_state::DEFAULT_GUESS_BUDGET;
use crate::presenter::Screen;
use crate::session::{GameInterface, UserAction};
use clap::Parser;
use std::io::{self, BufRead, Write};

pub const MAX_GUESS_BUDGET: u32 = 26;

const NEW_GAME_COMMAND: &str = "/new";
const QUIT_COMMAND: &str = "/quit";

/// Hangman: guess the word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Play this word instead of picking one from the word bank
    #[arg(short = 'w', long = "word")]
    pub word: Option<String>,

    /// Number of incorrect guesses allowed per round
    #[arg(
        short = 'g',
        long = "guesses",
        default_value_t = DEFAULT_GUESS_BUDGET,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_GUESS_BUDGET))
    )]
    pub guess_budget: u32,

    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Use the plain line-based interface instead of the full-screen one
    #[arg(long)]
    pub simple: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn parse_action(line: &str) -> UserAction {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(QUIT_COMMAND) {
        UserAction::Exit
    } else if trimmed.eq_ignore_ascii_case(NEW_GAME_COMMAND) {
        UserAction::NewGame
    } else {
        // Blank lines are guesses too, so the player hears about empty input.
        UserAction::Guess(line.to_string())
    }
}

/// Line-based implementation of [`GameInterface`] over any reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R, io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_lines(&mut self, lines: &[&str]) {
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.writer, "{line}"))
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            debug_log!("CliInterface - write failed: {}", e);
        }
    }

    fn prompt(&mut self) {
        let prompt = format!(
            "\nEnter letter or guess word ('{NEW_GAME_COMMAND}' for a new game, '{QUIT_COMMAND}' to quit):"
        );
        self.write_lines(&[prompt.as_str()]);
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_screen(&mut self, screen: &Screen) {
        let guessed = format!("Letters guessed: {}", screen.wrong_letters);
        let mut lines: Vec<&str> = Vec::new();
        if !screen.message.is_empty() {
            lines.push(screen.message.as_str());
        }
        lines.push(screen.progress.as_str());
        lines.push(screen.letter_count.as_str());
        lines.push(screen.remaining.as_str());
        lines.push(guessed.as_str());
        if let Some(banner) = &screen.banner {
            lines.push(banner.as_str());
        }
        self.write_lines(&lines);
        if !screen.accepting_guesses {
            let hint =
                format!("Type '{NEW_GAME_COMMAND}' to play again or '{QUIT_COMMAND}' to quit.");
            self.write_lines(&[hint.as_str()]);
        }
    }

    fn display_rejection(&mut self, message: &str) {
        self.write_lines(&[message]);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        self.prompt();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => Some(parse_action(&line)),
            Err(e) => {
                debug_log!("CliInterface - read failed: {}", e);
                Some(UserAction::Exit)
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.write_lines(&["Goodbye!"]);
    }
}
