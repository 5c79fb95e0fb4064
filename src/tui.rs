//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Title, then the gallows next to the word panel, then the guess input with
//! the remaining count and message line, then the wrong letters, status and
//! key help.
//!
//! # State Machine
//! - `EnteringGuess`: typing into the input field, ENTER submits
//! - `GameOver`: input disabled until `N` starts a new round

use crate::game_state::Status;
use crate::presenter::Screen;
use crate::session::{GameInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Gallows drawings, from empty to fully hanged.
const GALLOWS: [[&str; 7]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "========="],
];

/// Which gallows drawing to show, scaled so the last wrong guess completes it
/// whatever the budget.
fn gallows_stage(wrong_guesses: u32, guess_budget: u32) -> usize {
    let last = GALLOWS.len() - 1;
    if guess_budget == 0 || wrong_guesses >= guess_budget {
        return last;
    }
    (wrong_guesses as usize * last).div_ceil(guess_budget as usize)
}

#[derive(Debug, PartialEq)]
enum TuiState {
    EnteringGuess,
    /// Round finished - banner stored in `screen`
    GameOver,
}

/// Main TUI interface component.
///
/// Owns the terminal and the widget state for one session.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    screen: Option<Screen>,
    current_input: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            state: TuiState::EnteringGuess,
            screen: None,
            current_input: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let screen = self.screen.as_ref();
        let state = &self.state;
        let input = self.current_input.as_str();
        let error = self.error_message.as_str();
        let status = self.status.as_str();
        self.terminal.draw(|f| {
            Self::render_static(f, screen, state, input, error, status);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(
        f: &mut Frame,
        screen: Option<&Screen>,
        state: &TuiState,
        input: &str,
        error: &str,
        status: &str,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(9), // Gallows + word
                Constraint::Length(6), // Input, remaining, message
                Constraint::Min(3),    // Letters guessed
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        if let Some(screen) = screen {
            let top = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(15), Constraint::Min(20)])
                .split(chunks[1]);
            Self::render_gallows(f, top[0], screen);
            Self::render_word(f, top[1], screen);
            Self::render_input(f, chunks[2], screen, state, input, error);
            Self::render_guessed(f, chunks[3], screen);
        }
        Self::render_status(f, chunks[4], status);
        Self::render_instructions(f, chunks[5], state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, screen: &Screen) {
        let stage = gallows_stage(screen.wrong_guesses, screen.guess_budget);
        let lines: Vec<Line> = GALLOWS[stage].iter().map(|row| Line::from(*row)).collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, screen: &Screen) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(screen.progress.as_str(), INFO_STYLE)),
            Line::from(""),
            Line::from(screen.letter_count.as_str()),
        ];
        if let Some(banner) = &screen.banner {
            let style = if screen.status == Status::Won {
                SUCCESS_STYLE
            } else {
                LOSS_STYLE
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(banner.as_str(), style)));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Word").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_input(
        f: &mut Frame,
        area: Rect,
        screen: &Screen,
        state: &TuiState,
        input: &str,
        error: &str,
    ) {
        let input_line = if *state == TuiState::EnteringGuess {
            Line::from(vec![
                Span::raw("Enter letter or guess word: "),
                Span::styled(
                    format!("{input}_"),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
            ])
        } else {
            Line::from(Span::styled(
                "Guessing is closed for this round.",
                Style::default().fg(Color::Gray),
            ))
        };

        let mut lines = vec![input_line, Line::from(screen.remaining.as_str())];
        if !error.is_empty() {
            lines.push(Line::from(Span::styled(error, ERROR_STYLE)));
        } else if !screen.message.is_empty() {
            lines.push(Line::from(Span::styled(screen.message.as_str(), MESSAGE_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Guess").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_guessed(f: &mut Frame, area: Rect, screen: &Screen) {
        let text = if screen.wrong_letters.is_empty() {
            "-"
        } else {
            screen.wrong_letters.as_str()
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(text, ERROR_STYLE)))
            .block(Block::default().title("Letters guessed").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type a letter or the whole word | ENTER: Guess | BACKSPACE: Edit | ESC: Quit"
            }
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            // Mouse, focus, paste and resize events; resize is handled by the next draw
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Terminal focus changes (alt-tab) can leak replacement or control characters
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        Ok(match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        })
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Enter => {
                // Submitted as typed; the presenter handles blanks and clears
                // the field through the next `display_screen`.
                Some(UserAction::Guess(self.current_input.clone()))
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message.clear();
                None
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => None,
            KeyCode::Char(c) if self.current_input.chars().count() < MAX_INPUT_LENGTH => {
                self.current_input.push(c.to_ascii_uppercase());
                self.error_message.clear();
                None
            }
            KeyCode::Char(_) => {
                self.error_message = format!("Guesses are at most {MAX_INPUT_LENGTH} characters.");
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn display_screen(&mut self, screen: &Screen) {
        self.current_input.clear();
        self.error_message.clear();
        if screen.accepting_guesses {
            self.state = TuiState::EnteringGuess;
            self.status = format!(
                "{} wrong of {} allowed",
                screen.wrong_guesses, screen.guess_budget
            );
        } else {
            self.state = TuiState::GameOver;
            self.status = "Game Over - press N for a new word".to_string();
        }
        self.screen = Some(screen.clone());
        self.draw_or_log();
    }

    fn display_rejection(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallows_starts_empty_and_ends_full() {
        assert_eq!(gallows_stage(0, 6), 0);
        assert_eq!(gallows_stage(6, 6), GALLOWS.len() - 1);
        assert_eq!(gallows_stage(1, 1), GALLOWS.len() - 1);
        assert_eq!(gallows_stage(3, 0), GALLOWS.len() - 1);
    }

    #[test]
    fn test_gallows_grows_with_each_miss() {
        for budget in [1, 3, 6, 10, 26] {
            let mut previous = 0;
            for wrong in 1..=budget {
                let stage = gallows_stage(wrong, budget);
                assert!(stage >= previous, "budget {budget}, wrong {wrong}");
                assert!(stage > 0);
                previous = stage;
            }
            assert_eq!(previous, GALLOWS.len() - 1);
        }
    }

    #[test]
    fn test_game_over_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Char('n'))),
            Some(UserAction::NewGame)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Esc)),
            Some(UserAction::Exit)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Enter)),
            None
        );
    }
}
