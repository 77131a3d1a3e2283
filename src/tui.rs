//! TUI (Terminal User Interface) module for the word game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → `EnteringGuess` after every accepted or rejected guess
//! - `EnteringGuess` → `GameOver` once the round is won or lost
//! - `GameOver` → `EnteringGuess` when the player starts a new game

use crate::error::GameError;
use crate::round::Round;
use crate::scoring::{ScoredGuess, Verdict};
use crate::session::{Banner, GameInterface, UserAction};
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
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Background and foreground for a scored letter.
fn verdict_colors(verdict: Verdict) -> (Color, Color) {
    match verdict {
        Verdict::Correct => (Color::Green, Color::Black),
        Verdict::Present => (Color::Yellow, Color::Black),
        Verdict::Absent => (Color::Gray, Color::White),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    /// Round finished - outcome stored in `message`
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    banner: &'a Banner,
    rows: &'a [ScoredGuess],
    word_length: usize,
    max_guesses: usize,
    current_input: &'a str,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    banner: Banner,
    rows: Vec<ScoredGuess>,
    word_length: usize,
    max_guesses: usize,
    current_input: String,
    state: TuiState,
    message: String,
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
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            banner: Banner::plain(0),
            rows: Vec::new(),
            word_length: 0,
            max_guesses: 0,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
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

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            banner: &self.banner,
            rows: &self.rows,
            word_length: self.word_length,
            max_guesses: self.max_guesses,
            current_input: &self.current_input,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn sync_round(&mut self, round: &Round<'_>) {
        self.rows = round.history().to_vec();
        self.word_length = round.word_length();
        self.max_guesses = round.max_guesses();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let title_height = ctx.banner.art.len() as u16 + 3;
        let board_height = ctx.max_guesses as u16 * ROW_SPACING + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(title_height), // Banner
                Constraint::Length(board_height), // Game board
                Constraint::Min(4),               // Info panel (takes remaining space)
                Constraint::Length(3),            // Status line
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.banner);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state, ctx.word_length);
    }

    fn render_title(f: &mut Frame, area: Rect, banner: &Banner) {
        let mut lines: Vec<Line> = banner
            .art
            .iter()
            .map(|line| Line::from(Span::styled(*line, HEADER_STYLE)))
            .collect();
        lines.push(Line::from(Span::styled(banner.title.as_str(), HEADER_STYLE)));
        let title = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(format!(
                "Guesses ({}/{})",
                ctx.rows.len(),
                ctx.max_guesses
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (row_index, scored) in ctx.rows.iter().enumerate() {
            Self::render_guess_row(f, scored, row_index, inner);
        }

        let showing_current_input =
            ctx.state == TuiState::EnteringGuess && ctx.rows.len() < ctx.max_guesses;
        if showing_current_input {
            Self::render_current_input(
                f,
                ctx.rows.len(),
                inner,
                ctx.current_input,
                ctx.word_length,
            );
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_guess_row(f: &mut Frame, scored: &ScoredGuess, row_index: usize, area: Rect) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for &(letter, verdict) in scored.letters() {
            let (bg_color, fg_color) = verdict_colors(verdict);
            let letter = letter.to_uppercase();
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_current_input(
        f: &mut Frame,
        row_index: usize,
        area: Rect,
        current_input: &str,
        word_length: usize,
    ) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        let mut letters = current_input.chars();
        for _ in 0..word_length {
            let letter = letters.next().unwrap_or(' ');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_info(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();

        if !message.is_empty() {
            let style = if message.starts_with("Congratulations") {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(message, style)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState, word_length: usize) {
        let text = match state {
            TuiState::EnteringGuess => format!(
                "Type your {word_length}-letter guess | ENTER: Submit | CTRL-N: New Game | ESC: Quit"
            ),
            TuiState::GameOver => "N: New Game | ESC: Quit".to_string(),
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(Span::styled(status_text, INFO_STYLE))
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Wait briefly for one key press, filtering out everything that is not a usable key.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                // Alt-tab can leak replacement and control characters
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("next_key() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }
                debug_log!(
                    "next_key() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('n' | 'N') if has_ctrl => {
                info_log!("handle_guess_input() - CTRL-N pressed, returning NewGame");
                return Some(UserAction::NewGame);
            }
            KeyCode::Char(_) if has_ctrl || has_alt => {
                debug_log!(
                    "handle_guess_input() - Ignoring character with modifier: {:?}",
                    key.modifiers
                );
            }
            KeyCode::Char(c)
                if c.is_alphabetic() && self.current_input.chars().count() < self.word_length =>
            {
                self.error_message.clear();
                self.current_input.extend(c.to_uppercase());
            }
            KeyCode::Char(c) if !c.is_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.error_message.clear();
                self.current_input.pop();
            }
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn transition_to_game_over(&mut self) {
        self.state = TuiState::GameOver;
        self.current_input.clear();
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, banner: &Banner, round: &Round<'_>) {
        self.banner = banner.clone();
        self.sync_round(round);
        self.state = TuiState::EnteringGuess;
        self.current_input.clear();
        self.message = banner.tagline.clone();
        self.error_message.clear();
        self.status = format!("Enter your first guess [{} left]", round.guesses_remaining());
        self.draw_or_log();
    }

    fn read_guess(&mut self, round: &Round<'_>) -> Option<UserAction> {
        self.status = format!("Enter guess [{} left]", round.guesses_remaining());
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.handle_guess_input(key) {
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_guess() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_scored_guess(&mut self, scored: &ScoredGuess, round: &Round<'_>) {
        self.sync_round(round);
        self.error_message.clear();
        self.message = format!("{}  {}", scored.word().to_uppercase(), scored.to_emoji_string());
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: &GameError, round: &Round<'_>) {
        self.error_message = format!(
            "Invalid guess. Please enter a {}-letter word that's in the dictionary. ({error})",
            round.word_length()
        );
        self.draw_or_log();
    }

    fn display_won(&mut self, round: &Round<'_>) {
        self.sync_round(round);
        self.transition_to_game_over();
        let used = round.guesses_used();
        self.message = format!(
            "Congratulations! You guessed the word in {used} {}!",
            if used > 1 { "guesses" } else { "guess" }
        );
        self.status = "Game Over - You won".to_string();
        self.draw_or_log();
    }

    fn display_lost(&mut self, round: &Round<'_>) {
        self.sync_round(round);
        self.transition_to_game_over();
        let target = round.reveal_target().unwrap_or_default();
        self.message = format!(
            "Sorry, you didn't guess the word within {} guesses. The word was {}.",
            round.max_guesses(),
            target.to_uppercase()
        );
        self.status = "Game Over - You lost".to_string();
        self.draw_or_log();
    }

    fn ask_play_again(&mut self) -> bool {
        loop {
            if self.draw().is_err() {
                return false;
            }
            match self.next_key() {
                Ok(Some(key)) => match key.code {
                    KeyCode::Char('n' | 'N') => return true,
                    KeyCode::Esc | KeyCode::Char('q' | 'Q') => return false,
                    _ => {}
                },
                Ok(None) => {}
                Err(e) => {
                    debug_log!("ask_play_again() - Input error: {}", e);
                    return false;
                }
            }
        }
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.rows.clear();
        self.current_input.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!("New game started. {word_count} words to choose from.");
        self.error_message.clear();
        self.status = "New game - Enter your first guess".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
