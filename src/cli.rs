use crate::debug_log;
use crate::error::GameError;
use crate::round::{Round, RoundStatus};
use crate::scoring::{ScoredGuess, Verdict};
use crate::session::{Banner, DEFAULT_WORD_LENGTH, GameInterface, SessionConfig, UserAction};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};

const EXIT_COMMAND: &str = ":exit";
const NEW_GAME_COMMAND: &str = ":next";
const BOARD_INDENT: &str = "      ";

/// Terminal word-guessing game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file (defaults to the built-in list)
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<String>,

    /// Number of letters in the target word
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_WORD_LENGTH as u8,
          value_parser = clap::value_parser!(u8).range(3..=10))]
    pub word_length: u8,

    /// Play in the full-screen interface
    #[arg(long)]
    pub tui: bool,

    /// Use the compact banner instead of the ASCII-art one
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        let word_length = usize::from(self.word_length);
        let banner = if self.plain {
            Banner::plain(word_length)
        } else {
            Banner::classic(word_length)
        };
        SessionConfig {
            word_length,
            banner,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Terminal colour for each verdict.
fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::Red,
    }
}

fn parse_guess_input(input: &str) -> Option<UserAction> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input.eq_ignore_ascii_case(EXIT_COMMAND) {
        Some(UserAction::Exit)
    } else if input.eq_ignore_ascii_case(NEW_GAME_COMMAND) {
        Some(UserAction::NewGame)
    } else {
        Some(UserAction::Guess(input.to_string()))
    }
}

fn guess_plural(count: usize) -> &'static str {
    if count > 1 { "guesses" } else { "guess" }
}

/// Line-oriented implementation of `GameInterface`.
///
/// Reads guesses from any `BufRead` and writes the board to any `Write`, so tests can drive a
/// whole session with a `Cursor` and a `Vec<u8>`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    clear_screen: bool,
    color: bool,
    banner: Option<Banner>,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_screen: false,
            color: true,
            banner: None,
        }
    }

    /// Clear the terminal before each redraw of the board.
    #[must_use]
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug_log!("Write error: {}", e);
        }
    }

    fn prompt(&mut self, text: &str) {
        if let Err(e) = write!(self.writer, "{text}").and_then(|()| self.writer.flush()) {
            debug_log!("Write error: {}", e);
        }
    }

    /// `None` at end of input or on a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input),
            Err(e) => {
                debug_log!("Read error: {}", e);
                None
            }
        }
    }

    fn render_cell(&self, letter: char, verdict: Verdict) -> String {
        let letter = letter.to_uppercase().to_string();
        if self.color {
            format!("| {} |", style(letter).with(verdict_color(verdict)))
        } else {
            format!("| {letter} |")
        }
    }

    fn render_board(&mut self, round: &Round<'_>) {
        if self.clear_screen
            && let Err(e) = queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))
        {
            debug_log!("Clear error: {}", e);
        }

        if let Some(banner) = self.banner.clone() {
            if round.guesses_used() == 0 {
                self.write_line(&banner.title);
                self.write_line(&banner.tagline);
            }
            for line in banner.art {
                self.write_line(line);
            }
            self.write_line("");
        }

        let width = round.word_length();
        for scored in round.history() {
            let cells: String = scored
                .letters()
                .iter()
                .map(|&(letter, verdict)| self.render_cell(letter, verdict))
                .collect();
            self.write_line(&format!("{BOARD_INDENT}{}", "┌───┐".repeat(width)));
            self.write_line(&format!("{BOARD_INDENT}{cells}"));
            self.write_line(&format!("{BOARD_INDENT}{}", "└───┘".repeat(width)));
        }
        self.write_line("--------------------------------------\n");
    }

    fn render_share_lines(&mut self, round: &Round<'_>) {
        for scored in round.history() {
            self.write_line(&format!("{BOARD_INDENT}{}", scored.to_emoji_string()));
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_welcome(&mut self, banner: &Banner, round: &Round<'_>) {
        self.banner = Some(banner.clone());
        self.render_board(round);
    }

    fn read_guess(&mut self, round: &Round<'_>) -> Option<UserAction> {
        self.prompt(&format!(
            "Enter guess [{} left]: ",
            round.guesses_remaining()
        ));
        match self.read_line() {
            Some(input) => parse_guess_input(&input),
            None => Some(UserAction::Exit),
        }
    }

    fn display_scored_guess(&mut self, _scored: &ScoredGuess, round: &Round<'_>) {
        self.render_board(round);
    }

    fn display_rejection(&mut self, error: &GameError, round: &Round<'_>) {
        self.write_line(&format!(
            "Invalid guess. Please enter a {}-letter word that's in the dictionary. ({error})",
            round.word_length()
        ));
    }

    fn display_won(&mut self, round: &Round<'_>) {
        let used = round.guesses_used();
        let only = if used < 4 { "only " } else { "" };
        self.write_line(&format!(
            "Congratulations! You guessed the word using {only}{used} {}!",
            guess_plural(used)
        ));
        self.render_share_lines(round);
    }

    fn display_lost(&mut self, round: &Round<'_>) {
        debug_assert_eq!(round.status(), RoundStatus::Lost);
        let target = round.reveal_target().unwrap_or_default().to_string();
        self.write_line(&format!(
            "Sorry, you didn't guess the word within {} guesses. The word was {target}.",
            round.max_guesses()
        ));
        self.render_share_lines(round);
    }

    fn ask_play_again(&mut self) -> bool {
        loop {
            self.prompt("Would you like to play again? (y/n): ");
            let Some(input) = self.read_line() else {
                return false;
            };
            match input.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => self.write_line("Invalid input. Please enter 'y' or 'n'."),
            }
        }
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.write_line(&format!(
            "New game started. {word_count} words to choose from."
        ));
    }

    fn display_exit_message(&mut self) {
        self.write_line("Exiting.");
    }
}
