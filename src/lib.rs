// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod round;
pub mod scoring;
pub mod session;
pub mod tui;

// Re-export commonly used items for easier testing
pub use dictionary::Dictionary;
pub use error::GameError;
pub use round::{MAX_GUESSES, Round, RoundStatus};
pub use scoring::{ScoredGuess, Verdict, score_guess};
pub use session::{Banner, GameInterface, SessionConfig, UserAction, game_loop};
