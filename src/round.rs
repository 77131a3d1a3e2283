//! Round engine: one hidden target, a fixed guess budget and the scored history.
//!
//! # State Machine
//! - `InProgress` → `Won` when a guess scores all `Correct`
//! - `InProgress` → `Lost` when the last guess of the budget is not a win
//! - `Won` and `Lost` are terminal; `submit_guess` refuses to touch a finished round

use crate::debug_log;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::scoring::{ScoredGuess, score_guess};

pub const MAX_GUESSES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug)]
pub struct Round<'d> {
    dictionary: &'d Dictionary,
    target: String,
    word_length: usize,
    history: Vec<ScoredGuess>,
    status: RoundStatus,
}

impl<'d> Round<'d> {
    /// Start a round against `target`, validating guesses with `dictionary`.
    pub fn new(target: impl Into<String>, dictionary: &'d Dictionary) -> Self {
        let target = target.into();
        let word_length = target.chars().count();
        Self {
            dictionary,
            target,
            word_length,
            history: Vec::with_capacity(MAX_GUESSES),
            status: RoundStatus::InProgress,
        }
    }

    /// Score a guess and advance the round.
    ///
    /// Rejected guesses leave the round untouched and cost nothing.
    ///
    /// # Errors
    ///
    /// - `GameError::RoundOver` if the round is already won or lost
    /// - `GameError::LengthMismatch` if the guess has the wrong length
    /// - `GameError::NotInDictionary` if the guess is not a known word
    pub fn submit_guess(&mut self, word: &str) -> Result<ScoredGuess, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }

        let actual = word.chars().count();
        if actual != self.word_length {
            debug_log!("Rejected '{}': length {} != {}", word, actual, self.word_length);
            return Err(GameError::LengthMismatch {
                expected: self.word_length,
                actual,
            });
        }
        if !self.dictionary.contains(word) {
            debug_log!("Rejected '{}': not in dictionary", word);
            return Err(GameError::NotInDictionary(word.to_string()));
        }

        let scored = score_guess(word, &self.target)?;
        self.history.push(scored.clone());

        if scored.is_win() {
            self.status = RoundStatus::Won;
        } else if self.history.len() == MAX_GUESSES {
            self.status = RoundStatus::Lost;
        }
        debug_log!(
            "Guess {} '{}' scored {} -> {:?}",
            self.history.len(),
            word,
            scored,
            self.status
        );

        Ok(scored)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        MAX_GUESSES
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Scored guesses in the order they were made.
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    /// The target, once the round is over.
    #[must_use]
    pub fn reveal_target(&self) -> Option<&str> {
        self.status.is_terminal().then_some(self.target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_str("crane\ncrate\nslate\nraise\nstare\nalloy\nlolly\nplane")
    }

    #[test]
    fn test_new_round_state() {
        let dict = dictionary();
        let round = Round::new("CRANE", &dict);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.guesses_used(), 0);
        assert_eq!(round.guesses_remaining(), MAX_GUESSES);
        assert_eq!(round.word_length(), 5);
        assert!(round.history().is_empty());
        assert_eq!(round.reveal_target(), None);
    }

    #[test]
    fn test_win_on_first_guess() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        let scored = round.submit_guess("CRANE").unwrap();
        assert!(scored.is_win());
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.guesses_used(), 1);
        assert_eq!(round.reveal_target(), Some("crane"));
    }

    #[test]
    fn test_wrong_guess_stays_in_progress() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        let scored = round.submit_guess("crate").unwrap();
        assert!(!scored.is_win());
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.guesses_remaining(), MAX_GUESSES - 1);
        assert_eq!(round.history(), &[scored]);
    }

    #[test]
    fn test_lost_after_five_wrong_guesses() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        let wrong = ["crate", "slate", "raise", "stare", "alloy"];
        for (i, guess) in wrong.iter().enumerate() {
            assert_eq!(round.status(), RoundStatus::InProgress, "lost too early");
            round.submit_guess(guess).unwrap();
            assert_eq!(round.guesses_used(), i + 1);
        }
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.guesses_remaining(), 0);
        assert_eq!(round.reveal_target(), Some("crane"));
    }

    #[test]
    fn test_win_on_last_guess() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        for guess in ["crate", "slate", "raise", "stare"] {
            round.submit_guess(guess).unwrap();
        }
        round.submit_guess("crane").unwrap();
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_not_in_dictionary_costs_nothing() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        round.submit_guess("crate").unwrap();
        match round.submit_guess("xyzzy") {
            Err(GameError::NotInDictionary(word)) => assert_eq!(word, "xyzzy"),
            other => panic!("Expected NotInDictionary, got {other:?}"),
        }
        assert_eq!(round.guesses_used(), 1);
        assert_eq!(round.history().len(), 1);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_wrong_length_costs_nothing() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        assert!(matches!(
            round.submit_guess("cranes"),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
        assert!(matches!(
            round.submit_guess(""),
            Err(GameError::LengthMismatch { actual: 0, .. })
        ));
        assert_eq!(round.guesses_used(), 0);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_finished_round_rejects_guesses() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        round.submit_guess("crane").unwrap();
        assert!(matches!(
            round.submit_guess("slate"),
            Err(GameError::RoundOver)
        ));
        assert_eq!(round.guesses_used(), 1);
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_won_only_after_all_correct() {
        let dict = dictionary();
        let mut round = Round::new("alloy", &dict);
        let scored = round.submit_guess("lolly").unwrap();
        assert!(!scored.is_win());
        assert_eq!(round.status(), RoundStatus::InProgress);
        let scored = round.submit_guess("ALLOY").unwrap();
        assert!(scored.is_win());
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_history_is_chronological() {
        let dict = dictionary();
        let mut round = Round::new("crane", &dict);
        round.submit_guess("slate").unwrap();
        round.submit_guess("plane").unwrap();
        let words: Vec<String> = round.history().iter().map(ScoredGuess::word).collect();
        assert_eq!(words, vec!["slate", "plane"]);
    }
}
