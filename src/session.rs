//! Session driver: picks targets, feeds guesses to the round engine and hands every result
//! to a `GameInterface` for display. The same loop runs behind the line-mode CLI and the TUI.

use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::round::{Round, RoundStatus};
use crate::scoring::ScoredGuess;
use crate::{debug_log, info_log};
use rand::Rng;

pub const DEFAULT_WORD_LENGTH: usize = 5;

const BANNER_ART: &[&str] = &[
    " ________                __ __        ",
    "|  |  |  |.-----.----.--|  |  |.-----.",
    "|  |  |  ||  _  |   _|  _  |  ||  -__|",
    "|________||_____|__| |_____|__||_____|",
];

/// Cosmetic header shown at the top of every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub title: String,
    pub tagline: String,
    pub art: &'static [&'static str],
}

impl Banner {
    #[must_use]
    pub fn classic(word_length: usize) -> Self {
        Self {
            title: "Welcome to my Homemade Wordle Game!".to_string(),
            tagline: format!(
                "I have a {word_length}-letter word in mind, and you have to guess it. \
                 You have five tries. Good luck!"
            ),
            art: BANNER_ART,
        }
    }

    #[must_use]
    pub fn plain(word_length: usize) -> Self {
        Self {
            title: "WORDLE".to_string(),
            tagline: format!("Guess the {word_length}-letter word in five tries."),
            art: &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub word_length: usize,
    pub banner: Banner,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            banner: Banner::classic(DEFAULT_WORD_LENGTH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
    NewGame,
}

/// Display and input seam between the session driver and a concrete front end.
pub trait GameInterface {
    fn display_welcome(&mut self, banner: &Banner, round: &Round<'_>);
    /// `None` means the input was unusable and the driver should simply ask again.
    fn read_guess(&mut self, round: &Round<'_>) -> Option<UserAction>;
    fn display_scored_guess(&mut self, scored: &ScoredGuess, round: &Round<'_>);
    fn display_rejection(&mut self, error: &GameError, round: &Round<'_>);
    fn display_won(&mut self, round: &Round<'_>);
    fn display_lost(&mut self, round: &Round<'_>);
    fn ask_play_again(&mut self) -> bool;
    fn display_new_game_message(&mut self, word_count: usize);
    fn display_exit_message(&mut self);
}

enum RoundEnd {
    Finished,
    NewGame,
    Exit,
}

/// Play rounds until the player quits or input runs out.
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if the dictionary has no word of the configured length.
pub fn game_loop<I, R>(
    dictionary: &Dictionary,
    config: &SessionConfig,
    interface: &mut I,
    rng: &mut R,
) -> Result<(), GameError>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    loop {
        let target = dictionary.pick_random_of_length(config.word_length, rng)?;
        info_log!("Starting round with a {}-letter target", config.word_length);
        let mut round = Round::new(target, dictionary);
        interface.display_welcome(&config.banner, &round);

        match play_round(&mut round, interface)? {
            RoundEnd::Exit => {
                interface.display_exit_message();
                return Ok(());
            }
            RoundEnd::NewGame => {}
            RoundEnd::Finished => {
                if !interface.ask_play_again() {
                    interface.display_exit_message();
                    return Ok(());
                }
            }
        }

        interface.display_new_game_message(dictionary.count_of_length(config.word_length));
    }
}

fn play_round<I>(round: &mut Round<'_>, interface: &mut I) -> Result<RoundEnd, GameError>
where
    I: GameInterface + ?Sized,
{
    while !round.status().is_terminal() {
        let word = match interface.read_guess(round) {
            Some(UserAction::Guess(word)) => word,
            Some(UserAction::Exit) => return Ok(RoundEnd::Exit),
            Some(UserAction::NewGame) => {
                debug_log!("Round abandoned after {} guesses", round.guesses_used());
                return Ok(RoundEnd::NewGame);
            }
            None => continue,
        };

        match round.submit_guess(&word) {
            Ok(scored) => interface.display_scored_guess(&scored, round),
            Err(e) if e.is_recoverable() => interface.display_rejection(&e, round),
            Err(e) => return Err(e),
        }
    }

    match round.status() {
        RoundStatus::Won => {
            info_log!("Round won in {} guesses", round.guesses_used());
            interface.display_won(round);
        }
        RoundStatus::Lost => {
            info_log!("Round lost");
            interface.display_lost(round);
        }
        RoundStatus::InProgress => {}
    }
    Ok(RoundEnd::Finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    enum Event {
        Welcome(usize),
        Scored(String),
        Rejected(usize),
        Won(usize),
        Lost(String),
        NewGame(usize),
        Exit,
    }

    /// Scripted interface that replays actions and records what the driver showed.
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        play_again: VecDeque<bool>,
        events: Vec<Event>,
    }

    impl ScriptedInterface {
        fn new(guesses: &[&str]) -> Self {
            Self {
                actions: guesses
                    .iter()
                    .map(|g| Some(UserAction::Guess((*g).to_string())))
                    .collect(),
                play_again: VecDeque::new(),
                events: Vec::new(),
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_welcome(&mut self, _banner: &Banner, round: &Round<'_>) {
            self.events.push(Event::Welcome(round.guesses_remaining()));
        }

        fn read_guess(&mut self, _round: &Round<'_>) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_scored_guess(&mut self, scored: &ScoredGuess, _round: &Round<'_>) {
            self.events.push(Event::Scored(scored.to_string()));
        }

        fn display_rejection(&mut self, _error: &GameError, round: &Round<'_>) {
            self.events.push(Event::Rejected(round.guesses_used()));
        }

        fn display_won(&mut self, round: &Round<'_>) {
            self.events.push(Event::Won(round.guesses_used()));
        }

        fn display_lost(&mut self, round: &Round<'_>) {
            let target = round.reveal_target().unwrap_or_default().to_string();
            self.events.push(Event::Lost(target));
        }

        fn ask_play_again(&mut self) -> bool {
            self.play_again.pop_front().unwrap_or(false)
        }

        fn display_new_game_message(&mut self, word_count: usize) {
            self.events.push(Event::NewGame(word_count));
        }

        fn display_exit_message(&mut self) {
            self.events.push(Event::Exit);
        }
    }

    fn run(dictionary: &Dictionary, interface: &mut ScriptedInterface) -> Result<(), GameError> {
        let mut rng = StdRng::seed_from_u64(11);
        game_loop(dictionary, &SessionConfig::default(), interface, &mut rng)
    }

    #[test]
    fn test_win_then_quit() {
        let dict = Dictionary::from_str("crane");
        let mut ui = ScriptedInterface::new(&["crane"]);
        run(&dict, &mut ui).unwrap();
        assert_eq!(
            ui.events,
            vec![
                Event::Welcome(5),
                Event::Scored("GGGGG".to_string()),
                Event::Won(1),
                Event::Exit,
            ]
        );
    }

    #[test]
    fn test_invalid_guesses_do_not_cost_turns() {
        let dict = Dictionary::from_str("crane");
        let mut ui = ScriptedInterface::new(&["xyzzy", "cranes", "crane"]);
        run(&dict, &mut ui).unwrap();
        assert_eq!(ui.events[1], Event::Rejected(0));
        assert_eq!(ui.events[2], Event::Rejected(0));
        assert_eq!(ui.events[3], Event::Scored("GGGGG".to_string()));
        assert_eq!(ui.events[4], Event::Won(1));
    }

    #[test]
    fn test_loss_reveals_target() {
        let dict = Dictionary::from_str("crane\ncrate\nslate\nraise\nstare\nalloy");
        let mut rng = StdRng::seed_from_u64(5);
        let target = dict.pick_random(&mut rng).unwrap().to_string();
        let wrong: Vec<&str> = dict
            .words()
            .iter()
            .map(String::as_str)
            .filter(|w| *w != target)
            .collect();
        let mut ui = ScriptedInterface::new(&wrong);
        let mut rng = StdRng::seed_from_u64(5);
        game_loop(&dict, &SessionConfig::default(), &mut ui, &mut rng).unwrap();
        assert_eq!(ui.events.len(), 1 + 5 + 2);
        assert_eq!(ui.events[6], Event::Lost(target));
        assert_eq!(ui.events[7], Event::Exit);
    }

    #[test]
    fn test_play_again_starts_new_round() {
        let dict = Dictionary::from_str("crane");
        let mut ui = ScriptedInterface::new(&["crane", "crane"]);
        ui.play_again.push_back(true);
        run(&dict, &mut ui).unwrap();
        assert_eq!(
            ui.events,
            vec![
                Event::Welcome(5),
                Event::Scored("GGGGG".to_string()),
                Event::Won(1),
                Event::NewGame(1),
                Event::Welcome(5),
                Event::Scored("GGGGG".to_string()),
                Event::Won(1),
                Event::Exit,
            ]
        );
    }

    #[test]
    fn test_new_game_abandons_round() {
        let dict = Dictionary::from_str("crane");
        let mut ui = ScriptedInterface::new(&[]);
        ui.actions.push_back(Some(UserAction::NewGame));
        ui.actions.push_back(None);
        ui.actions.push_back(Some(UserAction::Exit));
        run(&dict, &mut ui).unwrap();
        assert_eq!(
            ui.events,
            vec![
                Event::Welcome(5),
                Event::NewGame(1),
                Event::Welcome(5),
                Event::Exit
            ]
        );
    }

    #[test]
    fn test_empty_dictionary_is_fatal() {
        let dict = Dictionary::default();
        let mut ui = ScriptedInterface::new(&["crane"]);
        assert!(matches!(
            run(&dict, &mut ui),
            Err(GameError::EmptyDictionary)
        ));
        assert!(ui.events.is_empty());
    }

    #[test]
    fn test_word_length_config() {
        let dict = Dictionary::from_str("crane\ncat");
        let config = SessionConfig {
            word_length: 3,
            banner: Banner::plain(3),
        };
        let mut ui = ScriptedInterface::new(&["crane", "CAT"]);
        let mut rng = StdRng::seed_from_u64(2);
        game_loop(&dict, &config, &mut ui, &mut rng).unwrap();
        assert_eq!(ui.events[1], Event::Rejected(0));
        assert_eq!(ui.events[3], Event::Won(1));
    }

    #[test]
    fn test_banners() {
        let classic = Banner::classic(5);
        assert_eq!(classic.art.len(), 4);
        assert!(classic.tagline.contains("5-letter"));
        assert!(Banner::plain(6).art.is_empty());
        assert!(Banner::plain(6).tagline.contains("6-letter"));
    }
}
