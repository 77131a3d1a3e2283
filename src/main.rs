use std::io;
use std::process::ExitCode;
use wordle_game::cli::{CliInterface, parse_cli};
use wordle_game::tui::TuiInterface;
use wordle_game::{Dictionary, GameInterface, game_loop, logging};

fn main() -> ExitCode {
    let cli = parse_cli();

    match logging::init(cli.verbose, cli.tui) {
        Ok(Some(path)) => eprintln!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Failed to set up logging: {e}"),
    }

    let dictionary = match &cli.dictionary_path {
        Some(path) => match Dictionary::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Dictionary::embedded(),
    };
    log::info!("Dictionary ready with {} words", dictionary.len());

    let config = cli.session_config();
    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Box::new(CliInterface::new(io::stdin().lock(), io::stdout()).with_clear_screen(true))
    };

    let result = game_loop(&dictionary, &config, interface.as_mut(), &mut rand::rng());
    // Restore the terminal before printing anything else
    drop(interface);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
