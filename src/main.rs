use hangman::cli::{Cli, CliInterface, parse_cli};
use hangman::game_loop;
use hangman::logging;
use hangman::tui::TuiInterface;
use hangman::wordbank::{
    EMBEDDED_WORDBANK, default_wordbank_path, is_valid_word, load_wordbank_from_file,
    load_wordbank_from_str,
};
use std::io;
use std::process::ExitCode;

fn resolve_wordbank(cli: &Cli) -> Result<Vec<String>, String> {
    if let Some(word) = &cli.word {
        let word = word.trim();
        if !is_valid_word(word) {
            return Err(format!(
                "'{word}' can't be played: use letters only, at least 3 of them"
            ));
        }
        return Ok(vec![word.to_uppercase()]);
    }

    if let Some(path) = &cli.wordbank_path {
        return load_wordbank_from_file(path)
            .map_err(|e| format!("Failed to load word bank from '{path}': {e}"));
    }

    if let Some(path) = default_wordbank_path().filter(|p| p.is_file()) {
        match load_wordbank_from_file(&path) {
            Ok(words) if !words.is_empty() => {
                log::info!("Using word bank {}", path.display());
                return Ok(words);
            }
            Ok(_) => log::warn!("{} has no playable words, using built-in list", path.display()),
            Err(e) => log::warn!("Failed to read {}: {e}, using built-in list", path.display()),
        }
    }

    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(!cli.simple);

    let words = match resolve_wordbank(&cli) {
        Ok(words) if words.is_empty() => {
            eprintln!("The word bank has no playable words.");
            return ExitCode::FAILURE;
        }
        Ok(words) => words,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} words", words.len());

    if cli.simple {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&words, cli.guess_budget, &mut interface);
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(mut interface) => {
            game_loop(&words, cli.guess_budget, &mut interface);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to start the terminal UI: {e} (try --simple)");
            ExitCode::FAILURE
        }
    }
}
