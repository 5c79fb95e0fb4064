use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");
pub const MIN_WORD_LENGTH: usize = 3;

const COMMENT_PREFIX: char = '#';

/// A playable secret word: ASCII letters only, at least `MIN_WORD_LENGTH` long.
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    word.len() >= MIN_WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim();
    if word.starts_with(COMMENT_PREFIX) || !is_valid_word(word) {
        return None;
    }
    Some(word.to_uppercase())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user word list, picked up when no `--input` path is given.
#[must_use]
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hangman").join("words.txt"))
}

pub fn choose_word<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Option<&'a String> {
    words.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn test_embedded_wordbank_is_playable() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(words.len() > 50);
        assert!(words.iter().all(|w| is_valid_word(w)));
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_load_from_str_filters_lines() {
        let data = "cat\n# comment\n\n  dog  \nno\nh4x0r\nwell-known\nElephant\n";
        let words = load_wordbank_from_str(data);
        assert_eq!(words, vec!["CAT", "DOG", "ELEPHANT"]);
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("CAT"));
        assert!(is_valid_word("hangman"));
        assert!(!is_valid_word("AT")); // Too short
        assert!(!is_valid_word("C4T")); // Contains digit
        assert!(!is_valid_word("ICE CREAM")); // Contains space
        assert!(!is_valid_word("")); // Empty
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("hangman_wordbank_unit_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file, "# fruit").unwrap();
            writeln!(file, "kiwi").unwrap();
            writeln!(file, "fig").unwrap();
            writeln!(file, "x").unwrap();
        }

        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["APPLE", "KIWI", "FIG"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let path = std::env::temp_dir().join("hangman_wordbank_does_not_exist.txt");
        let _ = std::fs::remove_file(&path);
        assert!(load_wordbank_from_file(&path).is_err());
    }

    #[test]
    fn test_default_path_ends_with_words_file() {
        if let Some(path) = default_wordbank_path() {
            assert!(path.ends_with("hangman/words.txt"));
        }
    }

    #[test]
    fn test_choose_word() {
        let mut rng = StdRng::seed_from_u64(7);
        let words = vec!["CAT".to_string(), "DOG".to_string()];
        for _ in 0..20 {
            let word = choose_word(&words, &mut rng).unwrap();
            assert!(words.contains(word));
        }
        assert!(choose_word(&[], &mut rng).is_none());
    }
}
