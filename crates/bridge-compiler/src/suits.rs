//! Suit letter → suit symbol substitution
//!
//! Best effort: `c` also abbreviates other words in the notes, so the result
//! is for display only.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SUIT_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[cCdDhHsS]\b").unwrap());

/// Unicode symbol for a suit letter
#[must_use]
pub fn suit_symbol(letter: char) -> Option<char> {
    match letter.to_ascii_lowercase() {
        'c' => Some('♣'),
        'd' => Some('♦'),
        'h' => Some('♥'),
        's' => Some('♠'),
        _ => None,
    }
}

/// Replace standalone suit letters with suit symbols
///
/// Only whole words are replaced; letters inside larger tokens such as
/// `Kd9c` or `1c1d` stay as they are.
#[must_use]
pub fn convert_suits(text: &str) -> String {
    SUIT_LETTER
        .replace_all(text, |caps: &Captures<'_>| {
            caps[0]
                .chars()
                .next()
                .and_then(suit_symbol)
                .map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_letters_become_symbols() {
        assert_eq!(convert_suits("c and d"), "♣ and ♦");
        assert_eq!(convert_suits("H S"), "♥ ♠");
    }

    #[test]
    fn letters_inside_tokens_are_untouched() {
        assert_eq!(convert_suits("Kd9c"), "Kd9c");
        assert_eq!(convert_suits("1c1d"), "1c1d");
        assert_eq!(convert_suits("clubs"), "clubs");
    }

    #[test]
    fn punctuation_counts_as_a_boundary() {
        assert_eq!(convert_suits("long c; f1"), "long ♣; f1");
        assert_eq!(convert_suits("c+h/long c"), "♣+♥/long ♣");
    }

    #[test]
    fn other_letters_are_left_alone() {
        assert_eq!(convert_suits("x y z M"), "x y z M");
    }
}
