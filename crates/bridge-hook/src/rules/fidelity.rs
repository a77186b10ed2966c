use once_cell::sync::Lazy;
use regex::Regex;

use super::{Category, Issue, Rule};
use crate::input::ProposedWrite;

static ELABORATIVE: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        r"(?i)(detailed|comprehensive|extensive)\s+(explanation|description|analysis)",
        r"(?i)(let's|we should|you can|one might)",
        r"(?i)(comprehensive|thorough|detailed)\s+(guide|overview|summary)",
    ]
    .map(|pattern| Regex::new(pattern).unwrap())
});

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsomething\b").unwrap());

const SUIT_WORDS: [&str; 4] = ["spades", "hearts", "diamonds", "clubs"];
const SUIT_SYMBOLS: [char; 4] = ['♠', '♥', '♦', '♣'];

/// Wording must stay as close to the source notes as possible
#[derive(Debug, Clone, Copy, Default)]
pub struct FidelityRules;

impl Rule for FidelityRules {
    fn name(&self) -> &'static str {
        "fidelity"
    }

    fn check(&self, write: &ProposedWrite) -> Vec<Issue> {
        let content = write.content.as_str();
        let mut issues = Vec::new();

        if ELABORATIVE.iter().any(|pattern| pattern.is_match(content)) {
            issues.push(Issue::new(
                Category::Fidelity,
                "Potentially made-up content detected: avoid elaborative language",
            ));
        }

        if PLACEHOLDER.is_match(content) && !content.contains("Something") {
            issues.push(Issue::new(
                Category::Fidelity,
                "Use 'Something' (capitalized) exactly as in PDF",
            ));
        }

        if SUIT_WORDS.iter().any(|word| content.contains(word))
            && !content.contains(SUIT_SYMBOLS)
        {
            issues.push(Issue::new(
                Category::Fidelity,
                "Use bridge symbols (♠♥♦♣) not word names",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(content: &str) -> Vec<String> {
        FidelityRules
            .check(&ProposedWrite::new(content, "notes.md"))
            .into_iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn elaborative_language_is_reported_once() {
        let found = messages("A Comprehensive   Explanation; let's add a thorough guide");
        assert_eq!(
            found,
            ["Potentially made-up content detected: avoid elaborative language"]
        );
        assert!(messages("We Should bid 2c").len() == 1);
        assert!(messages("2c is a relay").is_empty());
    }

    #[test]
    fn lowercase_placeholder_needs_capitalised_form() {
        assert_eq!(
            messages("bid something else"),
            ["Use 'Something' (capitalized) exactly as in PDF"]
        );
        assert!(messages("Something, then something").is_empty());
        assert!(messages("somethings").is_empty());
    }

    #[test]
    fn suit_words_need_a_symbol() {
        assert_eq!(
            messages("5 hearts"),
            ["Use bridge symbols (♠♥♦♣) not word names"]
        );
        assert!(messages("5 hearts (5♥)").is_empty());
        assert!(messages("5 Hearts").is_empty());
    }
}
