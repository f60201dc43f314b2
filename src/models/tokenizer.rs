use crate::types::{Token, TokenSequence};
use unicode_segmentation::UnicodeSegmentation;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer {
    pub merge_hyphenated_line_breaks: bool,
}

impl Tokenizer {
    /// Configuration for arbitrary text doc parsing
    pub fn text_doc_parser() -> Self {
        Self {
            merge_hyphenated_line_breaks: false,
        }
    }

    /// Configuration for typeset text, where words may be hyphenated across lines.
    pub fn typeset_text_parser() -> Self {
        Self {
            merge_hyphenated_line_breaks: true,
        }
    }

    /// Splits the text into lowercase alphabetic tokens, in document order.
    ///
    /// Words are found with the Unicode word-boundary rules (UAX #29), so
    /// punctuation between two words separates them (`hello,world`,
    /// `cat/dog`, `сказал,—и`). Contractions and possessives keep their head
    /// word (`Pierre's` -> `pierre`, `don't` -> `do`) and drop the clitic.
    /// A word which still contains any non-alphabetic character (digits,
    /// inner periods) is dropped as a whole.
    pub fn tokenize(self, text: &str) -> TokenSequence {
        let merged;
        let text = if self.merge_hyphenated_line_breaks {
            merged = text.replace("-\r\n", "").replace("-\n", "");
            merged.as_str()
        } else {
            text
        };

        text.unicode_words()
            .filter_map(Self::normalize_word)
            .collect()
    }

    fn normalize_word(word: &str) -> Option<Token> {
        let head = Self::strip_clitic(word);

        if head.is_empty() || !head.chars().all(char::is_alphabetic) {
            return None;
        }

        Some(head.to_lowercase())
    }

    /// Returns the part of `word` before its first apostrophe, with the `n`
    /// of a trailing `n't` moved to the clitic.
    fn strip_clitic(word: &str) -> &str {
        let Some((head, clitic)) = word.split_once(APOSTROPHES) else {
            return word;
        };

        if clitic.eq_ignore_ascii_case("t") {
            if let Some(stripped) = head.strip_suffix(['n', 'N']) {
                return stripped;
            }
        }

        head
    }
}

/// Tokenizes `text` with the default text doc parser.
pub fn tokenize(text: &str) -> TokenSequence {
    Tokenizer::text_doc_parser().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = tokenize("The Cat sat, on the (mat).");
        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_splits_on_inner_punctuation() {
        assert_eq!(tokenize("hello,world"), vec!["hello", "world"]);
        assert_eq!(tokenize("cat/dog"), vec!["cat", "dog"]);
        assert_eq!(tokenize("well-known"), vec!["well", "known"]);
    }

    #[test]
    fn test_keeps_head_of_contractions_and_possessives() {
        assert_eq!(tokenize("Pierre's house"), vec!["pierre", "house"]);
        assert_eq!(tokenize("don't"), vec!["do"]);
        assert_eq!(tokenize("Natasha\u{2019}s ball"), vec!["natasha", "ball"]);
    }

    #[test]
    fn test_drops_numbers_and_mixed_words() {
        let tokens = tokenize("route 66 and abc123 or 3.14 ok");
        assert_eq!(tokens, vec!["route", "and", "or", "ok"]);
    }

    #[test]
    fn test_empty_and_punctuation_only_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("... !!! -- ?").is_empty());
    }

    #[test]
    fn test_cyrillic_text() {
        assert_eq!(
            tokenize("Война и МИР, 1869 год."),
            vec!["война", "и", "мир", "год"]
        );
        assert_eq!(tokenize("сказал,—и ушёл"), vec!["сказал", "и", "ушёл"]);
    }

    #[test]
    fn test_tokens_are_lowercase_alphabetic() {
        let samples = [
            "a b c",
            "hello,world foo-bar",
            "Мама мыла раму; 2 раза!",
            "  spaced\t\tout\nlines  ",
        ];

        for sample in samples {
            for token in tokenize(sample) {
                assert!(!token.is_empty());
                assert!(token.chars().all(|c| c.is_alphabetic()));
                assert_eq!(token, token.to_lowercase());
            }
        }
    }

    #[test]
    fn test_merge_hyphenated_line_breaks() {
        let text = "an inter-\nnational treaty";

        assert_eq!(
            Tokenizer::typeset_text_parser().tokenize(text),
            vec!["an", "international", "treaty"]
        );

        // Left alone by default: the hyphen is a word boundary
        assert_eq!(
            Tokenizer::text_doc_parser().tokenize(text),
            vec!["an", "inter", "national", "treaty"]
        );
    }
}
