use crate::models::NGram;
use crate::types::Token;

/// How a top word is considered to appear in a bigram.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OverlapMatchMode {
    /// The word equals one of the bigram's tokens.
    #[default]
    Token,
    /// The word is a substring of the space-joined bigram. Partial words match
    /// too, e.g. "cat" matches "concatenate flow".
    Substring,
}

impl OverlapMatchMode {
    pub fn matches(self, word: &str, bigram: &NGram) -> bool {
        match self {
            OverlapMatchMode::Token => bigram.iter().any(|token| token == word),
            OverlapMatchMode::Substring => bigram.joined().contains(word),
        }
    }
}

/// Returns the bigrams containing at least one of `top_words`, in the order of
/// `top_bigrams`.
pub fn find_bigrams_containing_top_words<'a>(
    top_words: &[Token],
    top_bigrams: &'a [NGram],
    mode: OverlapMatchMode,
) -> Vec<&'a NGram> {
    top_bigrams
        .iter()
        .filter(|bigram| top_words.iter().any(|word| mode.matches(word, bigram)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<Token> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_token_mode_requires_whole_token() {
        let bigrams = vec![
            NGram::from(vec!["concatenate", "flow"]),
            NGram::from(vec!["black", "cat"]),
        ];

        let matches =
            find_bigrams_containing_top_words(&words(&["cat"]), &bigrams, OverlapMatchMode::Token);

        assert_eq!(matches, vec![&bigrams[1]]);
    }

    #[test]
    fn test_substring_mode_matches_partial_words() {
        let bigrams = vec![
            NGram::from(vec!["concatenate", "flow"]),
            NGram::from(vec!["black", "cat"]),
            NGram::from(vec!["dog", "house"]),
        ];

        let matches = find_bigrams_containing_top_words(
            &words(&["cat"]),
            &bigrams,
            OverlapMatchMode::Substring,
        );

        assert_eq!(matches, vec![&bigrams[0], &bigrams[1]]);
    }

    #[test]
    fn test_no_overlap() {
        let bigrams = vec![NGram::from(vec!["dog", "house"])];

        for mode in [OverlapMatchMode::Token, OverlapMatchMode::Substring] {
            assert!(find_bigrams_containing_top_words(&words(&["cat"]), &bigrams, mode).is_empty());
        }
    }

    #[test]
    fn test_default_mode_is_token() {
        assert_eq!(OverlapMatchMode::default(), OverlapMatchMode::Token);
    }
}
