use crate::constants::{COMPRESSED_STOP_WORDS_BYTE_ARRAY, RUSSIAN_EXTRA_STOP_WORDS};
use crate::models::{EmbeddedListPreprocessor, Language};
use crate::types::{LanguageCode, Token, TokenRef, TokenSequence};
use crate::Error;
use log::debug;
use std::collections::HashSet;

/// Removes language-specific stop words from a token sequence.
#[derive(Debug, Clone)]
pub struct StopWordFilter {
    language: Language,
    stop_words: HashSet<String>,
}

impl StopWordFilter {
    /// Builds the filter for `language` from the embedded stop-word lists.
    ///
    /// The Russian set additionally contains `RUSSIAN_EXTRA_STOP_WORDS`.
    pub fn for_language(language: Language) -> Result<Self, Error> {
        let mut stop_words: HashSet<String> = EmbeddedListPreprocessor::extract_pairs_from_bytes(
            COMPRESSED_STOP_WORDS_BYTE_ARRAY,
            "Language",
            "Word",
        )?
        .into_iter()
        .filter(|(code, _)| code == language.code())
        .map(|(_, word)| word)
        .collect();

        if language == Language::Russian {
            stop_words.extend(RUSSIAN_EXTRA_STOP_WORDS.iter().map(|word| word.to_string()));
        }

        if stop_words.is_empty() {
            return Err(Error::ParserError(format!(
                "No stop words embedded for language '{}'",
                language.code()
            )));
        }

        debug!(
            "Loaded {} stop words for language '{}'",
            stop_words.len(),
            language
        );

        Ok(Self {
            language,
            stop_words,
        })
    }

    /// Builds a filter from an explicit word list.
    pub fn from_words(language: Language, words: &[&str]) -> Self {
        Self {
            language,
            stop_words: words.iter().map(|word| word.to_lowercase()).collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_stop_word(&self, token: &TokenRef) -> bool {
        self.stop_words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Returns the tokens which are not stop words, in their original order.
    pub fn filter(&self, tokens: &[Token]) -> TokenSequence {
        tokens
            .iter()
            .filter(|token| !self.is_stop_word(token))
            .cloned()
            .collect()
    }
}

/// Removes the stop words of the language identified by `language_code`.
///
/// # Errors
///
/// Returns `Error::InvalidLanguage` for codes other than `en` and `ru`.
pub fn filter_stop_words(
    tokens: &[Token],
    language_code: &LanguageCode,
) -> Result<TokenSequence, Error> {
    let language = Language::from_code(language_code)?;
    let filter = StopWordFilter::for_language(language)?;

    Ok(filter.filter(tokens))
}
