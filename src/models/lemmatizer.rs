use crate::constants::{
    COMPRESSED_ENGLISH_NOUNS_BYTE_ARRAY, COMPRESSED_ENGLISH_NOUN_EXCEPTIONS_BYTE_ARRAY,
};
use crate::models::{EmbeddedListPreprocessor, Language, OpenCorporaAnalyzer};
use crate::types::{LanguageCode, Token, TokenRef, TokenSequence};
use crate::Error;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Regular plural endings and their singular replacements, tried on nouns
/// missing from the noun dictionary.
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Maps a token to its base form.
///
/// Implementations are length preserving: every input token yields exactly one
/// output token.
pub trait Lemmatizer {
    fn lemmatize(&self, token: &TokenRef) -> Token;

    fn lemmatize_all(&self, tokens: &[Token]) -> TokenSequence {
        tokens.iter().map(|token| self.lemmatize(token)).collect()
    }
}

/// Morphological analysis of a single token.
pub trait MorphAnalyzer {
    /// Returns the candidate normal forms of `token`, most likely first.
    fn parse(&self, token: &TokenRef) -> Result<Vec<Token>, Error>;
}

/// Russian lemmatizer: takes the first candidate of the morphological analyzer.
///
/// When analysis fails, or yields no candidate, the original token is kept.
pub struct RussianAnalyzer<A: MorphAnalyzer = OpenCorporaAnalyzer> {
    analyzer: A,
}

impl RussianAnalyzer {
    pub fn new() -> Self {
        Self::with_analyzer(OpenCorporaAnalyzer::russian())
    }
}

impl Default for RussianAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: MorphAnalyzer> RussianAnalyzer<A> {
    pub fn with_analyzer(analyzer: A) -> Self {
        Self { analyzer }
    }
}

impl<A: MorphAnalyzer> Lemmatizer for RussianAnalyzer<A> {
    fn lemmatize(&self, token: &TokenRef) -> Token {
        match self.analyzer.parse(token) {
            Ok(candidates) => candidates
                .into_iter()
                .next()
                .unwrap_or_else(|| token.to_string()),
            Err(e) => {
                debug!("Keeping original token: {}", e);
                token.to_string()
            }
        }
    }
}

/// English lemmatizer treating every token as a noun.
///
/// Lookup order:
/// 1. irregular plurals from the exception dictionary (`mice` -> `mouse`);
/// 2. tokens already in the noun dictionary are returned as is;
/// 3. regular plural endings are detached, keeping the shortest result found
///    in the noun dictionary (`studies` -> `study`, `boxes` -> `box`).
///
/// Anything else, including words which are not nouns, is returned unchanged,
/// so every output is a fixed point.
pub struct EnglishAnalyzer {
    noun_exceptions: HashMap<String, String>,
    nouns: HashSet<String>,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self, Error> {
        let exceptions = EmbeddedListPreprocessor::extract_pairs_from_bytes(
            COMPRESSED_ENGLISH_NOUN_EXCEPTIONS_BYTE_ARRAY,
            "Inflected",
            "Lemma",
        )?;
        let nouns = EmbeddedListPreprocessor::extract_column_from_bytes(
            COMPRESSED_ENGLISH_NOUNS_BYTE_ARRAY,
            "Noun",
        )?;

        debug!(
            "Loaded {} English nouns and {} irregular plurals",
            nouns.len(),
            exceptions.len()
        );

        Ok(Self::from_dictionary(nouns, exceptions))
    }

    /// Builds the analyzer from explicit noun and `(inflected, lemma)` lists.
    ///
    /// Exception lemmas count as dictionary nouns.
    pub fn from_dictionary<N, E>(nouns: N, exceptions: E) -> Self
    where
        N: IntoIterator<Item = String>,
        E: IntoIterator<Item = (String, String)>,
    {
        let noun_exceptions: HashMap<String, String> = exceptions.into_iter().collect();
        let mut nouns: HashSet<String> = nouns.into_iter().collect();
        nouns.extend(noun_exceptions.values().cloned());

        Self {
            noun_exceptions,
            nouns,
        }
    }

    pub fn is_noun(&self, token: &TokenRef) -> bool {
        self.nouns.contains(token)
    }

    fn detach_plural_suffix(&self, token: &TokenRef) -> Option<Token> {
        NOUN_SUFFIX_RULES
            .iter()
            .filter_map(|&(suffix, replacement)| {
                token
                    .strip_suffix(suffix)
                    .filter(|stem| !stem.is_empty())
                    .map(|stem| format!("{}{}", stem, replacement))
            })
            .filter(|candidate| self.is_noun(candidate))
            .min_by_key(|candidate| candidate.chars().count())
    }
}

impl Lemmatizer for EnglishAnalyzer {
    fn lemmatize(&self, token: &TokenRef) -> Token {
        if let Some(lemma) = self.noun_exceptions.get(token) {
            return lemma.clone();
        }

        if self.is_noun(token) {
            return token.to_string();
        }

        self.detach_plural_suffix(token)
            .unwrap_or_else(|| token.to_string())
    }
}

/// Selects the lemmatizer for `language`. Called once per run.
pub fn lemmatizer_for_language(language: Language) -> Result<Box<dyn Lemmatizer>, Error> {
    let lemmatizer: Box<dyn Lemmatizer> = match language {
        Language::English => Box::new(EnglishAnalyzer::new()?),
        Language::Russian => Box::new(RussianAnalyzer::new()),
    };

    Ok(lemmatizer)
}

/// Lemmatizes `tokens` with the lemmatizer of the language identified by
/// `language_code`.
pub fn lemmatize_tokens(
    tokens: &[Token],
    language_code: &LanguageCode,
) -> Result<TokenSequence, Error> {
    let language = Language::from_code(language_code)?;
    let lemmatizer = lemmatizer_for_language(language)?;

    Ok(lemmatizer.lemmatize_all(tokens))
}
