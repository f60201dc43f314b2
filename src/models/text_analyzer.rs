use crate::models::{
    find_bigrams_containing_top_words, lemmatizer_for_language, AnalyzerConfig, FrequencyTable,
    Language, Lemmatizer, NGram, OverlapMatchMode, StopWordFilter, Tokenizer,
};
use crate::types::{Frequency, LanguageCode, NGramSize, Token, TokenSequence};
use crate::utils::count_ngram_frequencies;
use crate::Error;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a UTF-8 text document.
///
/// # Errors
///
/// `Error::FileNotFound` when the path does not exist; `Error::UnexpectedError`
/// for any other failure (permissions, a directory, invalid UTF-8).
pub fn read_text_from_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::UnexpectedError(format!(
            "Failed to read '{}': {}",
            path.display(),
            e
        )),
    })
}

/// Frequency tables produced for one document.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    language: Language,
    token_count: usize,
    tables: BTreeMap<NGramSize, FrequencyTable<NGram>>,
}

impl AnalysisReport {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of tokens left after stop-word removal and lemmatization.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// The computed window sizes, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = NGramSize> + '_ {
        self.tables.keys().copied()
    }

    pub fn table(&self, size: NGramSize) -> Option<&FrequencyTable<NGram>> {
        self.tables.get(&size)
    }

    /// Top `k` entries for `size`, or nothing if that size was not requested.
    pub fn most_common(&self, size: NGramSize, k: usize) -> Vec<(&NGram, Frequency)> {
        self.table(size)
            .map(|table| table.most_common(k))
            .unwrap_or_default()
    }

    pub fn top_words(&self, k: usize) -> Vec<(Token, Frequency)> {
        self.most_common(1, k)
            .into_iter()
            .map(|(word, count)| (word.joined(), count))
            .collect()
    }

    pub fn top_bigrams(&self, k: usize) -> Vec<(&NGram, Frequency)> {
        self.most_common(2, k)
    }

    pub fn top_trigrams(&self, k: usize) -> Vec<(&NGram, Frequency)> {
        self.most_common(3, k)
    }

    /// Cross-references the top words against the top bigrams.
    pub fn compare_top_words_with_bigrams(
        &self,
        k: usize,
        mode: OverlapMatchMode,
    ) -> ComparisonSummary {
        let top_words: Vec<Token> = self.top_words(k).into_iter().map(|(word, _)| word).collect();
        let top_bigrams: Vec<NGram> = self
            .top_bigrams(k)
            .into_iter()
            .map(|(bigram, _)| bigram.clone())
            .collect();
        let matches = find_bigrams_containing_top_words(&top_words, &top_bigrams, mode)
            .into_iter()
            .cloned()
            .collect();

        ComparisonSummary {
            top_words,
            top_bigrams,
            matches,
        }
    }
}

/// Result of cross-referencing top words with top bigrams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub top_words: Vec<Token>,
    pub top_bigrams: Vec<NGram>,
    /// Top bigrams containing at least one top word.
    pub matches: Vec<NGram>,
}

/// Normalizes text documents of one language and counts their n-grams.
///
/// The stop-word set and lemmatizer are built once, when the analyzer is
/// created, and reused for every document.
pub struct TextAnalyzer {
    language: Language,
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    stop_word_filter: StopWordFilter,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl TextAnalyzer {
    pub fn new(language: Language, config: AnalyzerConfig) -> Result<Self, Error> {
        let lemmatizer = lemmatizer_for_language(language)?;
        Self::with_lemmatizer(language, config, lemmatizer)
    }

    /// Resolves `language_code` first, so unsupported codes fail before any
    /// resource is loaded.
    pub fn from_language_code(
        language_code: &LanguageCode,
        config: AnalyzerConfig,
    ) -> Result<Self, Error> {
        let language = Language::from_code(language_code)?;
        Self::new(language, config)
    }

    pub fn with_lemmatizer(
        language: Language,
        config: AnalyzerConfig,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Result<Self, Error> {
        let stop_word_filter = StopWordFilter::for_language(language)?;
        let tokenizer = Tokenizer {
            merge_hyphenated_line_breaks: config.merge_hyphenated_line_breaks,
        };

        Ok(Self {
            language,
            config,
            tokenizer,
            stop_word_filter,
            lemmatizer,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Tokenizes, removes stop words and lemmatizes `text`.
    pub fn normalize(&self, text: &str) -> TokenSequence {
        let tokens = self.tokenizer.tokenize(text);
        let filtered = self.stop_word_filter.filter(&tokens);
        let lemmatized = self.lemmatizer.lemmatize_all(&filtered);

        debug!(
            "Normalized {} tokens into {} after stop-word removal",
            tokens.len(),
            lemmatized.len()
        );

        lemmatized
    }

    /// Counts the n-grams of every requested size in `text`.
    ///
    /// Duplicate sizes are counted once.
    pub fn analyze_text(
        &self,
        text: &str,
        ngram_sizes: &[NGramSize],
    ) -> Result<AnalysisReport, Error> {
        if let Some(&size) = ngram_sizes.iter().find(|&&size| size == 0) {
            return Err(Error::InvalidNGramSize(size));
        }

        let tokens = self.normalize(text);

        let mut tables = BTreeMap::new();
        for &size in ngram_sizes {
            if tables.contains_key(&size) {
                continue;
            }

            let table = count_ngram_frequencies(&tokens, size)?;
            debug!("Counted {} distinct {}-grams", table.len(), size);
            tables.insert(size, table);
        }

        Ok(AnalysisReport {
            language: self.language,
            token_count: tokens.len(),
            tables,
        })
    }

    /// Reads the document at `path` and analyzes it.
    pub fn analyze_file<P: AsRef<Path>>(
        &self,
        path: P,
        ngram_sizes: &[NGramSize],
    ) -> Result<AnalysisReport, Error> {
        let path = path.as_ref();
        let text = read_text_from_file(path)?;

        info!(
            "Analyzing '{}' ({} bytes, language '{}')",
            path.display(),
            text.len(),
            self.language
        );

        self.analyze_text(&text, ngram_sizes)
    }
}

/// Analyzes `text` with the default configuration.
pub fn analyze_text(
    text: &str,
    language_code: &LanguageCode,
    ngram_sizes: &[NGramSize],
) -> Result<AnalysisReport, Error> {
    TextAnalyzer::from_language_code(language_code, AnalyzerConfig::default())?
        .analyze_text(text, ngram_sizes)
}

/// Reads and analyzes the document at `path` with the default configuration.
///
/// The language code is validated before the file is touched.
pub fn analyze_file<P: AsRef<Path>>(
    path: P,
    language_code: &LanguageCode,
    ngram_sizes: &[NGramSize],
) -> Result<AnalysisReport, Error> {
    TextAnalyzer::from_language_code(language_code, AnalyzerConfig::default())?
        .analyze_file(path, ngram_sizes)
}
