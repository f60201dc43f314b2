use crate::models::{AnalyzerConfig, OverlapMatchMode};
use crate::types::NGramSize;

pub const LANGUAGE_EN: &str = "en";
pub const LANGUAGE_RU: &str = "ru";
pub const SUPPORTED_LANGUAGES: &[&str] = &[LANGUAGE_EN, LANGUAGE_RU];

/// Entries merged into the standard Russian stop-word list.
pub const RUSSIAN_EXTRA_STOP_WORDS: &[&str] = &["это", "свой", "свои", "весь"];

pub const DEFAULT_TOP_K: usize = 5;

pub const DEFAULT_NGRAM_SIZES: &[NGramSize] = &[1, 2, 3];

pub const DEFAULT_ANALYZER_CONFIG: AnalyzerConfig = AnalyzerConfig {
    top_k: DEFAULT_TOP_K,
    overlap_match_mode: OverlapMatchMode::Token,
    merge_hyphenated_line_breaks: false,
};

/// Width, in characters, of the longest bar drawn by `TextBarChart`.
pub const DEFAULT_BAR_CHART_WIDTH: usize = 40;

pub static COMPRESSED_STOP_WORDS_BYTE_ARRAY: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/stop_words.csv.gz"));

pub static COMPRESSED_ENGLISH_NOUN_EXCEPTIONS_BYTE_ARRAY: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/english_noun_exceptions.csv.gz"));

pub static COMPRESSED_ENGLISH_NOUNS_BYTE_ARRAY: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/english_nouns.csv.gz"));
