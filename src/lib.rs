#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod constants;
pub use constants::{
    DEFAULT_ANALYZER_CONFIG, DEFAULT_NGRAM_SIZES, DEFAULT_TOP_K, RUSSIAN_EXTRA_STOP_WORDS,
    SUPPORTED_LANGUAGES,
};
pub mod models;
pub use models::{
    analyze_file, analyze_text, filter_stop_words, lemmatize_tokens, plot_top_words,
    read_text_from_file, tokenize, write_comparison_report, write_ngram_report,
    write_word_report, AnalysisReport, AnalyzerConfig, ComparisonSummary, EnglishAnalyzer, Error,
    FrequencyTable, Language, Lemmatizer, MorphAnalyzer, NGram, OpenCorporaAnalyzer,
    OverlapMatchMode, PlotSurface, RussianAnalyzer, StopWordFilter, TextAnalyzer, TextBarChart,
    Tokenizer,
};
pub mod types;
mod utils;
pub use types::{Frequency, LanguageCode, NGramSize, Token, TokenRef, TokenSequence};
pub use utils::count_ngram_frequencies;
