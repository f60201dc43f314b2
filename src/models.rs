pub mod bar_chart;
pub use bar_chart::{PlotSurface, TextBarChart};

pub mod config;
pub use config::AnalyzerConfig;

pub mod embedded_list_preprocessor;
pub use embedded_list_preprocessor::EmbeddedListPreprocessor;

pub mod error;
pub use error::Error;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod language;
pub use language::Language;

pub mod lemmatizer;
pub use lemmatizer::{
    lemmatize_tokens, lemmatizer_for_language, EnglishAnalyzer, Lemmatizer, MorphAnalyzer,
    RussianAnalyzer,
};

pub mod ngram;
pub use ngram::{ngrams, NGram};

pub mod opencorpora_analyzer;
pub use opencorpora_analyzer::OpenCorporaAnalyzer;

pub mod overlap;
pub use overlap::{find_bigrams_containing_top_words, OverlapMatchMode};

pub mod report_formatter;
pub use report_formatter::{
    plot_top_words, write_comparison_report, write_ngram_report, write_top_entries,
    write_word_report,
};

pub mod stop_word_filter;
pub use stop_word_filter::{filter_stop_words, StopWordFilter};

pub mod text_analyzer;
pub use text_analyzer::{
    analyze_file, analyze_text, read_text_from_file, AnalysisReport, ComparisonSummary,
    TextAnalyzer,
};

pub mod tokenizer;
pub use tokenizer::{tokenize, Tokenizer};
