#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static STOP_WORDS_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "stop_words.csv"));

pub static ENGLISH_NOUN_EXCEPTIONS_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "english_noun_exceptions.csv"));

pub static ENGLISH_NOUNS_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "english_nouns.csv"));

pub static COMPRESSED_STOP_WORDS_FILE_NAME: &str = "stop_words.csv.gz";

pub static COMPRESSED_ENGLISH_NOUN_EXCEPTIONS_FILE_NAME: &str = "english_noun_exceptions.csv.gz";

pub static COMPRESSED_ENGLISH_NOUNS_FILE_NAME: &str = "english_nouns.csv.gz";
