pub mod count_ngram_frequencies;

pub use count_ngram_frequencies::count_ngram_frequencies;
