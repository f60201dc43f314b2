use crate::models::{ngrams, FrequencyTable, NGram};
use crate::types::{NGramSize, Token};
use crate::Error;

/// Counts the frequency of each `size`-token window in the given sequence.
///
/// # Arguments
/// * `tokens` - The lemmatized token sequence, in document order.
/// * `size` - The window size; 1 counts plain words.
///
/// # Returns
/// * A `FrequencyTable` keyed by n-gram. A sequence shorter than `size`
///   produces an empty table.
///
/// # Errors
/// * `Error::InvalidNGramSize` when `size` is zero.
///
/// # Example
/// ```
/// use word_analyzer::{count_ngram_frequencies, NGram};
///
/// let tokens: Vec<String> = ["cat", "sat", "cat", "sat"].iter().map(|t| t.to_string()).collect();
/// let bigrams = count_ngram_frequencies(&tokens, 2).unwrap();
/// assert_eq!(bigrams.count(&NGram::from(vec!["cat", "sat"])), 2);
/// assert_eq!(bigrams.count(&NGram::from(vec!["sat", "cat"])), 1);
/// ```
pub fn count_ngram_frequencies(
    tokens: &[Token],
    size: NGramSize,
) -> Result<FrequencyTable<NGram>, Error> {
    if size == 0 {
        return Err(Error::InvalidNGramSize(size));
    }

    Ok(ngrams(tokens, size).collect())
}
