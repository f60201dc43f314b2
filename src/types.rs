// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
///
/// A token is always lowercase and made of alphabetic characters only.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// An ordered sequence of tokens, in document order.
pub type TokenSequence = Vec<Token>;

/// The size of an n-gram window (1 = words, 2 = bigrams, 3 = trigrams).
pub type NGramSize = usize;

/// Represents the total number of occurrences of an item within a text document.
pub type Frequency = usize;

/// A two-letter language code as supplied by the caller (e.g. `"en"`).
pub type LanguageCode = str;
