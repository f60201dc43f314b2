use crate::types::{NGramSize, Token};
use std::fmt;
use std::ops::Deref;

/// An ordered window of consecutive tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NGram(Vec<Token>);

impl NGram {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn size(&self) -> NGramSize {
        self.0.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl Deref for NGram {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&[Token]> for NGram {
    fn from(window: &[Token]) -> Self {
        Self(window.to_vec())
    }
}

impl From<Vec<&str>> for NGram {
    fn from(tokens: Vec<&str>) -> Self {
        Self(tokens.into_iter().map(|token| token.to_string()).collect())
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

/// Iterates over all contiguous windows of `size` tokens, in order.
///
/// Yields `tokens.len() - size + 1` windows, or none when `size` exceeds the
/// sequence length. A `size` of zero yields nothing.
pub fn ngrams(tokens: &[Token], size: NGramSize) -> impl Iterator<Item = NGram> + '_ {
    let windows = if size == 0 { None } else { Some(tokens.windows(size)) };

    windows.into_iter().flatten().map(NGram::from)
}
