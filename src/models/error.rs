use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The input path does not exist.
    FileNotFound(PathBuf),
    /// The language code is not one of the supported codes.
    InvalidLanguage(String),
    /// A morphological analyzer could not analyze a single token.
    AnalysisFailure(String),
    /// An n-gram window size of zero was requested.
    InvalidNGramSize(usize),
    ParserError(String),
    UnexpectedError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(f, "File Not Found: '{}'", path.display()),
            Error::InvalidLanguage(code) => write!(
                f,
                "Invalid Language: '{}' (expected one of: en, ru)",
                code
            ),
            Error::AnalysisFailure(token) => write!(f, "Analysis Failure: '{}'", token),
            Error::InvalidNGramSize(size) => write!(
                f,
                "Invalid N-gram Size: {} (window size must be at least 1)",
                size
            ),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::UnexpectedError(msg) => write!(f, "Unexpected Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidLanguage("fr".to_string()).to_string(),
            "Invalid Language: 'fr' (expected one of: en, ru)"
        );
        assert_eq!(
            Error::FileNotFound(PathBuf::from("missing.txt")).to_string(),
            "File Not Found: 'missing.txt'"
        );
        assert_eq!(
            Error::InvalidNGramSize(0).to_string(),
            "Invalid N-gram Size: 0 (window size must be at least 1)"
        );
    }

    #[test]
    fn test_io_error_is_exposed_as_source() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(err.source().is_some());
        assert!(Error::AnalysisFailure("x".to_string()).source().is_none());
    }
}
