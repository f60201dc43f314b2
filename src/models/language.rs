use crate::constants::{LANGUAGE_EN, LANGUAGE_RU};
use crate::types::LanguageCode;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// A language the analyzer has stop-word lists and a lemmatizer for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Resolves a two-letter language code.
    ///
    /// Codes are matched exactly; anything other than `en` or `ru` is rejected
    /// rather than defaulting to English.
    pub fn from_code(code: &LanguageCode) -> Result<Self, Error> {
        match code {
            LANGUAGE_EN => Ok(Language::English),
            LANGUAGE_RU => Ok(Language::Russian),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => LANGUAGE_EN,
            Language::Russian => LANGUAGE_RU,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::from_code(code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_codes() {
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
        assert_eq!(Language::from_code("ru").unwrap(), Language::Russian);
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Russian);
    }

    #[test]
    fn test_unsupported_code_is_rejected() {
        match Language::from_code("fr") {
            Err(Error::InvalidLanguage(code)) => assert_eq!(code, "fr"),
            other => panic!("Expected InvalidLanguage, got {:?}", other),
        }

        // No case folding or aliasing
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("english").is_err());
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_code_round_trip_and_names() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Russian.to_string(), "ru");
        assert_eq!(Language::Russian.name(), "Russian");
    }
}
