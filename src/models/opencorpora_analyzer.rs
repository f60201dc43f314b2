use crate::models::MorphAnalyzer as TokenMorphAnalyzer;
use crate::types::{Token, TokenRef};
use crate::Error;
use log::debug;
use rsmorphy::prelude::*;

/// Russian morphological analyzer backed by the OpenCorpora dictionary.
///
/// Each parse yields the normal form (nominative singular for nouns, the
/// infinitive for verbs) of one reading of the token, most probable first.
/// Tokens not written in Cyrillic are reported as `Error::AnalysisFailure`.
pub struct OpenCorporaAnalyzer {
    morph: MorphAnalyzer,
}

impl OpenCorporaAnalyzer {
    /// Loads the bundled Russian dictionary.
    pub fn russian() -> Self {
        debug!("Loading Russian dictionary from '{}'", rsmorphy_dict_ru::DICT_PATH);

        Self {
            morph: MorphAnalyzer::from_file(rsmorphy_dict_ru::DICT_PATH),
        }
    }
}

impl TokenMorphAnalyzer for OpenCorporaAnalyzer {
    fn parse(&self, token: &TokenRef) -> Result<Vec<Token>, Error> {
        if token.is_empty() || !token.chars().all(is_cyrillic) {
            return Err(Error::AnalysisFailure(token.to_string()));
        }

        Ok(self
            .morph
            .parse(token)
            .into_iter()
            .map(|parsed| parsed.lex.get_normal_form(&self.morph).to_string())
            .collect())
    }
}

fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}
