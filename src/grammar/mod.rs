// Grammar correction
//
// Word-level translation keeps the source language's word order. The
// correctors here reorder that output into the target's canonical order:
// - dialect: bucket-based reordering for Gadhwali, driven by a tagger
// - regional: helping-verb placement for Hindi

pub mod dialect;
pub mod regional;
pub mod tagger;

use std::sync::Arc;
use tracing::{info, warn};

pub use dialect::{DialectCorrector, DialectRules};
pub use regional::RegionalCorrector;
pub use tagger::{LexiconTagger, PartOfSpeech, Relation, TaggedToken, Tagger};

use crate::error::Result;
use crate::language::LanguageCode;

/// Grammatical role a token plays within one correction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenRole {
    Subject,
    Verb,
    Auxiliary,
    Object,
    Modal,
    Preposition,
    Negation,
    Other,
}

/// Reorders a sentence into a target language's canonical word order.
pub trait GrammarCorrector: Send + Sync {
    /// Language whose grammar this corrector applies.
    fn language(&self) -> LanguageCode;

    /// Reorder the sentence, reporting any failure.
    fn try_correct(&self, sentence: &str) -> Result<String>;

    /// Best-effort correction: failures are logged and the input is returned.
    fn correct(&self, sentence: &str) -> String {
        if sentence.trim().is_empty() {
            return sentence.to_string();
        }

        match self.try_correct(sentence) {
            Ok(corrected) => {
                if corrected != sentence {
                    info!("Applied {} correction: {}", self.language().name(), corrected);
                }
                corrected
            }
            Err(e) => {
                warn!("{} correction failed: {}", self.language().name(), e);
                sentence.to_string()
            }
        }
    }
}

/// The correctors for every target that needs one.
pub struct GrammarCorrectors {
    regional: RegionalCorrector,
    dialect: DialectCorrector,
}

impl GrammarCorrectors {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self {
            regional: RegionalCorrector::new(),
            dialect: DialectCorrector::new(tagger),
        }
    }

    /// Corrector for the given target, `None` when its word order needs no repair.
    pub fn for_target(&self, target: LanguageCode) -> Option<&dyn GrammarCorrector> {
        match target {
            LanguageCode::Hindi => Some(&self.regional),
            LanguageCode::Gadhwali => Some(&self.dialect),
            LanguageCode::English => None,
        }
    }
}

impl Default for GrammarCorrectors {
    fn default() -> Self {
        Self::new(Arc::new(LexiconTagger::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correctors_cover_targets_needing_correction() {
        let correctors = GrammarCorrectors::default();
        for lang in LanguageCode::ALL {
            let corrector = correctors.for_target(lang);
            assert_eq!(corrector.is_some(), lang.requires_correction());
            if let Some(corrector) = corrector {
                assert_eq!(corrector.language(), lang);
            }
        }
    }

    #[test]
    fn test_blank_sentence_is_returned_as_is() {
        let correctors = GrammarCorrectors::default();
        let dialect = correctors.for_target(LanguageCode::Gadhwali).unwrap();
        assert_eq!(dialect.correct("  "), "  ");
    }
}
