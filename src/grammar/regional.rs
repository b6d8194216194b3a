use std::collections::HashSet;

use super::GrammarCorrector;
use crate::error::Result;
use crate::language::LanguageCode;

const HELPING_VERBS: &[&str] = &["हूँ", "है", "थे", "थी", "था", "रहा", "रही", "रहे", "कर", "किया", "किए"];

/// Moves the Hindi helping verb to the end of the sentence.
#[derive(Debug, Clone)]
pub struct RegionalCorrector {
    helping_verbs: HashSet<String>,
}

impl Default for RegionalCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionalCorrector {
    pub fn new() -> Self {
        Self {
            helping_verbs: HELPING_VERBS.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn is_helping_verb(&self, word: &str) -> bool {
        self.helping_verbs.contains(word)
    }
}

impl GrammarCorrector for RegionalCorrector {
    fn language(&self) -> LanguageCode {
        LanguageCode::Hindi
    }

    fn try_correct(&self, sentence: &str) -> Result<String> {
        let mut words: Vec<&str> = sentence.split_whitespace().collect();

        // A sentence already closed by a helping verb is left alone
        if words.last().is_none_or(|last| self.is_helping_verb(last)) {
            return Ok(sentence.to_string());
        }

        match words.iter().position(|word| self.is_helping_verb(word)) {
            Some(idx) => {
                let verb = words.remove(idx);
                words.push(verb);
                Ok(words.join(" "))
            }
            None => Ok(sentence.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helping_verb_moves_to_end() {
        let corrector = RegionalCorrector::new();
        assert_eq!(corrector.correct("मैं हूँ खुश"), "मैं खुश हूँ");
        assert_eq!(corrector.correct("वह था घर पर"), "वह घर पर था");
    }

    #[test]
    fn test_sentence_final_helping_verb_is_kept() {
        let corrector = RegionalCorrector::new();
        assert_eq!(corrector.correct("मैं खुश हूँ"), "मैं खुश हूँ");
    }

    #[test]
    fn test_no_helping_verb_is_unchanged() {
        let corrector = RegionalCorrector::new();
        assert_eq!(corrector.correct("मुझे पानी चाहिए"), "मुझे पानी चाहिए");
    }

    #[test]
    fn test_only_first_helping_verb_moves() {
        let corrector = RegionalCorrector::new();
        assert_eq!(corrector.correct("वह रहा खेल है बाहर"), "वह खेल है बाहर रहा");
    }

    #[test]
    fn test_correction_is_idempotent() {
        let corrector = RegionalCorrector::new();
        for sentence in ["मैं हूँ खुश", "वह रहा खेल है बाहर", "मुझे पानी चाहिए", "हम थे"] {
            let once = corrector.correct(sentence);
            assert_eq!(corrector.correct(&once), once, "not idempotent for '{}'", sentence);
        }
    }
}
