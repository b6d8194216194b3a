use std::collections::HashSet;

use crate::error::{BoliError, Result};

/// Universal part-of-speech category attached by a tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Adposition,
    Particle,
    Other,
}

/// Dependency relation of a token to its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// nsubj, nsubj:pass
    Subject,
    /// obj, iobj, dobj, pobj
    Object,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
    pub relation: Relation,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech, relation: Relation) -> Self {
        Self {
            text: text.into(),
            pos,
            relation,
        }
    }
}

/// Part-of-speech and dependency tagging capability.
pub trait Tagger: Send + Sync {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>>;
}

const PRONOUNS: &[&str] = &[
    "म्यर", "मै", "मैं", "तू", "तुं", "तुम", "तुमि", "ऊ", "अमि", "उनि", "हम", "वह", "वे",
];

const VERB_STEMS: &[&str] = &[
    "खेल", "खेलण", "खाण", "खांदु", "पीण", "जाण", "जौन", "जां", "आण", "बोलण", "करण", "करणी",
    "पढ़न", "चलण",
];

const AUXILIARIES: &[&str] = &["छू", "च", "हौ", "थ", "था", "छै", "छैन", "छौं", "छौ", "छा"];

/// Context-free lexicon tagger for Devanagari Gadhwali text.
///
/// Pronouns are tagged as subjects, known verb stems as verbs and helping
/// verbs as auxiliaries; every other token is `Other`. A token's tag never
/// depends on its position, so reordered output tags the same way.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    subjects: HashSet<String>,
    verbs: HashSet<String>,
    auxiliaries: HashSet<String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new(PRONOUNS, VERB_STEMS, AUXILIARIES)
    }
}

impl LexiconTagger {
    pub fn new(subjects: &[&str], verbs: &[&str], auxiliaries: &[&str]) -> Self {
        let to_set = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<HashSet<_>>();
        Self {
            subjects: to_set(subjects),
            verbs: to_set(verbs),
            auxiliaries: to_set(auxiliaries),
        }
    }

    fn tag_word(&self, word: &str) -> TaggedToken {
        if self.subjects.contains(word) {
            TaggedToken::new(word, PartOfSpeech::Pronoun, Relation::Subject)
        } else if self.verbs.contains(word) {
            TaggedToken::new(word, PartOfSpeech::Verb, Relation::Other)
        } else if self.auxiliaries.contains(word) {
            TaggedToken::new(word, PartOfSpeech::Auxiliary, Relation::Other)
        } else {
            TaggedToken::new(word, PartOfSpeech::Other, Relation::Other)
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>> {
        if sentence.trim().is_empty() {
            return Err(BoliError::Correction("Empty sentence provided".to_string()));
        }

        Ok(sentence
            .split_whitespace()
            .map(|word| self.tag_word(word))
            .collect())
    }
}
