use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

use super::{GrammarCorrector, PartOfSpeech, Relation, TaggedToken, Tagger, TokenRole};
use crate::error::Result;
use crate::language::LanguageCode;

const HELPING_VERBS: &[&str] = &["छू", "च", "हौ", "थ", "छै", "छैन", "छौं", "छौ"];
const COPULAS: &[&str] = &["छू", "च", "हौ", "थ", "था", "छै", "छौं", "छौ", "छा"];
const MODALS: &[&str] = &["चौन", "चाहू", "सकदु", "पैदु", "लैदु", "चाहिन्दु"];
const PREPOSITIONS: &[&str] = &["में", "पर", "से", "को", "के लिए", "तैं", "कैं", "मा", "बटी", "कन"];
const NEGATIONS: &[&str] = &["नै", "कस", "न", "नैं", "नी", "निच"];

/// Closed word classes and bucket orders for one dialect.
#[derive(Debug, Clone)]
pub struct DialectRules {
    pub helping_verbs: HashSet<String>,
    pub copulas: HashSet<String>,
    pub modals: HashSet<String>,
    pub prepositions: HashSet<String>,
    pub negations: HashSet<String>,
    /// Order used for sentences with a main verb
    pub canonical_order: Vec<TokenRole>,
    /// Order used when a copula stands in for the missing verb
    pub copular_order: Vec<TokenRole>,
}

impl DialectRules {
    pub fn gadhwali() -> Self {
        let to_set = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<HashSet<_>>();
        Self {
            helping_verbs: to_set(HELPING_VERBS),
            copulas: to_set(COPULAS),
            modals: to_set(MODALS),
            prepositions: to_set(PREPOSITIONS),
            negations: to_set(NEGATIONS),
            canonical_order: vec![
                TokenRole::Subject,
                TokenRole::Object,
                TokenRole::Negation,
                TokenRole::Verb,
                TokenRole::Auxiliary,
                TokenRole::Modal,
                TokenRole::Preposition,
                TokenRole::Other,
            ],
            copular_order: vec![
                TokenRole::Subject,
                TokenRole::Object,
                TokenRole::Other,
                TokenRole::Negation,
                TokenRole::Modal,
                TokenRole::Preposition,
                TokenRole::Auxiliary,
            ],
        }
    }

    /// Role of a single tagged token. Earlier checks take precedence.
    pub fn classify(&self, token: &TaggedToken) -> TokenRole {
        let text = token.text.as_str();
        if token.relation == Relation::Subject {
            TokenRole::Subject
        } else if token.pos == PartOfSpeech::Verb {
            TokenRole::Verb
        } else if token.pos == PartOfSpeech::Auxiliary || self.helping_verbs.contains(text) {
            TokenRole::Auxiliary
        } else if token.relation == Relation::Object {
            TokenRole::Object
        } else if self.modals.contains(text) {
            TokenRole::Modal
        } else if self.prepositions.contains(text) {
            TokenRole::Preposition
        } else if self.negations.contains(text) {
            TokenRole::Negation
        } else {
            TokenRole::Other
        }
    }
}

#[derive(Debug, Default)]
struct Buckets {
    roles: HashMap<TokenRole, Vec<String>>,
}

impl Buckets {
    fn push(&mut self, role: TokenRole, text: &str) {
        self.roles.entry(role).or_default().push(text.to_string());
    }

    fn has(&self, role: TokenRole) -> bool {
        self.roles.get(&role).is_some_and(|words| !words.is_empty())
    }

    fn contains_any(&self, role: TokenRole, words: &HashSet<String>) -> bool {
        self.roles
            .get(&role)
            .is_some_and(|bucket| bucket.iter().any(|w| words.contains(w)))
    }

    fn assemble(&self, order: &[TokenRole]) -> String {
        order
            .iter()
            .filter_map(|role| self.roles.get(role))
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

/// Bucket-based reordering into Gadhwali's subject-object-verb order.
pub struct DialectCorrector {
    tagger: Arc<dyn Tagger>,
    rules: DialectRules,
}

impl DialectCorrector {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self::with_rules(tagger, DialectRules::gadhwali())
    }

    pub fn with_rules(tagger: Arc<dyn Tagger>, rules: DialectRules) -> Self {
        Self { tagger, rules }
    }

    fn bucket(&self, tokens: &[TaggedToken]) -> Result<Buckets> {
        let mut buckets = Buckets::default();
        for token in tokens {
            if token.text.contains('-') {
                // Compound: each part is tagged and classified on its own
                let parts: Vec<&str> = token
                    .text
                    .split('-')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect();
                if parts.is_empty() {
                    // Bare dash, kept as punctuation
                    buckets.push(TokenRole::Other, token.text.trim());
                }
                for part in parts {
                    for sub in self.tagger.tag(part)? {
                        buckets.push(self.rules.classify(&sub), &sub.text);
                    }
                }
                continue;
            }

            let text = token.text.trim();
            if !text.is_empty() {
                buckets.push(self.rules.classify(token), text);
            }
        }
        Ok(buckets)
    }
}

impl GrammarCorrector for DialectCorrector {
    fn language(&self) -> LanguageCode {
        LanguageCode::Gadhwali
    }

    fn try_correct(&self, sentence: &str) -> Result<String> {
        let tokens = self.tagger.tag(sentence)?;
        let buckets = self.bucket(&tokens)?;
        debug!("Dialect buckets: {:?}", buckets.roles);

        let has_verb = buckets.has(TokenRole::Verb);
        if !has_verb && !buckets.has(TokenRole::Auxiliary) && !buckets.has(TokenRole::Modal) {
            return Ok(sentence.to_string());
        }

        if !has_verb && buckets.contains_any(TokenRole::Auxiliary, &self.rules.copulas) {
            return Ok(buckets.assemble(&self.rules.copular_order));
        }

        Ok(buckets.assemble(&self.rules.canonical_order))
    }
}
