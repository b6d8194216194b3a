use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

use super::{attempt_online, OnlineTranslator};
use crate::dictionary::PhraseDictionary;
use crate::language::LanguagePair;

/// Where a word's translation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    Dictionary,
    Online,
    Untranslated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWord {
    pub original: String,
    pub translated: String,
    pub source: WordSource,
}

/// Output of word-by-word resolution. Holds exactly one entry per input word.
#[derive(Debug, Clone, Default)]
pub struct WordwiseTranslation {
    pub text: String,
    pub words: Vec<ResolvedWord>,
    pub unresolved: BTreeSet<String>,
}

/// Translates a sentence one word at a time.
pub struct WordwiseResolver<'a> {
    dictionary: &'a PhraseDictionary,
    online: Option<&'a dyn OnlineTranslator>,
    online_timeout: Duration,
}

impl<'a> WordwiseResolver<'a> {
    pub fn new(
        dictionary: &'a PhraseDictionary,
        online: Option<&'a dyn OnlineTranslator>,
        online_timeout: Duration,
    ) -> Self {
        Self {
            dictionary,
            online,
            online_timeout,
        }
    }

    pub async fn resolve(
        &self,
        sentence: &str,
        pair: LanguagePair,
        online_eligible: bool,
        online_available: bool,
    ) -> WordwiseTranslation {
        let online = self.online.filter(|_| online_eligible && online_available);
        let mut result = WordwiseTranslation::default();

        for word in sentence.split_whitespace() {
            let resolved = match self.dictionary.lookup(pair, word) {
                Some(translated) => Some((translated.to_string(), WordSource::Dictionary)),
                None => match online {
                    Some(online) => attempt_online(online, word, pair, self.online_timeout)
                        .await
                        .map(|translated| (translated, WordSource::Online)),
                    None => None,
                },
            };

            let (translated, source) = resolved.unwrap_or_else(|| {
                result.unresolved.insert(word.to_string());
                (word.to_string(), WordSource::Untranslated)
            });
            debug!("Word [{}] '{}' -> '{}' ({:?})", pair, word, translated, source);

            result.words.push(ResolvedWord {
                original: word.to_string(),
                translated,
                source,
            });
        }

        if !result.unresolved.is_empty() {
            warn!("Could not translate words: {:?}", result.unresolved);
        }

        result.text = result
            .words
            .iter()
            .map(|word| word.translated.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        result
    }
}
