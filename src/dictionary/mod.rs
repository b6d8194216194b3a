// Phrase dictionary
//
// One map per ordered language pair, keyed by the composite pair:
// - PhraseDictionary: immutable lookup table built once at startup
// - DictionaryBuilder: collects entries from CSV rows and the seed lexicon
// - DictionaryStore: shared handle that allows swapping the whole snapshot

pub mod lexicon;
pub mod loader;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

use crate::language::{LanguageCode, LanguagePair};

pub use loader::load_csv;

/// Normalize a sentence or word into a lookup key: lower-cased, trimmed,
/// internal whitespace collapsed to single spaces.
pub fn normalize_key(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    entries: HashMap<LanguagePair, HashMap<String, String>>,
}

impl PhraseDictionary {
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// Look up a sentence or word. Absent means "no match".
    pub fn lookup(&self, pair: LanguagePair, text: &str) -> Option<&str> {
        let key = normalize_key(text);
        if key.is_empty() {
            return None;
        }
        let found = self
            .entries
            .get(&pair)
            .and_then(|map| map.get(&key))
            .map(String::as_str);
        debug!("Dictionary lookup [{}] '{}' -> {:?}", pair, key, found);
        found
    }

    /// Number of entries for one direction.
    pub fn pair_len(&self, pair: LanguagePair) -> usize {
        self.entries.get(&pair).map_or(0, HashMap::len)
    }

    /// Total number of entries across all directions.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: HashMap<LanguagePair, HashMap<String, String>>,
}

impl DictionaryBuilder {
    /// Insert a translation for one direction, replacing an existing entry.
    pub fn insert(&mut self, pair: LanguagePair, source: &str, target: &str) -> &mut Self {
        if let Some((key, value)) = Self::prepare(source, target) {
            self.entries.entry(pair).or_default().insert(key, value);
        }
        self
    }

    /// Insert a translation for one direction unless the key is already present.
    pub fn insert_if_absent(&mut self, pair: LanguagePair, source: &str, target: &str) -> &mut Self {
        if let Some((key, value)) = Self::prepare(source, target) {
            self.entries.entry(pair).or_default().entry(key).or_insert(value);
        }
        self
    }

    /// Insert one row of parallel text in all six directions.
    pub fn insert_parallel(&mut self, english: &str, hindi: &str, gadhwali: &str) -> &mut Self {
        let text_for = |lang: LanguageCode| match lang {
            LanguageCode::English => english,
            LanguageCode::Hindi => hindi,
            LanguageCode::Gadhwali => gadhwali,
        };
        for pair in LanguagePair::all() {
            self.insert(pair, text_for(pair.source), text_for(pair.target));
        }
        self
    }

    pub fn build(self) -> PhraseDictionary {
        PhraseDictionary { entries: self.entries }
    }

    fn prepare(source: &str, target: &str) -> Option<(String, String)> {
        let key = normalize_key(source);
        let value = target.trim();
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some((key, value.to_string()))
    }
}

/// Shared handle to the current dictionary snapshot.
///
/// Readers clone the inner `Arc` and work on that snapshot for the rest of
/// the request, so a `replace` never affects a request already in flight.
#[derive(Debug)]
pub struct DictionaryStore {
    current: RwLock<Arc<PhraseDictionary>>,
}

impl DictionaryStore {
    pub fn new(dictionary: PhraseDictionary) -> Self {
        Self {
            current: RwLock::new(Arc::new(dictionary)),
        }
    }

    pub fn snapshot(&self) -> Arc<PhraseDictionary> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically swap in a new dictionary.
    pub fn replace(&self, dictionary: PhraseDictionary) {
        let entries = dictionary.len();
        let fresh = Arc::new(dictionary);
        match self.current.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }
        info!("Dictionary replaced ({} entries)", entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LanguageCode::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  I   am\tHappy "), "i am happy");
        assert_eq!(normalize_key("मैं खुश हूँ"), "मैं खुश हूँ");
        assert_eq!(normalize_key("   "), "");
    }

    #[test]
    fn test_lookup_in_both_directions() {
        let mut builder = PhraseDictionary::builder();
        builder.insert_parallel("I am happy", "मैं खुश हूँ", "म्यर खुसी छू");
        let dict = builder.build();

        assert_eq!(dict.lookup(LanguagePair::new(English, Gadhwali), "i am HAPPY "), Some("म्यर खुसी छू"));
        assert_eq!(dict.lookup(LanguagePair::new(Gadhwali, English), "म्यर खुसी छू"), Some("I am happy"));
        assert_eq!(dict.lookup(LanguagePair::new(Hindi, Gadhwali), "मैं  खुश हूँ"), Some("म्यर खुसी छू"));
        assert_eq!(dict.lookup(LanguagePair::new(Gadhwali, Hindi), "म्यर खुसी छू"), Some("मैं खुश हूँ"));
        assert_eq!(dict.pair_len(LanguagePair::new(English, Hindi)), 1);
        assert_eq!(dict.len(), 6);
    }

    #[test]
    fn test_missing_entry_is_none() {
        let dict = PhraseDictionary::builder().build();
        assert!(dict.is_empty());
        assert_eq!(dict.lookup(LanguagePair::new(English, Hindi), "hello"), None);
        assert_eq!(dict.lookup(LanguagePair::new(English, Hindi), ""), None);
    }

    #[test]
    fn test_insert_if_absent_keeps_existing() {
        let pair = LanguagePair::new(Gadhwali, English);
        let mut builder = PhraseDictionary::builder();
        builder.insert_if_absent(pair, "ऊ", "he").insert_if_absent(pair, "ऊ", "she");
        builder.insert(pair, "खुसी", "glad").insert(pair, "खुसी", "happy");
        let dict = builder.build();

        assert_eq!(dict.lookup(pair, "ऊ"), Some("he"));
        assert_eq!(dict.lookup(pair, "खुसी"), Some("happy"));
    }

    #[test]
    fn test_store_replace_keeps_old_snapshots() {
        let pair = LanguagePair::new(English, Hindi);
        let mut builder = PhraseDictionary::builder();
        builder.insert(pair, "water", "पानी");
        let store = DictionaryStore::new(builder.build());

        let before = store.snapshot();
        let mut builder = PhraseDictionary::builder();
        builder.insert(pair, "water", "जल");
        store.replace(builder.build());

        assert_eq!(before.lookup(pair, "water"), Some("पानी"));
        assert_eq!(store.snapshot().lookup(pair, "water"), Some("जल"));
    }
}
