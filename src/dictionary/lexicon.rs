use tracing::debug;

use super::DictionaryBuilder;
use crate::language::{LanguageCode, LanguagePair};

/// Common English words with their Gadhwali equivalents.
pub const ENGLISH_TO_GADHWALI: &[(&str, &str)] = &[
    ("i", "म्यर"),
    ("you", "तू"),
    ("he", "ऊ"),
    ("she", "ऊ"),
    ("we", "अमि"),
    ("they", "उनि"),
    ("happy", "खुसी"),
    ("not", "नै"),
    ("am", "छू"),
    ("is", "च"),
    ("are", "च"),
    ("was", "थ"),
    ("were", "था"),
    ("play", "खेल"),
    ("want", "चौन"),
    ("eat", "खाण"),
    ("drink", "पीण"),
    ("go", "जाण"),
    ("speak", "बोलण"),
];

/// Common Hindi words with their Gadhwali equivalents.
pub const HINDI_TO_GADHWALI: &[(&str, &str)] = &[
    ("मैं", "म्यर"),
    ("तू", "तू"),
    ("तुम", "तुमि"),
    ("वह", "ऊ"),
    ("हम", "अमि"),
    ("वे", "उनि"),
    ("खुश", "खुसी"),
    ("नहीं", "नै"),
    ("हूँ", "छू"),
    ("है", "च"),
    ("थे", "था"),
    ("था", "थ"),
    ("थी", "थी"),
    ("करता", "करण"),
    ("करती", "करणी"),
    ("करते", "करण"),
    ("खेलना", "खेल"),
    ("खेलता", "खेलण"),
    ("चाहता", "चौन"),
    ("चाहती", "चौनी"),
    ("चाहते", "चौन"),
    ("क्योंकि", "किलै"),
    ("खाना", "खाण"),
    ("पीना", "पीण"),
    ("आना", "आण"),
    ("जाना", "जाण"),
    ("बोलना", "बोलण"),
];

/// Merge the seed word tables into a dictionary under construction.
///
/// Entries already present (from the CSV) win. Reverse directions take the
/// first word listed for an ambiguous Gadhwali form.
pub fn merge_builtin(builder: &mut DictionaryBuilder) {
    let tables = [
        (LanguagePair::new(LanguageCode::English, LanguageCode::Gadhwali), ENGLISH_TO_GADHWALI),
        (LanguagePair::new(LanguageCode::Hindi, LanguageCode::Gadhwali), HINDI_TO_GADHWALI),
    ];

    for (pair, table) in tables {
        for (source, target) in table {
            builder.insert_if_absent(pair, source, target);
            builder.insert_if_absent(pair.reversed(), target, source);
        }
        debug!("Merged {} built-in entries for {}", table.len(), pair);
    }
}
