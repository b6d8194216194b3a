use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use super::{lexicon, PhraseDictionary};
use crate::error::{BoliError, Result};

pub const ENGLISH_COLUMN: &str = "English";
pub const HINDI_COLUMN: &str = "Hindi";
pub const GADHWALI_COLUMN: &str = "Gadhwali";

/// Load the parallel-sentence CSV and build the phrase dictionary.
///
/// Fails when the file cannot be read or a required column is missing.
pub fn load_csv<P: AsRef<Path>>(path: P, include_builtin: bool) -> Result<PhraseDictionary> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BoliError::Dictionary(format!(
            "Dictionary file not found: {}",
            path.display()
        )));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| BoliError::Dictionary(format!("Failed to open {}: {}", path.display(), e)))?;
    let dictionary = load_from_reader(file, include_builtin)?;

    info!(
        "Loaded dictionary from {} ({} entries)",
        path.display(),
        dictionary.len()
    );
    Ok(dictionary)
}

/// Build the phrase dictionary from any CSV source.
pub fn load_from_reader<R: Read>(reader: R, include_builtin: bool) -> Result<PhraseDictionary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|header| header == name);

    let (english, hindi, gadhwali) = match (
        column(ENGLISH_COLUMN),
        column(HINDI_COLUMN),
        column(GADHWALI_COLUMN),
    ) {
        (Some(en), Some(hi), Some(gd)) => (en, hi, gd),
        _ => {
            let missing = [ENGLISH_COLUMN, HINDI_COLUMN, GADHWALI_COLUMN]
                .into_iter()
                .filter(|name| column(name).is_none())
                .collect::<Vec<_>>();
            return Err(BoliError::Dictionary(format!(
                "Missing columns in CSV: {}",
                missing.join(", ")
            )));
        }
    };

    let mut builder = PhraseDictionary::builder();
    let mut rows = 0usize;
    let mut dropped = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        let cell = |idx: usize| record.get(idx).unwrap_or_default();
        let (en, hi, gd) = (cell(english), cell(hindi), cell(gadhwali));

        if en.is_empty() || hi.is_empty() || gd.is_empty() {
            dropped += 1;
            continue;
        }

        builder.insert_parallel(en, hi, gd);
        rows += 1;
    }

    if dropped > 0 {
        warn!("Dropped {} CSV rows with empty cells", dropped);
    }
    info!("Read {} parallel rows", rows);

    if include_builtin {
        lexicon::merge_builtin(&mut builder);
    }

    Ok(builder.build())
}
