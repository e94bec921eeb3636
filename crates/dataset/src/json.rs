//! JSON mapping for the category table.
//!
//! The file is an object keyed by category identifier; each value is the
//! ordered list of entry records for that category.

use std::collections::BTreeMap;
use std::path::Path;

use kana_core::model::{AlphabetKind, CategoryId, Entry};
use serde::Deserialize;

use crate::repository::{DatasetError, InMemoryRepository};

/// Serialized shape of an entry. The category comes from the enclosing key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryRecord {
    #[serde(rename = "char")]
    pub glyph: String,
    #[serde(rename = "romaji")]
    pub reading: String,
    #[serde(default)]
    pub row: String,
    #[serde(rename = "type")]
    pub kind: AlphabetKind,
    #[serde(default)]
    pub meaning: Option<String>,
}

impl EntryRecord {
    /// Convert the record into a domain `Entry` of `category`.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Entry` if glyph or reading are blank.
    pub fn into_entry(self, category: CategoryId) -> Result<Entry, DatasetError> {
        Ok(Entry::new(
            self.glyph,
            self.reading,
            self.row,
            self.kind,
            category,
            self.meaning,
        )?)
    }
}

/// Parses a dataset document.
///
/// # Errors
///
/// Returns `DatasetError::Parse` for malformed JSON, `UnknownCategoryKey` for a
/// key that is not a known category, and the validation errors of
/// [`InMemoryRepository::insert_category`].
pub fn parse_str(raw: &str) -> Result<InMemoryRepository, DatasetError> {
    let document: BTreeMap<String, Vec<EntryRecord>> = serde_json::from_str(raw)?;
    let mut repo = InMemoryRepository::new();
    for (key, records) in document {
        let category: CategoryId = key
            .parse()
            .map_err(|_| DatasetError::UnknownCategoryKey { key: key.clone() })?;
        let entries = records
            .into_iter()
            .map(|r| r.into_entry(category))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("loaded {} entries for {category}", entries.len());
        repo.insert_category(category, entries)?;
    }
    Ok(repo)
}

/// Reads and parses a dataset file.
///
/// # Errors
///
/// Returns `DatasetError::Io` if the file cannot be read, otherwise as [`parse_str`].
pub fn load_file(path: impl AsRef<Path>) -> Result<InMemoryRepository, DatasetError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&raw)
}
