use std::collections::{BTreeMap, HashSet};

use kana_core::model::{CategoryId, Entry, EntryError};
use thiserror::Error;

/// Errors surfaced by dataset adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("category {0} is not in the dataset")]
    UnknownCategory(CategoryId),

    #[error("unknown category key in dataset: {key}")]
    UnknownCategoryKey { key: String },

    #[error("duplicate glyph {glyph} in category {category}")]
    DuplicateGlyph { category: CategoryId, glyph: String },

    #[error("entry belongs to {found}, cannot be stored under {expected}")]
    WrongCategory {
        expected: CategoryId,
        found: CategoryId,
    },

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only access to the category table.
///
/// Implementations are loaded once and never mutated by the engine.
pub trait CategoryRepository: Send + Sync {
    /// Entries of `category` in source order.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::UnknownCategory` if the dataset has no such category.
    fn entries(&self, category: CategoryId) -> Result<&[Entry], DatasetError>;

    /// Categories present in the dataset, in browsing order.
    fn categories(&self) -> Vec<CategoryId>;
}

/// Category table held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    categories: BTreeMap<CategoryId, Vec<Entry>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, keeping the given entry order.
    ///
    /// The whole batch is checked before anything is stored, so a failed
    /// insert leaves the repository unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::WrongCategory` if an entry is tagged with another
    /// category, and `DatasetError::DuplicateGlyph` if two entries share a glyph
    /// or the category was already inserted with one of these glyphs.
    pub fn insert_category(
        &mut self,
        category: CategoryId,
        entries: Vec<Entry>,
    ) -> Result<(), DatasetError> {
        let existing = self
            .categories
            .get(&category)
            .map_or(&[][..], Vec::as_slice);
        let mut seen: HashSet<&str> = existing.iter().map(Entry::glyph).collect();
        for entry in &entries {
            if entry.category() != category {
                return Err(DatasetError::WrongCategory {
                    expected: category,
                    found: entry.category(),
                });
            }
            if !seen.insert(entry.glyph()) {
                return Err(DatasetError::DuplicateGlyph {
                    category,
                    glyph: entry.glyph().to_owned(),
                });
            }
        }

        self.categories.entry(category).or_default().extend(entries);
        Ok(())
    }

    /// Total number of entries over all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CategoryRepository for InMemoryRepository {
    fn entries(&self, category: CategoryId) -> Result<&[Entry], DatasetError> {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .ok_or(DatasetError::UnknownCategory(category))
    }

    fn categories(&self) -> Vec<CategoryId> {
        CategoryId::ALL
            .into_iter()
            .filter(|id| self.categories.contains_key(id))
            .collect()
    }
}
