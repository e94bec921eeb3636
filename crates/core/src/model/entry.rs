use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::CategoryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("entry glyph cannot be empty")]
    EmptyGlyph,

    #[error("entry reading cannot be empty (glyph {glyph})")]
    EmptyReading { glyph: String },
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// Writing system or word class an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetKind {
    Hiragana,
    Katakana,
    Vocabulary,
    Kanji,
    Grammar,
    Phrase,
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// One learnable unit: a kana, a kanji, a word, a particle or a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    glyph: String,
    reading: String,
    row: String,
    kind: AlphabetKind,
    category: CategoryId,
    meaning: Option<String>,
}

impl Entry {
    /// Creates a validated entry.
    ///
    /// Glyph and reading are trimmed; an empty meaning is dropped.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyGlyph` or `EntryError::EmptyReading` when the
    /// respective field is blank.
    pub fn new(
        glyph: impl Into<String>,
        reading: impl Into<String>,
        row: impl Into<String>,
        kind: AlphabetKind,
        category: CategoryId,
        meaning: Option<String>,
    ) -> Result<Self, EntryError> {
        let glyph = glyph.into().trim().to_owned();
        if glyph.is_empty() {
            return Err(EntryError::EmptyGlyph);
        }
        let reading = reading.into().trim().to_owned();
        if reading.is_empty() {
            return Err(EntryError::EmptyReading { glyph });
        }
        let meaning = meaning
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());

        Ok(Self {
            glyph,
            reading,
            row: row.into(),
            kind,
            category,
            meaning,
        })
    }

    // Accessors
    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    #[must_use]
    pub fn reading(&self) -> &str {
        &self.reading
    }

    #[must_use]
    pub fn row(&self) -> &str {
        &self.row
    }

    #[must_use]
    pub fn kind(&self) -> AlphabetKind {
        self.kind
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    #[must_use]
    pub fn meaning(&self) -> Option<&str> {
        self.meaning.as_deref()
    }

    /// Text an answer option is shown with: the meaning if any, else the reading.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        self.meaning().unwrap_or(&self.reading)
    }

    /// Two entries match when their glyphs are equal.
    #[must_use]
    pub fn same_glyph(&self, other: &Entry) -> bool {
        self.glyph == other.glyph
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_rejects_blank_glyph() {
        let err = Entry::new(
            "  ",
            "a",
            "a",
            AlphabetKind::Hiragana,
            CategoryId::HiraganaBasic,
            None,
        )
        .unwrap_err();
        assert_eq!(err, EntryError::EmptyGlyph);
    }

    #[test]
    fn entry_rejects_blank_reading() {
        let err = Entry::new(
            "あ",
            "",
            "a",
            AlphabetKind::Hiragana,
            CategoryId::HiraganaBasic,
            None,
        )
        .unwrap_err();
        assert_eq!(err, EntryError::EmptyReading { glyph: "あ".into() });
    }

    #[test]
    fn answer_text_prefers_meaning() {
        let word = Entry::new(
            "みず",
            "mizu",
            "m",
            AlphabetKind::Vocabulary,
            CategoryId::N5FamilyColors,
            Some("water".into()),
        )
        .unwrap();
        assert_eq!(word.answer_text(), "water");

        let kana = Entry::new(
            "か",
            "ka",
            "k",
            AlphabetKind::Hiragana,
            CategoryId::HiraganaBasic,
            Some("   ".into()),
        )
        .unwrap();
        assert_eq!(kana.meaning(), None);
        assert_eq!(kana.answer_text(), "ka");
    }

    #[test]
    fn same_glyph_ignores_other_fields() {
        let a = Entry::new(
            "日",
            "nichi",
            "",
            AlphabetKind::Kanji,
            CategoryId::N5KanjiBasic,
            Some("sun".into()),
        )
        .unwrap();
        let b = Entry::new(
            "日",
            "hi",
            "",
            AlphabetKind::Kanji,
            CategoryId::N5KanjiTimeDir,
            Some("day".into()),
        )
        .unwrap();
        assert!(a.same_glyph(&b));
        assert_ne!(a, b);
    }
}
