use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named bucket of entries in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryId {
    HiraganaBasic,
    HiraganaDakuten,
    HiraganaYoon,
    SpecialSounds,
    KatakanaBasic,
    KatakanaDakuten,
    Numbers,
    Dates,
    N5Pronouns,
    N5Adjectives,
    N5Verbs,
    N5KanjiBasic,
    N5Particles,
    N5Greetings,
    N5Counters,
    N5KanjiTimeDir,
    N5FamilyColors,
    N5KanjiSchoolLife,
}

impl CategoryId {
    /// Every category in browsing order.
    pub const ALL: [CategoryId; 18] = [
        CategoryId::HiraganaBasic,
        CategoryId::HiraganaDakuten,
        CategoryId::HiraganaYoon,
        CategoryId::SpecialSounds,
        CategoryId::KatakanaBasic,
        CategoryId::KatakanaDakuten,
        CategoryId::Numbers,
        CategoryId::Dates,
        CategoryId::N5Pronouns,
        CategoryId::N5Adjectives,
        CategoryId::N5Verbs,
        CategoryId::N5KanjiBasic,
        CategoryId::N5Particles,
        CategoryId::N5Greetings,
        CategoryId::N5Counters,
        CategoryId::N5KanjiTimeDir,
        CategoryId::N5FamilyColors,
        CategoryId::N5KanjiSchoolLife,
    ];

    /// Identifier as it appears in data files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::HiraganaBasic => "HIRAGANA_BASIC",
            CategoryId::HiraganaDakuten => "HIRAGANA_DAKUTEN",
            CategoryId::HiraganaYoon => "HIRAGANA_YOON",
            CategoryId::SpecialSounds => "SPECIAL_SOUNDS",
            CategoryId::KatakanaBasic => "KATAKANA_BASIC",
            CategoryId::KatakanaDakuten => "KATAKANA_DAKUTEN",
            CategoryId::Numbers => "NUMBERS",
            CategoryId::Dates => "DATES",
            CategoryId::N5Pronouns => "N5_PRONOUNS",
            CategoryId::N5Adjectives => "N5_ADJECTIVES",
            CategoryId::N5Verbs => "N5_VERBS",
            CategoryId::N5KanjiBasic => "N5_KANJI_BASIC",
            CategoryId::N5Particles => "N5_PARTICLES",
            CategoryId::N5Greetings => "N5_GREETINGS",
            CategoryId::N5Counters => "N5_COUNTERS",
            CategoryId::N5KanjiTimeDir => "N5_KANJI_TIME_DIR",
            CategoryId::N5FamilyColors => "N5_FAMILY_COLORS",
            CategoryId::N5KanjiSchoolLife => "N5_KANJI_SCHOOL_LIFE",
        }
    }

    /// Human-readable label shown as a study title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CategoryId::HiraganaBasic => "Hiragana: Basic",
            CategoryId::HiraganaDakuten => "Hiragana: Voiced",
            CategoryId::HiraganaYoon => "Hiragana: Combined Sounds",
            CategoryId::SpecialSounds => "Small Tsu & Long Vowels",
            CategoryId::KatakanaBasic => "Katakana: Basic",
            CategoryId::KatakanaDakuten => "Katakana: Voiced",
            CategoryId::Numbers => "Numbers",
            CategoryId::Dates => "Days & Months",
            CategoryId::N5Pronouns => "Pronouns & Demonstratives",
            CategoryId::N5Adjectives => "N5 Adjectives",
            CategoryId::N5Verbs => "N5 Verbs",
            CategoryId::N5KanjiBasic => "N5 Kanji: Basic",
            CategoryId::N5Particles => "Particles & Grammar",
            CategoryId::N5Greetings => "Greetings & Phrases",
            CategoryId::N5Counters => "Counters",
            CategoryId::N5KanjiTimeDir => "N5 Kanji: Time & Direction",
            CategoryId::N5FamilyColors => "Family & Colors",
            CategoryId::N5KanjiSchoolLife => "N5 Kanji: School & Life",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {raw}")]
pub struct ParseCategoryError {
    raw: String,
}

impl FromStr for CategoryId {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError { raw: s.to_owned() })
    }
}
