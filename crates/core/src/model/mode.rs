use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quiz flavors offered on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizMode {
    HiraganaOnly,
    KatakanaOnly,
    VocabOnly,
    KanjiGrammar,
    FullMix,
}

impl QuizMode {
    pub const ALL: [QuizMode; 5] = [
        QuizMode::HiraganaOnly,
        QuizMode::KatakanaOnly,
        QuizMode::VocabOnly,
        QuizMode::KanjiGrammar,
        QuizMode::FullMix,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizMode::HiraganaOnly => "HIRAGANA_ONLY",
            QuizMode::KatakanaOnly => "KATAKANA_ONLY",
            QuizMode::VocabOnly => "VOCAB_ONLY",
            QuizMode::KanjiGrammar => "KANJI_GRAMMAR",
            QuizMode::FullMix => "FULL_MIX",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quiz mode: {raw}")]
pub struct ParseModeError {
    raw: String,
}

impl FromStr for QuizMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        QuizMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseModeError { raw: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_and_snake_case() {
        assert_eq!("full-mix".parse::<QuizMode>().unwrap(), QuizMode::FullMix);
        assert_eq!(
            "KANJI_GRAMMAR".parse::<QuizMode>().unwrap(),
            QuizMode::KanjiGrammar
        );
        assert!("everything".parse::<QuizMode>().is_err());
    }
}
