use crate::json;
use crate::repository::{DatasetError, InMemoryRepository};

/// Dataset shipped with the crate.
pub const BUILTIN_DATASET: &str = include_str!("../data/kana.json");

/// Parses the shipped dataset.
///
/// # Errors
///
/// Only fails if the shipped file is malformed, which the tests guard against.
pub fn builtin() -> Result<InMemoryRepository, DatasetError> {
    json::parse_str(BUILTIN_DATASET)
}
