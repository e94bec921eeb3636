use dataset::{CategoryRepository, DatasetError};
use kana_core::model::{CategoryId, Entry};
use kana_core::{RandomSource, shuffle};

/// Order a study deck is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyOrder {
    /// Source order, e.g. the a-i-u-e-o table order.
    Ordered,
    #[default]
    Shuffled,
}

/// Entries of one category prepared for sequential browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyDeck {
    pub category: CategoryId,
    pub order: StudyOrder,
    pub entries: Vec<Entry>,
}

impl StudyDeck {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a deck for `category`.
///
/// A category the dataset does not know yields an empty deck so the caller can
/// show an empty state instead of failing.
pub fn build_deck<D, R>(
    repo: &D,
    category: CategoryId,
    order: StudyOrder,
    rng: &mut R,
) -> StudyDeck
where
    D: CategoryRepository + ?Sized,
    R: RandomSource + ?Sized,
{
    let source: &[Entry] = match repo.entries(category) {
        Ok(entries) => entries,
        Err(DatasetError::UnknownCategory(_)) => {
            log::warn!("category {category} not in dataset, studying an empty deck");
            &[]
        }
        Err(err) => {
            log::warn!("cannot read category {category}: {err}");
            &[]
        }
    };
    if source.is_empty() {
        log::warn!("category {category} has no entries");
    }

    let entries = match order {
        StudyOrder::Ordered => source.to_vec(),
        StudyOrder::Shuffled => shuffle(source, rng),
    };
    log::debug!(
        "built {order:?} deck for {category} with {} entries",
        entries.len()
    );

    StudyDeck {
        category,
        order,
        entries,
    }
}
