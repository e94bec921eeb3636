use std::sync::Arc;

use dataset::CategoryRepository;
use kana_core::model::CategoryId;
use kana_core::random::{entropy_rng, seeded_rng};
use rand::rngs::StdRng;

use super::deck::{StudyOrder, build_deck};
use super::session::StudySession;
use crate::error::StudyError;

/// Category list item for the deck picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOverview {
    pub id: CategoryId,
    pub label: &'static str,
    pub size: usize,
}

/// Starts and restarts study sessions against a dataset.
pub struct StudyService {
    repo: Arc<dyn CategoryRepository>,
    rng: StdRng,
}

impl StudyService {
    #[must_use]
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self {
            repo,
            rng: entropy_rng(),
        }
    }

    /// Makes every shuffle reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = seeded_rng(seed);
        self
    }

    pub fn start(&mut self, category: CategoryId, order: StudyOrder) -> StudySession {
        StudySession::new(build_deck(self.repo.as_ref(), category, order, &mut self.rng))
    }

    pub fn restart(&mut self, session: &mut StudySession) {
        session.restart(self.repo.as_ref(), &mut self.rng);
    }

    /// Lists the dataset's categories with their sizes.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Dataset` if a listed category cannot be read.
    pub fn overview(&self) -> Result<Vec<CategoryOverview>, StudyError> {
        self.repo
            .categories()
            .into_iter()
            .map(|id| {
                Ok(CategoryOverview {
                    id,
                    label: id.label(),
                    size: self.repo.entries(id)?.len(),
                })
            })
            .collect()
    }
}
