use dataset::{CategoryRepository, DatasetError};
use kana_core::model::{CategoryId, Entry};
use kana_core::{RandomSource, shuffle};

use crate::modes::{Bucket, Strategy};

/// How many targets a bucket contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDraw {
    pub label: String,
    pub requested: usize,
    pub selected: usize,
}

/// Targets chosen for a quiz, already in question order.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPlan {
    pub targets: Vec<Entry>,
    pub draws: Vec<BucketDraw>,
}

impl TargetPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Union of the entries of `categories`, in configuration order.
///
/// Categories missing from the dataset contribute nothing.
fn pool<D>(repo: &D, categories: &[CategoryId]) -> Vec<Entry>
where
    D: CategoryRepository + ?Sized,
{
    let mut pool = Vec::new();
    for &category in categories {
        match repo.entries(category) {
            Ok(entries) => pool.extend_from_slice(entries),
            Err(DatasetError::UnknownCategory(_)) => {
                log::warn!("category {category} not in dataset, skipped");
            }
            Err(err) => log::warn!("cannot read category {category}: {err}"),
        }
    }
    pool
}

fn draw<D, R>(repo: &D, bucket: &Bucket, rng: &mut R) -> (Vec<Entry>, BucketDraw)
where
    D: CategoryRepository + ?Sized,
    R: RandomSource + ?Sized,
{
    let candidates = pool(repo, &bucket.categories);
    if candidates.is_empty() {
        log::warn!("bucket {} has an empty pool", bucket.label);
    }
    let mut picked = shuffle(&candidates, rng);
    picked.truncate(bucket.count);
    let stats = BucketDraw {
        label: bucket.label.clone(),
        requested: bucket.count,
        selected: picked.len(),
    };
    (picked, stats)
}

/// Picks quiz targets according to `strategy`.
///
/// Pooled: one shuffled pool over all categories, cut to `target_questions`.
/// Balanced: each bucket sampled on its own, so every topic area is
/// represented. Either way the result is shuffled once more so bucket order
/// does not show in question order, and never exceeds `target_questions`.
pub fn select_targets<D, R>(
    strategy: &Strategy,
    target_questions: usize,
    repo: &D,
    rng: &mut R,
) -> TargetPlan
where
    D: CategoryRepository + ?Sized,
    R: RandomSource + ?Sized,
{
    let (mut targets, draws) = match strategy {
        Strategy::Pooled { categories } => {
            let bucket = Bucket {
                label: "pool".to_owned(),
                categories: categories.clone(),
                count: target_questions,
            };
            let (picked, stats) = draw(repo, &bucket, rng);
            (picked, vec![stats])
        }
        Strategy::Balanced { buckets } => {
            let mut targets = Vec::with_capacity(target_questions);
            let mut draws = Vec::with_capacity(buckets.len());
            for bucket in buckets {
                let (picked, stats) = draw(repo, bucket, rng);
                targets.extend(picked);
                draws.push(stats);
            }
            (targets, draws)
        }
    };
    targets.truncate(target_questions);

    TargetPlan {
        targets: shuffle(&targets, rng),
        draws,
    }
}
