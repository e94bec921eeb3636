use chrono::{DateTime, Utc};

use dataset::CategoryRepository;
use kana_core::model::{Entry, OPTIONS_PER_QUESTION, QuizMode, QuizQuestion};
use kana_core::{RandomSource, shuffle};

use super::plan::select_targets;
use super::session::QuizSession;
use crate::error::QuizError;
use crate::modes::ModeTable;

const DISTRACTORS_PER_QUESTION: usize = OPTIONS_PER_QUESTION - 1;

/// Builds one question for `target`.
///
/// Distractors come only from the target's own category so the wrong answers
/// look plausible. A category with fewer than four entries yields a question
/// with fewer options.
///
/// # Errors
///
/// Returns `QuizError::Dataset` if the target's category cannot be read, or
/// `QuizError::Question` if the dataset holds duplicate glyphs.
pub fn build_question<D, R>(target: Entry, repo: &D, rng: &mut R) -> Result<QuizQuestion, QuizError>
where
    D: CategoryRepository + ?Sized,
    R: RandomSource + ?Sized,
{
    let candidates: Vec<Entry> = repo
        .entries(target.category())?
        .iter()
        .filter(|e| !e.same_glyph(&target))
        .cloned()
        .collect();

    let mut distractors = shuffle(&candidates, rng);
    distractors.truncate(DISTRACTORS_PER_QUESTION);
    if distractors.len() < DISTRACTORS_PER_QUESTION {
        log::warn!(
            "category {} has only {} distractors for {}",
            target.category(),
            distractors.len(),
            target.glyph()
        );
    }

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(target.clone());
    options.extend(distractors);
    let options = shuffle(&options, rng);

    Ok(QuizQuestion::new(target, options)?)
}

/// Builds a full quiz for `mode` from the mode table and dataset.
///
/// A mode whose pools are empty produces a session with no questions.
///
/// # Errors
///
/// Returns `QuizError::UnknownMode` if the table has no row for `mode`, or any
/// error from [`build_question`].
pub fn build_session<D, R>(
    mode: QuizMode,
    table: &ModeTable,
    repo: &D,
    rng: &mut R,
    started_at: DateTime<Utc>,
) -> Result<QuizSession, QuizError>
where
    D: CategoryRepository + ?Sized,
    R: RandomSource + ?Sized,
{
    let config = table.get(mode)?;
    let plan = select_targets(&config.strategy, table.target_questions(), repo, rng);
    for draw in &plan.draws {
        if draw.selected < draw.requested {
            log::debug!(
                "{mode}: bucket {} gave {} of {} targets",
                draw.label,
                draw.selected,
                draw.requested
            );
        }
    }
    if plan.is_empty() {
        log::warn!("mode {mode} produced no questions");
    }

    let questions = plan
        .targets
        .into_iter()
        .map(|target| build_question(target, repo, rng))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("built {} questions for {mode}", questions.len());
    Ok(QuizSession::new(
        mode,
        config.title.clone(),
        questions,
        started_at,
    ))
}
