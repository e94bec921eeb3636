use std::collections::HashSet;
use std::sync::Arc;

use dataset::{CategoryRepository, InMemoryRepository, builtin};
use kana_core::model::{AlphabetKind, CategoryId, Entry, QuizMode, Verdict};
use kana_core::time::fixed_now;
use services::{Clock, ModeConfig, ModeTable, QuizError, QuizService, Strategy};

fn builtin_service(seed: u64) -> QuizService {
    QuizService::new(Arc::new(builtin().unwrap()), ModeTable::builtin().unwrap())
        .with_clock(Clock::fixed(fixed_now()))
        .with_seed(seed)
}

#[test]
fn every_mode_builds_a_well_formed_quiz() {
    let mut svc = builtin_service(21);
    for mode in QuizMode::ALL {
        let session = svc.start_quiz(mode).unwrap();
        assert!(session.total_questions() <= 30, "{mode} too long");
        assert!(session.total_questions() > 0, "{mode} empty");

        let mut targets = HashSet::new();
        for q in session.questions() {
            let target = q.target();
            assert!(
                targets.insert((target.category(), target.glyph().to_owned())),
                "{mode} repeats {}",
                target.glyph()
            );
            assert_eq!(
                q.options().iter().filter(|o| o.same_glyph(target)).count(),
                1
            );
            let glyphs: HashSet<_> = q.options().iter().map(Entry::glyph).collect();
            assert_eq!(glyphs.len(), q.options().len());
            assert!(q.distractors().all(|d| d.category() == target.category()));
        }
    }
}

#[test]
fn full_mix_keeps_the_bucket_distribution() {
    let table = ModeTable::builtin().unwrap();
    let Strategy::Balanced { buckets } = &table.get(QuizMode::FullMix).unwrap().strategy else {
        panic!("full mix is balanced");
    };

    for seed in [1, 2, 3] {
        let session = builtin_service(seed).start_quiz(QuizMode::FullMix).unwrap();
        assert_eq!(session.total_questions(), 30);
        for bucket in buckets {
            let hits = session
                .questions()
                .iter()
                .filter(|q| bucket.categories.contains(&q.target().category()))
                .count();
            assert_eq!(hits, bucket.count, "bucket {}", bucket.label);
        }
    }
}

#[test]
fn small_pool_yields_a_short_quiz() {
    let mut repo = InMemoryRepository::new();
    let greetings: Vec<Entry> = ["おはよう", "こんにちは", "こんばんは", "さようなら", "ありがとう"]
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Entry::new(
                *g,
                format!("phrase-{i}"),
                "",
                AlphabetKind::Phrase,
                CategoryId::N5Greetings,
                Some(format!("greeting {i}")),
            )
            .unwrap()
        })
        .collect();
    repo.insert_category(CategoryId::N5Greetings, greetings).unwrap();

    let table = ModeTable::new(
        30,
        vec![ModeConfig {
            id: QuizMode::VocabOnly,
            title: "Greetings".into(),
            strategy: Strategy::Pooled {
                categories: vec![CategoryId::N5Greetings, CategoryId::N5Verbs],
            },
        }],
    )
    .unwrap();

    let mut svc = QuizService::new(Arc::new(repo), table).with_seed(4);
    let session = svc.start_quiz(QuizMode::VocabOnly).unwrap();
    assert_eq!(session.total_questions(), 5);
    assert!(session.questions().iter().all(|q| q.options().len() == 4));
}

#[test]
fn scoring_follows_answer_order() {
    let mut svc = builtin_service(8);
    let mut session = svc.start_quiz(QuizMode::HiraganaOnly).unwrap();

    // Correct on even questions, wrong on odd ones.
    let mut expected = Vec::new();
    while let Some(q) = session.current_question() {
        let correct = q.correct_index();
        let pick = if session.current_index() % 2 == 0 {
            correct
        } else {
            (correct + 1) % q.options().len()
        };
        expected.push(q.target().glyph().to_owned());
        svc.answer_current(&mut session, pick).unwrap();
    }

    let logged: Vec<_> = session
        .log()
        .results()
        .iter()
        .map(|r| r.question.target().glyph().to_owned())
        .collect();
    assert_eq!(logged, expected);
    assert_eq!(session.final_score(), 15);
    assert!((session.accuracy() - 0.5).abs() < f64::EPSILON);

    let report = svc.report(&session).unwrap();
    assert_eq!(report.summary.verdict, Verdict::KeepPracticing);
    assert_eq!(report.mistakes().count(), 15);
    assert!(matches!(
        svc.answer_current(&mut session, 0),
        Err(QuizError::Completed)
    ));
}

#[test]
fn mode_over_missing_categories_is_empty() {
    let repo: Arc<dyn CategoryRepository> = Arc::new(InMemoryRepository::new());
    let table = ModeTable::builtin().unwrap();
    let mut svc = QuizService::new(repo, table).with_seed(0);

    let session = svc.start_quiz(QuizMode::KanjiGrammar).unwrap();
    assert_eq!(session.total_questions(), 0);
    assert!(session.is_complete());
    let report = svc.report(&session).unwrap();
    assert_eq!(report.summary.total, 0);
    assert!(report.rows.is_empty());
}
