use std::sync::Arc;

use dataset::{CategoryRepository, builtin};
use kana_core::model::CategoryId;
use services::{StudyOrder, StudyService};

fn service(seed: u64) -> (Arc<dyn CategoryRepository>, StudyService) {
    let repo: Arc<dyn CategoryRepository> = Arc::new(builtin().unwrap());
    let svc = StudyService::new(Arc::clone(&repo)).with_seed(seed);
    (repo, svc)
}

#[test]
fn ordered_deck_walks_the_dataset_order() {
    let (repo, mut svc) = service(0);
    let mut session = svc.start(CategoryId::HiraganaBasic, StudyOrder::Ordered);
    let source = repo.entries(CategoryId::HiraganaBasic).unwrap();

    let mut seen = Vec::new();
    while !session.is_finished() {
        seen.push(session.current_entry().unwrap().glyph().to_owned());
        session.next();
    }
    let expected: Vec<_> = source.iter().map(|e| e.glyph().to_owned()).collect();
    assert_eq!(seen, expected);
    assert_eq!(seen[0], "あ");
}

#[test]
fn shuffled_deck_is_a_permutation_and_restart_reshuffles() {
    let (repo, mut svc) = service(12);
    let mut session = svc.start(CategoryId::KatakanaBasic, StudyOrder::Shuffled);
    let first: Vec<_> = session.deck().entries.iter().map(|e| e.glyph().to_owned()).collect();

    let mut sorted = first.clone();
    sorted.sort();
    let mut source: Vec<_> = repo
        .entries(CategoryId::KatakanaBasic)
        .unwrap()
        .iter()
        .map(|e| e.glyph().to_owned())
        .collect();
    source.sort();
    assert_eq!(sorted, source);

    session.next();
    svc.restart(&mut session);
    assert_eq!(session.current_index(), 0);
    let second: Vec<_> = session.deck().entries.iter().map(|e| e.glyph().to_owned()).collect();
    assert_eq!(second.len(), first.len());
    assert_ne!(second, first);
}

#[test]
fn overview_covers_every_category() {
    let (_, svc) = service(0);
    let overview = svc.overview().unwrap();
    assert_eq!(overview.len(), CategoryId::ALL.len());
    assert!(overview.iter().all(|c| c.size >= 4));
    assert_eq!(overview[0].id, CategoryId::HiraganaBasic);
    assert_eq!(overview[0].size, 46);
}
