//! End-to-end review-session flow over the in-memory store.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use vocab_core::{
    Card, CardStore, Deck, Grade, MemoryStore, ModeSelection, Quality, ReviewMode, SessionEngine,
    SessionProgress, Sm2, StartOutcome, StudySettings,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn seeded_store(words: &[(&str, &str, &[&str])]) -> MemoryStore {
    let mut store = MemoryStore::new();
    let deck = Deck::new("starter");
    for (word, meaning, synonyms) in words {
        let mut card = Card::new(deck.id, word, meaning, today());
        card.synonyms = synonyms.iter().map(|s| s.to_string()).collect();
        store.put_card(card).unwrap();
    }
    store.put_deck(deck);
    store
}

#[test]
fn full_session_reschedules_every_graded_card() {
    let store = seeded_store(&[
        ("run", "move fast", &["sprint", "jog"][..]),
        ("big", "large, huge", &["huge", "vast"][..]),
        ("cold", "low temperature", &["chilly", "icy"][..]),
        ("happy", "feeling joy", &["glad", "joyful"][..]),
    ]);
    let mut engine = SessionEngine::new(store, Sm2::default(), StudySettings::for_today(today()));
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = engine
        .start(None, ModeSelection::Auto, today(), &mut rng)
        .unwrap();
    assert_eq!(outcome, StartOutcome::Started { queue_len: 4 });

    let now = Utc::now();
    let mut graded = 0;
    loop {
        let (card, mode) = engine.current_card().unwrap();
        assert!(!card.word.is_empty());

        if mode == ReviewMode::Quiz {
            let quiz = engine.build_quiz_for_current(&mut rng).unwrap();
            assert!(quiz.choices.contains(&quiz.answer));
        }

        graded += 1;
        let progress = engine
            .grade(Grade::Review(Quality::new(4)), today(), now, &mut rng)
            .unwrap();
        if progress == SessionProgress::Completed {
            break;
        }
    }
    assert_eq!(graded, 4);

    // Every card moved to tomorrow with its streak started.
    for card in engine.store().list_cards().unwrap() {
        assert_eq!(card.state.repetitions, 1);
        assert_eq!(card.state.interval_days, 1);
        assert_eq!(card.state.due, Some(today() + Duration::days(1)));
        assert!(card.state.last_reviewed.is_some());
    }
    assert_eq!(engine.due_count(today()).unwrap(), 0);

    // With nothing due, a restart reports so rather than erroring.
    let outcome = engine
        .start(None, ModeSelection::Auto, today(), &mut rng)
        .unwrap();
    assert_eq!(outcome, StartOutcome::NothingDue);

    // The next day they all come due again.
    let tomorrow = today() + Duration::days(1);
    assert_eq!(engine.due_count(tomorrow).unwrap(), 4);
}

#[test]
fn failed_cards_stay_in_tomorrows_due_set_with_reset_streaks() {
    let store = seeded_store(&[("run", "move fast", &["sprint"][..])]);
    let mut engine = SessionEngine::new(store, Sm2::default(), StudySettings::for_today(today()));
    let mut rng = StdRng::seed_from_u64(7);

    // Build up a streak across two days of successful reviews.
    let now = Utc::now();
    engine
        .start(None, ModeSelection::Fixed(ReviewMode::Flash), today(), &mut rng)
        .unwrap();
    engine
        .grade(Grade::Review(Quality::new(5)), today(), now, &mut rng)
        .unwrap();
    let day_two = today() + Duration::days(1);
    engine
        .start(None, ModeSelection::Fixed(ReviewMode::Flash), day_two, &mut rng)
        .unwrap();
    engine
        .grade(Grade::Review(Quality::new(5)), day_two, now, &mut rng)
        .unwrap();

    let cards = engine.store().list_cards().unwrap();
    assert_eq!(cards[0].state.repetitions, 2);
    assert_eq!(cards[0].state.interval_days, 6);

    // A lapse on day eight resets the streak to a one-day interval.
    let day_eight = day_two + Duration::days(6);
    engine
        .start(None, ModeSelection::Fixed(ReviewMode::Flash), day_eight, &mut rng)
        .unwrap();
    engine
        .grade(Grade::Review(Quality::new(1)), day_eight, now, &mut rng)
        .unwrap();

    let cards = engine.store().list_cards().unwrap();
    assert_eq!(cards[0].state.repetitions, 0);
    assert_eq!(cards[0].state.interval_days, 1);
    assert_eq!(cards[0].state.due, Some(day_eight + Duration::days(1)));
}
