//! Minigames domain: tests for session rules and the full play loop.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::*;
use crate::content::{Level, LevelCatalog, builtin_levels};
use crate::core::{AppState, CorePlugin, LevelSelectedEvent, StageSelectedEvent};
use crate::progress::{GameStage, MemoryStore, ProgressPlugin, SaveBackend, UserProgress};

fn level() -> Level {
    builtin_levels().remove(0)
}

fn english(word: &crate::content::VocabularyWord) -> String {
    word.translation("en").unwrap().to_string()
}

// -----------------------------------------------------------------------------
// Detection
// -----------------------------------------------------------------------------

#[test]
fn test_detection_none_means_nothing() {
    let mut detection = DetectionState::default();
    assert!(detection.current().is_none());

    detection.update(" Pencil ");
    assert_eq!(detection.current(), Some("Pencil"));

    detection.update(NO_DETECTION);
    assert!(detection.current().is_none());

    detection.update("Pencil");
    detection.update("  ");
    assert!(detection.current().is_none());
}

#[test]
fn test_non_ascii_label_matches_translation() {
    let mut level = level();
    level.words[0]
        .translations
        .insert("en".to_string(), "Éclair".to_string());

    let mut detection = DetectionState::default();
    detection.update("ÉCLAIR");

    let mut hunt = TreasureHuntSession::new(&level, "en", "it");
    assert_eq!(
        hunt.capture(detection.current()),
        Feedback::Correct {
            word_id: level.words[0].id.clone()
        }
    );

    let mut inverted = InvertedHuntSession::new(&level, "en", "it", 3);
    while inverted.current_word().map(|w| &w.id) != Some(&level.words[0].id) {
        let word = inverted.current_word().unwrap().clone();
        inverted.capture(Some(&english(&word)));
    }
    assert!(inverted.is_target_in_view(Some("éclair")));
}

// -----------------------------------------------------------------------------
// Treasure hunt
// -----------------------------------------------------------------------------

#[test]
fn test_treasure_hunt_completes_after_all_words_found() {
    let level = level();
    let mut hunt = TreasureHuntSession::new(&level, "en", "it");

    assert_eq!(hunt.capture(None), Feedback::NothingDetected);
    assert_eq!(
        hunt.capture(Some("banana")),
        Feedback::NotInLevel {
            label: "banana".to_string()
        }
    );

    for (i, word) in level.words.iter().enumerate() {
        assert!(!hunt.is_complete());
        assert_eq!(
            hunt.capture(Some(&english(word))),
            Feedback::Correct {
                word_id: word.id.clone()
            }
        );
        assert_eq!(hunt.found_count(), i + 1);
    }
    assert!(hunt.is_complete());
}

#[test]
fn test_treasure_hunt_refinding_does_not_count_twice() {
    let level = level();
    let mut hunt = TreasureHuntSession::new(&level, "en", "it");

    hunt.capture(Some("pencil"));
    assert_eq!(
        hunt.capture(Some("PENCIL")),
        Feedback::AlreadyFound {
            word_id: "word_pencil".to_string()
        }
    );
    assert_eq!(hunt.found_count(), 1);
    assert!(!hunt.is_complete());
}

#[test]
fn test_treasure_hunt_capture_after_completion_is_finished() {
    let level = level();
    let mut hunt = TreasureHuntSession::new(&level, "en", "it");
    for word in &level.words {
        hunt.capture(Some(&english(word)));
    }

    assert!(hunt.is_complete());
    assert_eq!(hunt.capture(Some("pencil")), Feedback::Finished);
    assert_eq!(hunt.capture(None), Feedback::Finished);
    assert_eq!(hunt.found_count(), 4);
}

#[test]
fn test_treasure_hunt_card_labels_switch_language_when_found() {
    let level = level();
    let mut hunt = TreasureHuntSession::new(&level, "en", "it");

    assert_eq!(hunt.card_label(0), Some("matita"));
    assert_eq!(hunt.speech_for(0).unwrap().language, "it");

    hunt.capture(Some("pencil"));
    assert_eq!(hunt.card_label(0), Some("pencil"));
    assert_eq!(
        hunt.speech_for(0),
        Some(SpeakEvent {
            text: "pencil".to_string(),
            language: "en".to_string()
        })
    );
    assert!(hunt.card_label(4).is_none());
}

// -----------------------------------------------------------------------------
// Image matching
// -----------------------------------------------------------------------------

#[test]
fn test_image_matching_wrong_tap_keeps_words() {
    let level = level();
    let mut matching = ImageMatchingSession::new(&level, "en", 42);

    let target = matching.target().unwrap().id.clone();
    let wrong = level
        .words
        .iter()
        .find(|w| w.id != target)
        .unwrap()
        .id
        .clone();

    assert_eq!(
        matching.tap(&wrong),
        Feedback::Wrong {
            word_id: wrong.clone()
        }
    );
    assert_eq!(matching.remaining().len(), 4);
    assert_eq!(matching.misses(), 1);
    assert_eq!(matching.target().unwrap().id, target);
}

#[test]
fn test_image_matching_correct_taps_finish_game() {
    let level = level();
    let mut matching = ImageMatchingSession::new(&level, "en", 42);

    for remaining in (0..4).rev() {
        let target = matching.target().unwrap().id.clone();
        assert_eq!(
            matching.tap(&target),
            Feedback::Correct { word_id: target }
        );
        assert_eq!(matching.remaining().len(), remaining);
    }

    assert!(matching.is_complete());
    assert!(matching.target().is_none());
    assert!(matching.target_speech().is_none());
    assert_eq!(matching.tap("word_pencil"), Feedback::Finished);
}

#[test]
fn test_image_matching_same_seed_same_targets() {
    let level = level();
    let mut a = ImageMatchingSession::new(&level, "en", 9);
    let mut b = ImageMatchingSession::new(&level, "en", 9);

    while let Some(target) = a.target().map(|w| w.id.clone()) {
        assert_eq!(b.target().map(|w| w.id.clone()), Some(target.clone()));
        a.tap(&target);
        b.tap(&target);
    }
    assert!(b.is_complete());
}

// -----------------------------------------------------------------------------
// Inverted hunt
// -----------------------------------------------------------------------------

#[test]
fn test_inverted_hunt_requires_current_word() {
    let level = level();
    let mut hunt = InvertedHuntSession::new(&level, "en", "it", 3);

    let current = hunt.current_word().unwrap().clone();
    let other = level
        .words
        .iter()
        .find(|w| w.id != current.id)
        .unwrap()
        .clone();

    assert_eq!(
        hunt.capture(Some(&english(&other))),
        Feedback::WrongObject {
            label: english(&other)
        }
    );
    assert_eq!(
        hunt.capture(Some("banana")),
        Feedback::NotInLevel {
            label: "banana".to_string()
        }
    );
    assert_eq!(hunt.capture(None), Feedback::NothingDetected);
    assert_eq!(hunt.found_count(), 0);

    assert!(hunt.is_target_in_view(Some(&english(&current))));
    assert_eq!(
        hunt.capture(Some(&english(&current))),
        Feedback::Correct {
            word_id: current.id.clone()
        }
    );
    assert_eq!(hunt.found_count(), 1);
    assert_ne!(hunt.current_word(), Some(&current));
}

#[test]
fn test_inverted_hunt_prompts_in_target_language() {
    let level = level();
    let hunt = InvertedHuntSession::new(&level, "en", "it", 3);

    let current = hunt.current_word().unwrap();
    assert_eq!(
        hunt.prompt_speech(),
        Some(SpeakEvent {
            text: current.translation("it").unwrap().to_string(),
            language: "it".to_string()
        })
    );
}

#[test]
fn test_inverted_hunt_order_is_a_permutation() {
    let level = level();
    let mut hunt = InvertedHuntSession::new(&level, "en", "it", 11);

    let mut ids = Vec::new();
    while let Some(word) = hunt.current_word().cloned() {
        hunt.capture(Some(&english(&word)));
        ids.push(word.id);
    }
    ids.sort();
    let mut expected: Vec<String> = level.words.iter().map(|w| w.id.clone()).collect();
    expected.sort();
    assert_eq!(ids, expected);
}

#[test]
fn test_inverted_hunt_completes_in_order() {
    let level = level();
    let mut hunt = InvertedHuntSession::new(&level, "en", "it", 5);

    while let Some(word) = hunt.current_word().cloned() {
        hunt.capture(Some(&english(&word)));
    }

    assert!(hunt.is_complete());
    assert_eq!(hunt.found_count(), 4);
    assert_eq!(hunt.capture(Some("pencil")), Feedback::Finished);
}

// -----------------------------------------------------------------------------
// Play loop
// -----------------------------------------------------------------------------

fn play_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(LevelCatalog::new(builtin_levels()))
        .add_plugins(ProgressPlugin {
            backend: SaveBackend::Memory(MemoryStore::new()),
        })
        .add_plugins(CorePlugin)
        .add_plugins(MinigamesPlugin { seed: Some(1) });
    settle(&mut app);
    app
}

fn settle(app: &mut App) {
    for _ in 0..5 {
        app.update();
    }
}

fn state(app: &App) -> AppState {
    app.world().resource::<State<AppState>>().get().clone()
}

fn enter_stage(app: &mut App, stage: GameStage) {
    app.world_mut().write_message(LevelSelectedEvent { index: 0 });
    settle(app);
    app.world_mut().write_message(StageSelectedEvent { stage });
    settle(app);
    assert_eq!(state(app), AppState::Playing);
}

fn capture(app: &mut App, label: &str) {
    app.world_mut().write_message(DetectedLabelEvent {
        label: label.to_string(),
    });
    app.world_mut().write_message(CaptureRequestedEvent);
    settle(app);
}

#[test]
fn test_treasure_hunt_session_completes_stage() {
    let mut app = play_app();
    enter_stage(&mut app, GameStage::TreasureHunt);
    assert!(app.world().resource::<ActiveMinigame>().session.is_some());

    for word in level().words.iter().take(3) {
        capture(&mut app, &english(word));
    }
    assert_eq!(state(&app), AppState::Playing);

    capture(&mut app, "ruler");
    capture(&mut app, "pen");

    assert_eq!(state(&app), AppState::StageSelect);
    assert!(!app.world().resource::<ActiveMinigame>().session.is_some());

    let progress = app.world().resource::<UserProgress>();
    let level = level();
    assert!(progress.is_stage_unlocked(GameStage::MemoryGame, &level));
}

#[test]
fn test_image_matching_session_completes_stage() {
    let mut app = play_app();
    {
        let level = level();
        app.world_mut()
            .resource_mut::<UserProgress>()
            .mark_stage_completed(GameStage::TreasureHunt, &level);
    }
    enter_stage(&mut app, GameStage::MemoryGame);

    for _ in 0..4 {
        let target = {
            let active = app.world().resource::<ActiveMinigame>();
            match &active.session {
                Some(MinigameSession::MemoryGame(session)) => session.target().unwrap().id.clone(),
                other => panic!("unexpected session: {:?}", other),
            }
        };
        app.world_mut()
            .write_message(CardTappedEvent { word_id: target });
        settle(&mut app);
    }

    assert_eq!(state(&app), AppState::StageSelect);
    let progress = app.world().resource::<UserProgress>();
    assert!(progress.is_stage_unlocked(GameStage::InvertedHunt, &level()));
}

#[test]
fn test_inverted_hunt_session_completes_level() {
    let mut app = play_app();
    {
        let level = level();
        let mut progress = app.world_mut().resource_mut::<UserProgress>();
        progress.mark_stage_completed(GameStage::TreasureHunt, &level);
        progress.mark_stage_completed(GameStage::MemoryGame, &level);
    }
    enter_stage(&mut app, GameStage::InvertedHunt);

    for _ in 0..4 {
        let label = {
            let active = app.world().resource::<ActiveMinigame>();
            match &active.session {
                Some(MinigameSession::InvertedHunt(session)) => {
                    english(session.current_word().unwrap())
                }
                other => panic!("unexpected session: {:?}", other),
            }
        };
        capture(&mut app, &label);
    }

    assert_eq!(state(&app), AppState::LevelComplete);
    let levels = builtin_levels();
    assert!(
        app.world()
            .resource::<UserProgress>()
            .is_level_unlocked(1, &levels)
    );
}
