//! Content domain: tests for catalog loading, lookup, and validation.

use super::*;

fn languages() -> Vec<String> {
    AppSettings::default().required_languages
}

const LEVELS_RON: &str = r#"
(
    schema_version: 1,
    items: [
        (
            id: "level_kitchen",
            title: "Kitchen",
            words: [
                (id: "w_cup", base_word: "cup", image_name: "cup",
                 translations: {"en": "cup", "es": "taza", "it": "tazza"}),
                (id: "w_fork", base_word: "fork", image_name: "fork",
                 translations: {"en": "fork", "es": "tenedor", "it": "forchetta"}),
                (id: "w_spoon", base_word: "spoon", image_name: "spoon",
                 translations: {"en": "spoon", "es": "cuchara", "it": "cucchiaio"}),
                (id: "w_bowl", base_word: "bowl", image_name: "bowl",
                 translations: {"en": "bowl", "es": "cuenco", "it": "ciotola"}),
            ],
        ),
    ],
)
"#;

// -----------------------------------------------------------------------------
// Builtin catalog
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_levels_are_valid() {
    let levels = builtin_levels();
    assert_eq!(levels.len(), 3);
    assert!(validate_levels(&levels, &languages()).is_empty());
}

#[test]
fn test_builtin_level_ids_are_stable() {
    let ids: Vec<String> = builtin_levels().iter().map(|l| l.id.to_string()).collect();
    assert_eq!(
        ids,
        vec!["level_school_desk", "level_school_bag", "level_fruit"]
    );
}

// -----------------------------------------------------------------------------
// Loader
// -----------------------------------------------------------------------------

#[test]
fn test_parse_levels_from_ron() {
    let levels = parse_levels(LEVELS_RON, "levels.ron").unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].id, LevelId::new("level_kitchen"));
    assert_eq!(levels[0].words.len(), WORDS_PER_LEVEL);
    assert_eq!(levels[0].words[1].translation("it"), Some("forchetta"));
}

#[test]
fn test_parse_levels_reports_file_on_error() {
    let err = parse_levels("(schema_version: 1, items: [", "broken.ron").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_load_levels_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_levels(&dir.path().join("levels.ron")).unwrap_err();
    assert!(matches!(err, ContentLoadError::Io { .. }));
}

#[test]
fn test_load_settings_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    std::fs::write(&path, r#"(target_language: "es")"#).unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.target_language, "es");
    assert_eq!(settings.native_language, "en");
    assert_eq!(settings.save_dir, AppSettings::default().save_dir);
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_level_with_three_words_fails_validation() {
    let mut levels = builtin_levels();
    levels[0].words.pop();

    let errors = validate_levels(&levels, &languages());
    assert_eq!(
        errors,
        vec![ValidationError::WrongWordCount {
            level_id: "level_school_desk".to_string(),
            count: 3,
        }]
    );
}

#[test]
fn test_duplicate_level_id_fails_validation() {
    let mut levels = builtin_levels();
    levels[1].id = levels[0].id.clone();

    let errors = validate_levels(&levels, &languages());
    assert!(errors.contains(&ValidationError::DuplicateLevelId {
        level_id: "level_school_desk".to_string(),
    }));
}

#[test]
fn test_missing_translation_fails_validation() {
    let mut levels = builtin_levels();
    levels[2].words[0].translations.remove("es");

    let errors = validate_levels(&levels, &languages());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("'es'"));
}

// -----------------------------------------------------------------------------
// Catalog lookup
// -----------------------------------------------------------------------------

#[test]
fn test_catalog_lookup_by_id_and_index() {
    let catalog = LevelCatalog::new(builtin_levels());
    let fruit = LevelId::new("level_fruit");

    assert_eq!(catalog.levels().len(), 3);
    assert_eq!(catalog.get_index(2).map(|l| &l.id), Some(&fruit));
    assert_eq!(catalog.get(&fruit).unwrap().title, "Level 3");
    assert!(catalog.get(&LevelId::new("level_missing")).is_none());
    assert!(catalog.get_index(3).is_none());
}

#[test]
fn test_find_word_by_label_ignores_case() {
    let levels = builtin_levels();
    let words = &levels[1].words;

    let (index, word) = find_word_by_label(words, "Pencil Case", "en").unwrap();
    assert_eq!(index, 3);
    assert_eq!(word.base_word, "pencil case");

    assert!(find_word_by_label(words, "pencil", "en").is_none());
    assert!(find_word_by_label(words, "   ", "en").is_none());
}

#[test]
fn test_find_word_by_label_folds_non_ascii_case() {
    let mut levels = builtin_levels();
    let words = &mut levels[2].words;
    words[0]
        .translations
        .insert("en".to_string(), "Éclair".to_string());

    let (index, _) = find_word_by_label(words, "éclair", "en").unwrap();
    assert_eq!(index, 0);
    assert!(find_word_by_label(words, "ÉCLAIR ", "en").is_some());
    assert!(labels_match("Ñandú", "ñANDÚ"));
}

#[test]
fn test_word_label_falls_back_to_base_word() {
    let levels = builtin_levels();
    let word = &levels[0].words[0];

    assert_eq!(word.label("it"), "matita");
    assert_eq!(word.label("fr"), "pencil");
}

#[test]
fn test_shipped_levels_file_matches_builtin() {
    let path = std::path::Path::new(DATA_DIR).join("levels.ron");
    let levels = load_levels(&path).unwrap();
    assert_eq!(levels, builtin_levels());
}
