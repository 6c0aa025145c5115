//! Levels shipped with the game, used when no levels.ron is present.

use std::collections::HashMap;

use super::data::{Level, LevelId, VocabularyWord};

fn word(base_word: &str, image_name: &str, en: &str, es: &str, it: &str) -> VocabularyWord {
    let translations = HashMap::from([
        ("en".to_string(), en.to_string()),
        ("es".to_string(), es.to_string()),
        ("it".to_string(), it.to_string()),
    ]);

    VocabularyWord {
        id: format!("word_{}", image_name),
        base_word: base_word.to_string(),
        image_name: image_name.to_string(),
        translations,
    }
}

pub fn builtin_levels() -> Vec<Level> {
    vec![
        Level {
            id: LevelId::new("level_school_desk"),
            title: "Level 1".to_string(),
            words: vec![
                word("pencil", "pencil", "pencil", "lápiz", "matita"),
                word("notebook", "notebook", "notebook", "libreta", "quaderno"),
                word("ruler", "ruler", "ruler", "regla", "righello"),
                word("pen", "pen", "pen", "pluma", "penna"),
            ],
        },
        Level {
            id: LevelId::new("level_school_bag"),
            title: "Level 2".to_string(),
            words: vec![
                word("backpack", "backpack", "backpack", "mochila", "zaino"),
                word("sharpener", "sharpener", "sharpener", "sacapuntas", "temperamatite"),
                word("eraser", "eraser", "eraser", "borrador", "goma"),
                word("pencil case", "pencil_case", "pencil case", "estuche", "astuccio"),
            ],
        },
        Level {
            id: LevelId::new("level_fruit"),
            title: "Level 3".to_string(),
            words: vec![
                word("apple", "apple", "apple", "manzana", "mela"),
                word("pear", "pear", "pear", "pera", "pera"),
                word("banana", "banana", "banana", "plátano", "banana"),
                word("tomato", "tomato", "tomato", "tomate", "pomodoro"),
            ],
        },
    ]
}
