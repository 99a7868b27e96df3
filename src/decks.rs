use crate::models::Deck;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DECKS_DIR: &str = "decks";

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse deck file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("deck contains no questions")]
    NoQuestions,
    #[error("question {number} is invalid: {reason}")]
    InvalidQuestion { number: usize, reason: String },
}

pub fn get_deck_files() -> Vec<PathBuf> {
    deck_files_in(Path::new(DECKS_DIR))
}

fn deck_files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.exists()
        && dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn load_deck(path: &PathBuf) -> Result<Deck, DeckError> {
    let content = fs::read_to_string(path)?;
    let deck: Deck = serde_json::from_str(&content)?;
    validate_deck(&deck)?;
    Ok(deck)
}

fn validate_deck(deck: &Deck) -> Result<(), DeckError> {
    if deck.questions.is_empty() {
        return Err(DeckError::NoQuestions);
    }

    for (i, question) in deck.questions.iter().enumerate() {
        let number = i + 1;
        if question.prompt.trim().is_empty() {
            return Err(DeckError::InvalidQuestion {
                number,
                reason: "empty prompt".to_string(),
            });
        }
        if question.options.len() < 2 {
            return Err(DeckError::InvalidQuestion {
                number,
                reason: "fewer than two options".to_string(),
            });
        }
        if question.options.iter().any(|option| option.trim().is_empty()) {
            return Err(DeckError::InvalidQuestion {
                number,
                reason: "empty option text".to_string(),
            });
        }
        if question.correct_index >= question.options.len() {
            return Err(DeckError::InvalidQuestion {
                number,
                reason: format!("answer index {} out of range", question.correct_index),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_deck(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const VALID_DECK: &str = r#"{
        "title": "Nutrition Basics",
        "description": "Test your basic nutrition knowledge",
        "questions": [
            {
                "question": "Which vitamin is primarily obtained from sunlight?",
                "options": ["Vitamin A", "Vitamin B12", "Vitamin C", "Vitamin D"],
                "answerIndex": 3
            },
            {
                "question": "What nutrient is the main source of energy for the body?",
                "options": ["Proteins", "Carbohydrates", "Fats", "Vitamins"],
                "answerIndex": 1
            }
        ]
    }"#;

    #[test]
    fn test_load_valid_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(dir.path(), "basics.json", VALID_DECK);

        let deck = load_deck(&path).unwrap();
        assert_eq!(deck.title, "Nutrition Basics");
        assert_eq!(deck.questions.len(), 2);
        assert_eq!(deck.questions[0].correct_index, 3);
        assert_eq!(deck.questions[0].options.len(), 4);
        assert_eq!(
            deck.questions[1].prompt,
            "What nutrient is the main source of energy for the body?"
        );
    }

    #[test]
    fn test_description_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            "minimal.json",
            r#"{"title": "T", "questions": [{"question": "Q?", "options": ["a", "b"], "answerIndex": 0}]}"#,
        );

        let deck = load_deck(&path).unwrap();
        assert_eq!(deck.description, "");
    }

    #[test]
    fn test_rejects_answer_index_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            "bad.json",
            r#"{"title": "T", "questions": [{"question": "Q?", "options": ["a", "b"], "answerIndex": 2}]}"#,
        );

        let err = load_deck(&path).unwrap_err();
        assert!(matches!(
            err,
            DeckError::InvalidQuestion { number: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_empty_question_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            "empty.json",
            r#"{"title": "T", "questions": []}"#,
        );

        let err = load_deck(&path).unwrap_err();
        assert!(matches!(err, DeckError::NoQuestions));
    }

    #[test]
    fn test_rejects_single_option_question() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            "single.json",
            r#"{"title": "T", "questions": [{"question": "Q?", "options": ["only"], "answerIndex": 0}]}"#,
        );

        let err = load_deck(&path).unwrap_err();
        assert!(matches!(
            err,
            DeckError::InvalidQuestion { number: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_blank_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            "blank.json",
            r#"{"title": "T", "questions": [{"question": "   ", "options": ["a", "b"], "answerIndex": 0}]}"#,
        );

        let err = load_deck(&path).unwrap_err();
        assert!(matches!(
            err,
            DeckError::InvalidQuestion { number: 1, .. }
        ));
    }

    #[test]
    fn test_invalid_question_reports_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(
            dir.path(),
            "second.json",
            r#"{"title": "T", "questions": [
                {"question": "Q1?", "options": ["a", "b"], "answerIndex": 0},
                {"question": "Q2?", "options": ["a", "b"], "answerIndex": 5}
            ]}"#,
        );

        let err = load_deck(&path).unwrap_err();
        assert!(matches!(
            err,
            DeckError::InvalidQuestion { number: 2, .. }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_deck(&path).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_deck(dir.path(), "broken.json", "{ not json");

        let err = load_deck(&path).unwrap_err();
        assert!(matches!(err, DeckError::Parse(_)));
    }

    #[test]
    fn test_deck_files_are_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_deck(dir.path(), "b.json", "{}");
        write_deck(dir.path(), "a.json", "{}");
        write_deck(dir.path(), "notes.txt", "skip me");

        let files = deck_files_in(dir.path());
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "a.json");
        assert_eq!(files[1].file_name().unwrap(), "b.json");
    }

    #[test]
    fn test_missing_decks_dir_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = deck_files_in(&dir.path().join("does-not-exist"));
        assert!(files.is_empty());
    }
}
