use serde::Deserialize;
use std::fs::File;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answerIndex")]
    pub correct_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub score: usize,
    pub answers: Vec<usize>,
    pub cursor: usize,
    pub deck_name: String,
    pub output_file: Option<File>,
    pub progress_header_position: u64,
    pub db_session_id: Option<u64>,
}

/// How a single option of the current question should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Selectable,
    Highlighted,
    Correct,
    Incorrect,
    Disabled,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}
