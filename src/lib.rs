pub mod db;
pub mod decks;
pub mod file_io;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use decks::{get_deck_files, load_deck, DeckError};
pub use file_io::{
    create_results_file, update_progress_header, write_final_score, write_question_entry,
    write_session_header,
};
pub use models::{AppState, Deck, OptionMark, QuizQuestion, QuizSession};
pub use session::{handle_quiz_input, SessionError};
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
pub use utils::truncate_string;
