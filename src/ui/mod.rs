pub mod layout;
mod menu;
mod quiz;
mod sessions;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use sessions::{format_session_date, format_session_item};
pub use summary::draw_summary;
