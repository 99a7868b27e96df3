use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::seq::SliceRandom;
use ratatui::{backend::CrosstermBackend, Terminal};
use rusqlite::Connection;
use std::io;

use nutriquiz::db;
use nutriquiz::decks::{get_deck_files, load_deck};
use nutriquiz::file_io::{create_results_file, write_final_score, write_session_header};
use nutriquiz::logger;
use nutriquiz::models::{AppState, QuizSession};
use nutriquiz::session::handle_quiz_input;
use nutriquiz::ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};

const SESSION_HISTORY_LIMIT: usize = 20;

fn main() -> io::Result<()> {
    logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let db_conn = match db::init_db() {
        Ok(conn) => Some(conn),
        Err(err) => {
            logger::log(&format!("history unavailable: {}", err));
            None
        }
    };

    let mut app_state = AppState::Menu;
    let deck_files = get_deck_files();
    let mut selected_deck_index: usize = 0;
    let mut selected_session_index: usize = 0;
    let mut focused_panel: usize = 0;
    let mut shuffle_enabled = false;
    let mut status_message: Option<String> = None;
    let mut summary_scroll: u16 = 0;
    let mut quiz_session: Option<QuizSession> = None;
    let mut session_history = match &db_conn {
        Some(conn) => db::session::list_recent_sessions(conn, SESSION_HISTORY_LIMIT)
            .unwrap_or_default(),
        None => Vec::new(),
    };

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(
                f,
                &deck_files,
                selected_deck_index,
                &session_history,
                selected_session_index,
                focused_panel,
                shuffle_enabled,
                status_message.as_deref(),
            ),
            AppState::Quiz => {
                if let Some(session) = &quiz_session {
                    draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &quiz_session {
                    draw_summary(f, session, &mut summary_scroll);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Char('1') => focused_panel = 0,
                    KeyCode::Char('2') => focused_panel = 1,
                    KeyCode::Char('s') => shuffle_enabled = !shuffle_enabled,
                    KeyCode::Up => {
                        if focused_panel == 0 {
                            if selected_deck_index > 0 {
                                selected_deck_index -= 1;
                            }
                        } else if selected_session_index > 0 {
                            selected_session_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if focused_panel == 0 {
                            if selected_deck_index < deck_files.len().saturating_sub(1) {
                                selected_deck_index += 1;
                            }
                        } else if selected_session_index
                            < session_history.len().saturating_sub(1)
                        {
                            selected_session_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        if focused_panel == 0 && !deck_files.is_empty() {
                            match load_deck(&deck_files[selected_deck_index]) {
                                Ok(deck) => {
                                    let mut questions = deck.questions;
                                    if shuffle_enabled {
                                        questions.shuffle(&mut rand::thread_rng());
                                    }
                                    match QuizSession::new(deck.title, questions) {
                                        Ok(mut session) => {
                                            attach_session_outputs(&mut session, &db_conn);
                                            quiz_session = Some(session);
                                            status_message = None;
                                            app_state = AppState::Quiz;
                                        }
                                        Err(err) => {
                                            logger::log(&format!("deck rejected: {}", err));
                                            status_message =
                                                Some(format!("No content available: {}", err));
                                        }
                                    }
                                }
                                Err(err) => {
                                    logger::log(&format!("deck unavailable: {}", err));
                                    status_message = Some(format!("Deck unavailable: {}", err));
                                }
                            }
                        }
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                AppState::Quiz => {
                    if let Some(session) = &mut quiz_session {
                        let answered_before = session.answers.len();
                        handle_quiz_input(session, key, &mut app_state)?;

                        if session.answers.len() > answered_before
                            && let Some(conn) = &db_conn
                            && let Some(session_id) = session.db_session_id
                        {
                            let order = session.answers.len();
                            let chosen = session.answers[order - 1];
                            let question = &session.questions[session.current_index];
                            db::answer::record_answer(
                                conn,
                                session_id,
                                order,
                                &question.prompt,
                                chosen,
                                question.correct_index,
                            )
                            .ok();
                            db::session::update_progress(conn, session_id, order).ok();
                        }

                        if app_state == AppState::Summary {
                            finish_session(session, &db_conn);
                            summary_scroll = 0;
                            if let Some(conn) = &db_conn {
                                session_history =
                                    db::session::list_recent_sessions(conn, SESSION_HISTORY_LIMIT)
                                        .unwrap_or_default();
                            }
                        }
                    }
                }
                AppState::QuizQuitConfirm => match key.code {
                    KeyCode::Char('y') => {
                        app_state = AppState::Menu;
                        quiz_session = None;
                    }
                    KeyCode::Char('n') => {
                        app_state = AppState::Quiz;
                    }
                    _ => {}
                },
                AppState::Summary => match key.code {
                    KeyCode::Up => summary_scroll = summary_scroll.saturating_sub(1),
                    KeyCode::Down => summary_scroll = summary_scroll.saturating_add(1),
                    KeyCode::Char('r') => {
                        if let Some(session) = &mut quiz_session
                            && session.restart().is_ok()
                        {
                            attach_session_outputs(session, &db_conn);
                            summary_scroll = 0;
                            app_state = AppState::Quiz;
                        }
                    }
                    KeyCode::Char('m') => {
                        app_state = AppState::Menu;
                        quiz_session = None;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn attach_session_outputs(session: &mut QuizSession, db_conn: &Option<Connection>) {
    session.output_file = None;
    session.progress_header_position = 0;

    match create_results_file(&session.deck_name) {
        Ok(mut file) => {
            match write_session_header(&mut file, &session.deck_name, session.questions.len()) {
                Ok(position) => {
                    session.progress_header_position = position;
                    session.output_file = Some(file);
                }
                Err(err) => logger::log(&format!("results file unavailable: {}", err)),
            }
        }
        Err(err) => logger::log(&format!("results file unavailable: {}", err)),
    }

    session.db_session_id = match db_conn {
        Some(conn) => {
            db::session::create_session(conn, &session.deck_name, session.questions.len())
                .map_err(|err| logger::log(&format!("session not recorded: {}", err)))
                .ok()
        }
        None => None,
    };
}

fn finish_session(session: &mut QuizSession, db_conn: &Option<Connection>) {
    if let Some(ref mut file) = session.output_file {
        write_final_score(file, session.score, session.questions.len()).ok();
    }

    if let Some(conn) = db_conn
        && let Some(session_id) = session.db_session_id
    {
        db::session::complete_session(conn, session_id, session.score).ok();
    }
}
