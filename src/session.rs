use crate::file_io::{update_progress_header, write_question_entry};
use crate::logger;
use crate::models::{AppState, OptionMark, QuizQuestion, QuizSession};
use crossterm::event::{KeyCode, KeyEvent};
use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no questions available")]
    NoContent,
    #[error("option index {0} is out of range")]
    OptionOutOfRange(usize),
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("the session is already finished")]
    Finished,
    #[error("the session is not finished yet")]
    NotFinished,
}

impl QuizSession {
    pub fn new(deck_name: String, questions: Vec<QuizQuestion>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoContent);
        }

        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            cursor: 0,
            deck_name,
            output_file: None,
            progress_header_position: 0,
            db_session_id: None,
        })
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Whether the question at `current_index` has already received its one
    /// allowed answer.
    pub fn is_answered(&self) -> bool {
        self.answers.len() > self.current_index
    }

    /// Records the one answer allowed for the current question. Rejected
    /// requests leave `score` and `answers` untouched.
    pub fn select_option(&mut self, chosen: usize) -> Result<(), SessionError> {
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(SessionError::Finished)?;

        if self.answers.len() > self.current_index {
            return Err(SessionError::AlreadyAnswered);
        }
        if chosen >= question.options.len() {
            return Err(SessionError::OptionOutOfRange(chosen));
        }

        self.answers.push(chosen);
        if chosen == question.correct_index {
            self.score += 1;
        }
        Ok(())
    }

    /// Moves on to the next question, or into the finished state after the
    /// last one. Only legal once the current question is answered.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        if !self.is_answered() {
            return Err(SessionError::NotAnswered);
        }

        self.current_index += 1;
        self.cursor = 0;
        Ok(())
    }

    /// Re-enters the session from the finished state with the same question
    /// list, as if it had been freshly constructed.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if !self.is_finished() {
            return Err(SessionError::NotFinished);
        }

        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        self.cursor = 0;
        Ok(())
    }

    pub fn score_line(&self) -> String {
        format!("{} / {}", self.score, self.questions.len())
    }

    pub fn option_mark(&self, option: usize) -> OptionMark {
        let Some(question) = self.questions.get(self.current_index) else {
            return OptionMark::Disabled;
        };

        if self.is_answered() {
            if option == question.correct_index {
                OptionMark::Correct
            } else if Some(option) == self.answers.last().copied() {
                OptionMark::Incorrect
            } else {
                OptionMark::Disabled
            }
        } else if option == self.cursor {
            OptionMark::Highlighted
        } else {
            OptionMark::Selectable
        }
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if let Some(question) = self.current_question()
            && self.cursor < question.options.len().saturating_sub(1)
        {
            self.cursor += 1;
        }
    }
}

pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> io::Result<()> {
    if !session.is_answered() {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
                Ok(())
            }
            KeyCode::Up => {
                session.cursor_up();
                Ok(())
            }
            KeyCode::Down => {
                session.cursor_down();
                Ok(())
            }
            KeyCode::Enter => {
                let chosen = session.cursor;
                submit_selection(session, chosen)
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let chosen = (c as u8 - b'1') as usize;
                submit_selection(session, chosen)
            }
            _ => Ok(()),
        }
    } else {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
                Ok(())
            }
            KeyCode::Enter => {
                match session.advance() {
                    Ok(()) => {
                        if session.is_finished() {
                            *app_state = AppState::Summary;
                        }
                    }
                    Err(err) => logger::log(&format!("advance rejected: {}", err)),
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn submit_selection(session: &mut QuizSession, chosen: usize) -> io::Result<()> {
    if let Err(err) = session.select_option(chosen) {
        logger::log(&format!("selection rejected: {}", err));
        return Ok(());
    }

    let index = session.current_index;
    if let Some(ref mut file) = session.output_file {
        let question = &session.questions[index];
        write_question_entry(
            file,
            index + 1,
            &question.prompt,
            &question.options,
            chosen,
            question.correct_index,
        )?;
        update_progress_header(
            file,
            session.progress_header_position,
            session.answers.len(),
            session.questions.len(),
        )?;
    }

    Ok(())
}
