use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::path::PathBuf;

use crate::db::session::SessionData;
use crate::ui::sessions::format_session_item;

fn draw_panel_header(area: ratatui::layout::Rect, title: &str, focused: bool, f: &mut Frame) {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let header = Paragraph::new(title)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default());

    f.render_widget(header, area);
}

pub fn draw_menu(
    f: &mut Frame,
    deck_files: &[PathBuf],
    selected_deck_index: usize,
    sessions: &[SessionData],
    selected_session_index: usize,
    focused_panel: usize,
    shuffle_enabled: bool,
    status_message: Option<&str>,
) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(area);

    let title = Paragraph::new("NutriQuiz v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let deck_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[1]);

    let sessions_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[2]);

    draw_panel_header(deck_chunks[0], "[1] Decks", focused_panel == 0, f);

    let deck_items: Vec<ListItem> = if deck_files.is_empty() {
        vec![ListItem::new("No deck files found").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        deck_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path.file_stem().unwrap().to_string_lossy().to_string();
                let style = if i == selected_deck_index && focused_panel == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let deck_list = List::new(deck_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused_panel == 0 {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(deck_list, deck_chunks[1]);

    draw_panel_header(sessions_chunks[0], "[2] Past Sessions", focused_panel == 1, f);

    let session_items: Vec<ListItem> = if sessions.is_empty() {
        vec![ListItem::new("No past sessions").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        sessions
            .iter()
            .enumerate()
            .map(|(i, session)| {
                let text = format_session_item(session);
                let style = if i == selected_session_index && focused_panel == 1 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect()
    };

    let sessions_list = List::new(session_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused_panel == 1 {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(sessions_list, sessions_chunks[1]);

    let help_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[3]);

    let status_content = if let Some(message) = status_message {
        vec![Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))]
    } else {
        vec![
            Line::from(format!("Decks: {}", deck_files.len())),
            Line::from(format!(
                "Shuffle: {}",
                if shuffle_enabled { "on" } else { "off" }
            )),
        ]
    };

    let status = Paragraph::new(status_content)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, help_chunks[0]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "1/2",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Focus Panel  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start Quiz  "),
        Span::styled(
            "s",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Shuffle  "),
        Span::styled(
            "Esc/Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, help_chunks[1]);
}
