use crate::models::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{calculate_max_scroll, estimate_text_height, truncate_string};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession, scroll_y: &mut u16) {
    let layout = calculate_summary_chunks(f.area());

    let title_text = format!("Session Results - {}", session.deck_name);
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(Span::styled(
        format!("Score: {}", session.score_line()),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    summary_text.push_line(Line::from(""));

    for (i, question) in session.questions.iter().enumerate() {
        let chosen = session.answers.get(i).copied();
        let correct = chosen == Some(question.correct_index);
        let symbol = if correct { "[+]" } else { "[x]" };

        summary_text.push_line(Line::from(format!(
            "{} {}. {}",
            symbol,
            i + 1,
            truncate_string(&question.prompt, 60)
        )));
        if let Some(chosen) = chosen {
            summary_text.push_line(Line::from(format!(
                "    Your answer: {}",
                truncate_string(&question.options[chosen], 56)
            )));
            if !correct {
                summary_text.push_line(Line::from(format!(
                    "    Correct answer: {}",
                    truncate_string(&question.options[question.correct_index], 52)
                )));
            }
        }
        summary_text.push_line(Line::from(""));
    }

    let visible_height = layout.content_area.height.saturating_sub(2) as usize;
    let text_width = layout.content_area.width.saturating_sub(2) as usize;
    let content_height = estimate_text_height(&summary_text, text_width);
    let max_scroll = calculate_max_scroll(content_height, visible_height);
    let bounded_scroll = (*scroll_y).min(max_scroll);
    *scroll_y = bounded_scroll;

    let summary = Paragraph::new(summary_text)
        .wrap(Wrap { trim: true })
        .scroll((bounded_scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll  "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart Quiz  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
