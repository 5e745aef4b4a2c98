use super::key_hint;
use super::quiz::mark_style;
use crate::quiz::{OptionMark, QuizEngine};
use crate::utils::render_markdown;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, quiz: &QuizEngine, cursor: usize, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let score = quiz.score();
    let total = quiz.total();

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "Quiz Summary",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::from("You scored "),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" out of "),
        Span::styled(total.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Select any result to view details:",
        Style::default().fg(Color::Gray),
    )));
    text.push_line(Line::from(""));

    let mut markers = Vec::new();
    for (i, answer) in quiz.answers.iter().enumerate() {
        let symbol = if answer.is_correct { "✅" } else { "❌" };
        let style = if i == cursor {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        markers.push(Span::styled(format!(" {}{} ", i + 1, symbol), style));
    }
    text.push_line(Line::from(markers));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!(
            "✅ Correct ({}) • ❌ Incorrect ({})",
            score,
            total.saturating_sub(score)
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let summary = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, chunks[0]);

    let mut spans = Vec::new();
    spans.extend(key_hint("←/→", " Choose  "));
    spans.extend(key_hint("Enter", " Details  "));
    spans.extend(key_hint("r", " Restart Quiz  "));
    spans.extend(key_hint("q", " Quit"));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

pub fn draw_detail(f: &mut Frame, quiz: &QuizEngine, index: usize, area: Rect) {
    let Some(detail) = quiz.detail(index) else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        detail.question.question.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));

    for (option, mark) in &detail.options {
        let mut spans = vec![Span::styled(format!("  {}", option), mark_style(*mark))];
        if detail.record.selected_option.as_deref() == Some(*option) {
            spans.push(Span::from(" (Your answer)"));
        }
        if *mark == OptionMark::Correct {
            spans.push(Span::from(" (Correct)"));
        }
        text.push_line(Line::from(spans));
    }

    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Explanation:",
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));
    text.extend(render_markdown(&detail.question.explanation));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Hint:",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    text.extend(render_markdown(&detail.question.hint));

    let title = format!(" Question {} Details ", detail.index + 1);
    let body = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, chunks[0]);

    let mut spans = Vec::new();
    spans.extend(key_hint("Esc", " Back to Summary  "));
    spans.extend(key_hint("r", " Restart Quiz  "));
    spans.extend(key_hint("q", " Quit"));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
