use super::key_hint;
use super::layout::calculate_quiz_chunks;
use crate::quiz::{OptionMark, QuizEngine};
use crate::utils::render_markdown;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub(crate) fn mark_style(mark: OptionMark) -> Style {
    match mark {
        OptionMark::Neutral => Style::default(),
        OptionMark::Selected => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        OptionMark::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        OptionMark::Wrong => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn draw_question(f: &mut Frame, quiz: &QuizEngine, cursor: usize, area: Rect) {
    let Some(question) = quiz.current_question() else {
        return;
    };
    let layout = calculate_quiz_chunks(area);

    let progress = Paragraph::new(format!(
        "Question {} of {}",
        quiz.current_index + 1,
        quiz.total()
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(progress, layout.progress_area);

    let prompt = Paragraph::new(question.question.as_str())
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Question "));
    f.render_widget(prompt, layout.question_area);

    let mut options = Text::default();
    for (i, (option, mark)) in quiz.current_marks().into_iter().enumerate() {
        let pointer = if !quiz.revealed && i == cursor { "> " } else { "  " };
        let radio = if quiz.selected.as_deref() == Some(option) {
            "(•)"
        } else {
            "( )"
        };
        options.push_line(Line::from(vec![
            Span::from(pointer),
            Span::styled(format!("{} {}. {}", radio, i + 1, option), mark_style(mark)),
        ]));
    }
    let options = Paragraph::new(options)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Options "));
    f.render_widget(options, layout.options_area);

    let mut feedback = Text::default();
    let feedback_title;
    if quiz.revealed {
        let correct = quiz.selected.as_deref().is_some_and(|s| question.is_correct(s));
        feedback_title = " Result ";
        feedback.push_line(if correct {
            Line::from(Span::styled(
                "🎉 Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "❌ Incorrect.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        });
        feedback.push_line(Line::from(""));
        feedback.push_line(Line::from(Span::styled(
            "Explanation:",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )));
        feedback.extend(render_markdown(&question.explanation));
    } else if quiz.hint_visible {
        feedback_title = " Hint ";
        feedback.push_line(Line::from(Span::styled(
            "💡 Hint:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        feedback.extend(render_markdown(&question.hint));
    } else {
        feedback_title = "";
    }
    let feedback = Paragraph::new(feedback)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(feedback_title));
    f.render_widget(feedback, layout.feedback_area);

    let mut spans = Vec::new();
    if quiz.revealed {
        spans.extend(key_hint(
            "Enter",
            if quiz.is_last() {
                " Finish Quiz  "
            } else {
                " Next Question  "
            },
        ));
    } else {
        spans.extend(key_hint("↑/↓", " Move  "));
        spans.extend(key_hint("Space/1-9", " Select  "));
        if quiz.selected.is_some() {
            spans.extend(key_hint("Enter", " Submit Answer  "));
        } else {
            spans.push(Span::styled(
                "Enter Submit Answer  ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.extend(key_hint(
            "h",
            if quiz.hint_visible {
                " Hide Hint  "
            } else {
                " Show Hint  "
            },
        ));
    }
    spans.extend(key_hint("q", " Quit"));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_empty(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No quiz questions available.",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please upload a valid PDF or try again.",
            Style::default().fg(Color::Gray),
        )),
    ];
    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}
