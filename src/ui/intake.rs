use super::key_hint;
use super::layout::calculate_intake_chunks;
use crate::app::App;
use crate::utils::{format_size_mb, truncate_string};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_intake(f: &mut Frame, app: &App, area: Rect) {
    let layout = calculate_intake_chunks(area);
    let uploading = app.intake.is_uploading();

    let border_style = if app.intake.is_dragging {
        Style::default().fg(Color::Magenta)
    } else if uploading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    let drop_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let drop_lines = if app.intake.is_dragging {
        vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Release to drop the file",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    } else if let Some(file) = &app.intake.file {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let width = area.width.saturating_sub(16) as usize;
        vec![
            Line::from(Span::styled(
                "Your Uploaded File",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("File Name: ", label),
                Span::from(truncate_string(&file.name, width)),
            ]),
            Line::from(vec![
                Span::styled("File Size: ", label),
                Span::from(format_size_mb(file.size_bytes)),
            ]),
            Line::from(vec![
                Span::styled("File Type: ", label),
                Span::from(file.mime_type.clone()),
            ]),
            Line::from(""),
            if uploading {
                Line::from(Span::styled(
                    "Generating your quiz...",
                    Style::default().fg(Color::Yellow),
                ))
            } else {
                let mut spans = Vec::new();
                spans.extend(key_hint("s", " Start Quiz    "));
                spans.extend(key_hint("n", " New File"));
                Line::from(spans)
            },
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Drop your PDF here",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "or pick a file from the list below",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ]
    };

    let mut drop_style = Style::default();
    if uploading {
        drop_style = drop_style.add_modifier(Modifier::DIM);
    }
    let drop_zone = Paragraph::new(drop_lines)
        .style(drop_style)
        .alignment(Alignment::Center)
        .block(drop_block);
    f.render_widget(drop_zone, layout.drop_area);

    draw_file_list(f, app, layout.files_area);

    let mut help_spans = Vec::new();
    help_spans.extend(key_hint("↑/↓", " Navigate  "));
    help_spans.extend(key_hint("Enter", if app.intake.file.is_some() {
        " Start Quiz  "
    } else {
        " Select PDF file  "
    }));
    help_spans.extend(key_hint("r", " Rescan  "));
    help_spans.extend(key_hint("q", " Quit"));
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_file_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" PDF files in {} ", app.pdf_dir.display()));

    if app.pdf_files.is_empty() {
        let empty = Paragraph::new("No PDF files found")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .pdf_files
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            ListItem::new(truncate_string(&name, width))
        })
        .collect();

    let highlight = if app.intake.accepts_input() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected_file_index));
    f.render_stateful_widget(list, area, &mut state);
}
