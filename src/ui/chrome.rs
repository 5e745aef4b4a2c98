use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "QuizMaster",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Use Your PDF resource to test your knowledge",
            Style::default().fg(Color::Gray),
        )),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(header, area);
}

pub fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new("Supported format: PDF only")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
