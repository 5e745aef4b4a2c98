use super::layout::toast_area;
use crate::notify::{Toast, ToastKind};
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_toasts(f: &mut Frame, toasts: &[Toast]) {
    let area = f.area();
    for (i, toast) in toasts.iter().enumerate() {
        let Some(slot) = toast_area(area, i) else {
            break;
        };
        let (icon, color) = match toast.kind {
            ToastKind::Loading => ("⏳", Color::Yellow),
            ToastKind::Success => ("✔", Color::Green),
            ToastKind::Error => ("✖", Color::Red),
        };
        let widget = Paragraph::new(format!("{} {}", icon, toast.message))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, slot);
        f.render_widget(widget, slot);
    }
}
