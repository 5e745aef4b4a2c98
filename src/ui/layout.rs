use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const TOAST_WIDTH: u16 = 44;
pub const TOAST_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub struct IntakeLayout {
    pub drop_area: Rect,
    pub files_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub progress_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_app_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

pub fn calculate_intake_chunks(area: Rect) -> IntakeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    IntakeLayout {
        drop_area: chunks[0],
        files_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Percentage(30),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        progress_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

/// Slot for the `index`-th toast, stacked downwards from the top-right corner.
pub fn toast_area(area: Rect, index: usize) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let y = area.y + 1 + (index as u16).saturating_mul(TOAST_HEIGHT);
    if y + TOAST_HEIGHT > area.y + area.height {
        return None;
    }
    Some(Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        y,
        width,
        TOAST_HEIGHT,
    ))
}
