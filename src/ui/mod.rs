pub mod layout;
mod chrome;
mod intake;
mod quiz;
mod summary;
mod toast;

pub use chrome::{draw_footer, draw_header};
pub use intake::draw_intake;
pub use quiz::{draw_empty, draw_question};
pub use summary::{draw_detail, draw_summary};
pub use toast::draw_toasts;

use crate::app::App;
use crate::models::AppState;
use crate::quiz::Phase;
use layout::calculate_app_chunks;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let layout = calculate_app_chunks(f.area());
    draw_header(f, layout.header_area);

    match (app.state, &app.quiz) {
        (AppState::Quiz, Some(quiz)) => match quiz.phase {
            Phase::Empty => draw_empty(f, layout.body_area),
            Phase::Answering => draw_question(f, quiz, app.option_cursor, layout.body_area),
            Phase::Summary => draw_summary(f, quiz, app.summary_cursor, layout.body_area),
            Phase::Detail(index) => draw_detail(f, quiz, index, layout.body_area),
        },
        _ => draw_intake(f, app, layout.body_area),
    }

    draw_footer(f, layout.footer_area);
    draw_toasts(f, app.toasts.visible());
}

/// Key name followed by its action, as shown in the help bars.
pub(crate) fn key_hint(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(action),
    ]
}
