use crate::app::App;
use crate::models::AppState;
use crate::quiz::{Phase, QuizEngine};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    match app.state {
        AppState::Intake => handle_intake_input(app, key),
        AppState::Quiz => {
            let App {
                quiz,
                option_cursor,
                summary_cursor,
                should_quit,
                ..
            } = app;
            if let Some(quiz) = quiz {
                handle_quiz_input(quiz, key, option_cursor, summary_cursor, should_quit);
            }
        }
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    if app.state == AppState::Intake {
        app.drop_text(text);
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.state != AppState::Intake || !app.intake.accepts_input() {
        return;
    }
    match mouse.kind {
        MouseEventKind::Drag(_) => app.intake.drag_enter(),
        MouseEventKind::Up(_) => app.intake.drag_leave(),
        _ => {}
    }
}

fn handle_intake_input(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.should_quit = true;
        return;
    }
    if !app.intake.accepts_input() {
        return;
    }

    match key.code {
        KeyCode::Up => {
            app.selected_file_index = app.selected_file_index.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_file_index < app.pdf_files.len().saturating_sub(1) {
                app.selected_file_index += 1;
            }
        }
        KeyCode::Enter => {
            if app.intake.file.is_some() {
                app.start_quiz();
            } else {
                app.pick_highlighted_file();
            }
        }
        KeyCode::Char('s') => {
            app.start_quiz();
        }
        KeyCode::Char('n') => app.clear_file(),
        KeyCode::Char('r') => app.refresh_files(),
        _ => {}
    }
}

pub fn handle_quiz_input(
    quiz: &mut QuizEngine,
    key: KeyEvent,
    option_cursor: &mut usize,
    summary_cursor: &mut usize,
    should_quit: &mut bool,
) {
    match quiz.phase {
        Phase::Empty => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                *should_quit = true;
            }
        }
        Phase::Answering => {
            let option_count = quiz.current_question().map_or(0, |q| q.options.len());
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => *should_quit = true,
                KeyCode::Up if !quiz.revealed => {
                    *option_cursor = option_cursor.saturating_sub(1);
                }
                KeyCode::Down if !quiz.revealed => {
                    if *option_cursor < option_count.saturating_sub(1) {
                        *option_cursor += 1;
                    }
                }
                KeyCode::Char(' ') => {
                    quiz.select_index(*option_cursor);
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = (c as usize) - ('1' as usize);
                    if quiz.select_index(index) {
                        *option_cursor = index;
                    }
                }
                KeyCode::Char('h') => {
                    quiz.toggle_hint();
                }
                KeyCode::Enter | KeyCode::Char('n') => {
                    if quiz.revealed {
                        quiz.next();
                        *option_cursor = 0;
                        *summary_cursor = 0;
                    } else {
                        quiz.submit();
                    }
                }
                _ => {}
            }
        }
        Phase::Summary => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => *should_quit = true,
            KeyCode::Left | KeyCode::Up => {
                *summary_cursor = summary_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down => {
                if *summary_cursor < quiz.answers.len().saturating_sub(1) {
                    *summary_cursor += 1;
                }
            }
            KeyCode::Enter => {
                quiz.open_detail(*summary_cursor);
            }
            KeyCode::Char('r') => {
                quiz.restart();
                *option_cursor = 0;
                *summary_cursor = 0;
            }
            _ => {}
        },
        Phase::Detail(_) => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                quiz.close_detail();
            }
            KeyCode::Char('r') => {
                quiz.restart();
                *option_cursor = 0;
                *summary_cursor = 0;
            }
            KeyCode::Char('q') => *should_quit = true,
            _ => {}
        },
    }
}
