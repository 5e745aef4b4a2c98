pub mod api;
pub mod app;
pub mod config;
pub mod files;
pub mod intake;
pub mod logger;
pub mod models;
pub mod notify;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod upload_worker;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use api::{QuizApiClient, QuizGenerator, UploadError};
pub use app::App;
pub use config::Config;
pub use intake::{FileIntake, FileSource};
pub use models::{AnswerRecord, AppState, Question, QuestionSet, UploadState, UploadedFile};
pub use notify::{Notification, Notifier, Toasts};
pub use quiz::{DetailView, OptionMark, Phase, QuizEngine};
pub use session::{handle_key, handle_mouse, handle_paste};
pub use upload_worker::spawn_upload_worker;
