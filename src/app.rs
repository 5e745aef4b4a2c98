use crate::api::UploadError;
use crate::files::{get_pdf_files, parse_dropped_path};
use crate::intake::{FileIntake, FileSource};
use crate::logger;
use crate::models::{AppState, QuestionSet, UploadRequest, UploadResponse, UploadedFile};
use crate::notify::Toasts;
use crate::quiz::QuizEngine;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

/// Shows the intake screen until a question set arrives, then the quiz.
pub struct App {
    pub state: AppState,
    pub intake: FileIntake,
    pub quiz: Option<QuizEngine>,
    pub toasts: Toasts,
    pub pdf_dir: PathBuf,
    pub pdf_files: Vec<PathBuf>,
    pub selected_file_index: usize,
    pub option_cursor: usize,
    pub summary_cursor: usize,
    pub should_quit: bool,
    upload_tx: Sender<UploadRequest>,
    upload_rx: Receiver<UploadResponse>,
}

impl App {
    pub fn new(
        pdf_dir: PathBuf,
        upload_tx: Sender<UploadRequest>,
        upload_rx: Receiver<UploadResponse>,
    ) -> Self {
        let pdf_files = get_pdf_files(&pdf_dir);
        Self {
            state: AppState::Intake,
            intake: FileIntake::new(),
            quiz: None,
            toasts: Toasts::new(),
            pdf_dir,
            pdf_files,
            selected_file_index: 0,
            option_cursor: 0,
            summary_cursor: 0,
            should_quit: false,
            upload_tx,
            upload_rx,
        }
    }

    pub fn refresh_files(&mut self) {
        self.pdf_files = get_pdf_files(&self.pdf_dir);
        self.selected_file_index = self
            .selected_file_index
            .min(self.pdf_files.len().saturating_sub(1));
    }

    pub fn pick_highlighted_file(&mut self) -> bool {
        let Some(path) = self.pdf_files.get(self.selected_file_index).cloned() else {
            return false;
        };
        self.select_path(FileSource::Picker, path)
    }

    /// Handles text pasted into the terminal, which is how drops arrive.
    pub fn drop_text(&mut self, pasted: &str) -> bool {
        match parse_dropped_path(pasted) {
            Some(path) => self.select_path(FileSource::Drop, path),
            None => {
                self.intake.drag_leave();
                false
            }
        }
    }

    fn select_path(&mut self, source: FileSource, path: PathBuf) -> bool {
        if !self.intake.accepts_input() {
            return false;
        }
        match UploadedFile::from_path(path.clone()) {
            Ok(file) => self.intake.select_file(source, file),
            Err(e) => {
                logger::log(&format!("Cannot open {}: {}", path.display(), e));
                self.intake.drag_leave();
                false
            }
        }
    }

    pub fn clear_file(&mut self) {
        if self.intake.accepts_input() {
            self.intake.clear_file();
        }
    }

    pub fn start_quiz(&mut self) -> bool {
        self.intake.start_quiz(&self.upload_tx, &mut self.toasts)
    }

    /// Drains finished uploads; returns true if anything changed on screen.
    pub fn poll_uploads(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.upload_rx.try_recv() {
                Ok(response) => {
                    changed = true;
                    if let Some(questions) = self.intake.complete_upload(response, &mut self.toasts) {
                        self.hand_off(questions);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    changed |= self
                        .intake
                        .fail_pending(&UploadError::WorkerUnavailable, &mut self.toasts);
                    break;
                }
            }
        }
        changed
    }

    /// Moves the question set into a fresh quiz and switches screens.
    pub fn hand_off(&mut self, questions: QuestionSet) {
        self.quiz = Some(QuizEngine::new(questions));
        self.option_cursor = 0;
        self.summary_cursor = 0;
        self.state = AppState::Quiz;
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.toasts.prune(now)
    }
}
