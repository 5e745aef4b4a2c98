use crate::api::UploadError;
use crate::logger;
use crate::models::{QuestionSet, UploadRequest, UploadResponse, UploadState, UploadedFile};
use crate::notify::{Notification, Notifier};
use std::sync::mpsc::Sender;

/// Where a candidate file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
}

/// Holds at most one selected PDF and drives its upload.
#[derive(Debug)]
pub struct FileIntake {
    pub file: Option<UploadedFile>,
    pub upload_state: UploadState,
    pub is_dragging: bool,
    pending_request: Option<u64>,
    next_request_id: u64,
}

impl Default for FileIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl FileIntake {
    pub fn new() -> Self {
        Self {
            file: None,
            upload_state: UploadState::Idle,
            is_dragging: false,
            pending_request: None,
            next_request_id: 1,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_state == UploadState::Uploading
    }

    /// Pointer and selection input is ignored while an upload is in flight.
    pub fn accepts_input(&self) -> bool {
        !self.is_uploading()
    }

    /// Non-PDF files are dropped without a word; the selection stays as it was.
    pub fn select_file(&mut self, source: FileSource, file: UploadedFile) -> bool {
        if source == FileSource::Drop {
            self.is_dragging = false;
        }
        if !file.is_pdf() {
            logger::log(&format!(
                "Ignoring {:?} file {} with type {}",
                source, file.name, file.mime_type
            ));
            return false;
        }
        logger::log(&format!(
            "Selected {} ({} bytes) via {:?}",
            file.name, file.size_bytes, source
        ));
        self.file = Some(file);
        true
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn drag_enter(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// Issues one upload request for the selected file.
    ///
    /// Returns false without side effects when nothing is selected or an
    /// upload is already in flight.
    pub fn start_quiz(
        &mut self,
        uploads: &Sender<UploadRequest>,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if self.is_uploading() {
            return false;
        }
        let Some(file) = self.file.clone() else {
            return false;
        };

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.upload_state = UploadState::Uploading;
        self.is_dragging = false;
        notifier.notify(Notification::Preparing);
        logger::log(&format!("Uploading {} as request {}", file.name, request_id));

        if uploads
            .send(UploadRequest::Generate { request_id, file })
            .is_err()
        {
            self.pending_request = Some(request_id);
            self.fail_pending(&UploadError::WorkerUnavailable, notifier);
            return false;
        }

        self.pending_request = Some(request_id);
        true
    }

    /// Ends the in-flight attempt as failed when no response can arrive.
    pub fn fail_pending(&mut self, error: &UploadError, notifier: &mut dyn Notifier) -> bool {
        if !self.is_uploading() {
            return false;
        }
        logger::log(&format!("Error starting quiz: {}", error));
        self.pending_request = None;
        self.upload_state = UploadState::Failed;
        notifier.notify(Notification::Failed);
        true
    }

    /// Applies the outcome of the in-flight upload.
    ///
    /// On success the question set is handed back to the caller, which owns
    /// it from then on.
    pub fn complete_upload(
        &mut self,
        response: UploadResponse,
        notifier: &mut dyn Notifier,
    ) -> Option<QuestionSet> {
        let request_id = match &response {
            UploadResponse::Quiz { request_id, .. } | UploadResponse::Error { request_id, .. } => {
                *request_id
            }
        };
        if self.pending_request != Some(request_id) {
            logger::log(&format!("Discarding stale response {}", request_id));
            return None;
        }
        self.pending_request = None;

        match response {
            UploadResponse::Quiz { questions, .. } => {
                logger::log(&format!("Received {} questions", questions.len()));
                self.upload_state = UploadState::Succeeded;
                notifier.notify(Notification::Ready);
                Some(questions)
            }
            UploadResponse::Error { error, .. } => {
                logger::log(&format!("Error starting quiz: {}", error));
                self.upload_state = UploadState::Failed;
                notifier.notify(Notification::Failed);
                None
            }
        }
    }
}
