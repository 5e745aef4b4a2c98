use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

pub const PDF_MIME: &str = "application/pdf";

/// One multiple-choice question as produced by the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub hint: String,
}

impl Question {
    /// Exact, case- and whitespace-sensitive comparison against the answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    pub fn has_valid_answer(&self) -> bool {
        self.options.iter().any(|o| o == &self.answer)
    }
}

/// Ordered, immutable set of questions for one uploaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSet {
    questions: Arc<[Question]>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub selected_option: Option<String>,
    pub is_correct: bool,
}

/// A candidate file picked from the list or dropped onto the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl UploadedFile {
    pub fn from_path(path: PathBuf) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(&path)?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = crate::files::mime_type_for(&path).to_string();

        Ok(Self {
            path,
            name,
            size_bytes: metadata.len(),
            mime_type,
        })
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub enum UploadRequest {
    Generate { request_id: u64, file: UploadedFile },
}

#[derive(Debug)]
pub enum UploadResponse {
    Quiz {
        request_id: u64,
        questions: QuestionSet,
    },
    Error {
        request_id: u64,
        error: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Intake,
    Quiz,
}
