use std::fmt;

#[derive(Debug)]
pub enum UploadError {
    Io(std::io::Error),
    Transport(String),
    Status { code: u16, body: String },
    Malformed(String),
    MissingQuiz,
    EmptyQuiz,
    WorkerUnavailable,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Io(e) => write!(f, "Cannot read file: {}", e),
            UploadError::Transport(e) => write!(f, "Request failed: {}", e),
            UploadError::Status { code, body } => {
                if body.trim().is_empty() {
                    write!(f, "Service returned HTTP {}", code)
                } else {
                    write!(f, "Service returned HTTP {}. Body: {}", code, body.trim())
                }
            }
            UploadError::Malformed(e) => write!(f, "Invalid JSON response: {}", e),
            UploadError::MissingQuiz => write!(f, "No quiz data received"),
            UploadError::EmptyQuiz => write!(f, "Quiz contains no questions"),
            UploadError::WorkerUnavailable => write!(f, "Upload worker is not running"),
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UploadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UploadError {
    fn from(e: std::io::Error) -> Self {
        UploadError::Io(e)
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(e: reqwest::Error) -> Self {
        UploadError::Transport(e.to_string())
    }
}
