use crate::api::{parse_quiz_response, UploadError};
use crate::config::UPLOAD_FIELD;
use crate::logger;
use crate::models::{QuestionSet, UploadedFile};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

/// Turns an uploaded document into a question set.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate_quiz(&self, file: &UploadedFile) -> Result<QuestionSet, UploadError>;
}

#[derive(Debug, Clone)]
pub struct QuizApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl QuizApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn build_form(file: &UploadedFile, bytes: Vec<u8>) -> Result<Form, UploadError> {
    let part = Part::bytes(bytes)
        .file_name(file.name.clone())
        .mime_str(&file.mime_type)?;
    Ok(Form::new().part(UPLOAD_FIELD, part))
}

#[async_trait]
impl QuizGenerator for QuizApiClient {
    async fn generate_quiz(&self, file: &UploadedFile) -> Result<QuestionSet, UploadError> {
        let bytes = tokio::fs::read(&file.path).await?;
        let form = build_form(file, bytes)?;

        logger::log(&format!("POST {} ({})", self.endpoint, file.name));
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UploadError::Status {
                code: status.as_u16(),
                body,
            });
        }

        parse_quiz_response(&body)
    }
}

#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::time::Duration;

/// Scripted generator for tests: replays responses in order and counts calls.
#[cfg(test)]
pub struct MockQuizGenerator {
    responses: Mutex<Vec<Result<QuestionSet, UploadError>>>,
    delay: Duration,
    pub calls: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockQuizGenerator {
    pub fn new(responses: Vec<Result<QuestionSet, UploadError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl QuizGenerator for MockQuizGenerator {
    async fn generate_quiz(&self, file: &UploadedFile) -> Result<QuestionSet, UploadError> {
        self.calls.lock().unwrap().push(file.name.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(UploadError::MissingQuiz)
        } else {
            responses.remove(0)
        }
    }
}
