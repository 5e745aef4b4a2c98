pub mod client;
pub mod error;
pub mod response;

pub use client::{QuizApiClient, QuizGenerator};
pub use error::UploadError;
pub use response::parse_quiz_response;
