use crate::api::UploadError;
use crate::logger;
use crate::models::{Question, QuestionSet};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GenerateQuizResponse {
    #[serde(default)]
    quiz: Option<Vec<Question>>,
}

/// Parses the service body into a question set.
///
/// A missing, null or empty `quiz` field is a failed upload. Questions whose
/// answer is not among their options are kept as-is.
pub fn parse_quiz_response(body: &str) -> Result<QuestionSet, UploadError> {
    let raw: GenerateQuizResponse =
        serde_json::from_str(body).map_err(|e| UploadError::Malformed(e.to_string()))?;

    let questions = raw.quiz.ok_or(UploadError::MissingQuiz)?;
    if questions.is_empty() {
        return Err(UploadError::EmptyQuiz);
    }

    for (i, q) in questions.iter().enumerate() {
        if !q.has_valid_answer() {
            logger::log(&format!(
                "Question {} answer {:?} is not one of its options",
                i + 1,
                q.answer
            ));
        }
    }

    Ok(QuestionSet::new(questions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_quiz() {
        let body = r#"{
            "quiz": [
                {
                    "question": "2+2?",
                    "options": ["3", "4", "5"],
                    "answer": "4",
                    "explanation": "math",
                    "hint": "even"
                },
                {
                    "question": "Sky colour?",
                    "options": ["Blue", "Green"],
                    "answer": "Blue",
                    "explanation": "Rayleigh scattering",
                    "hint": "Look up"
                }
            ]
        }"#;

        let set = parse_quiz_response(body).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().options, vec!["3", "4", "5"]);
        assert_eq!(set.get(1).unwrap().hint, "Look up");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"status": "ok", "quiz": [{"question": "Q", "options": ["a"], "answer": "a", "difficulty": 3}]}"#;
        assert_eq!(parse_quiz_response(body).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_missing_quiz() {
        let result = parse_quiz_response(r#"{"error": "could not read pdf"}"#);
        assert!(matches!(result, Err(UploadError::MissingQuiz)));
    }

    #[test]
    fn test_parse_null_quiz() {
        let result = parse_quiz_response(r#"{"quiz": null}"#);
        assert!(matches!(result, Err(UploadError::MissingQuiz)));
    }

    #[test]
    fn test_parse_empty_quiz() {
        let result = parse_quiz_response(r#"{"quiz": []}"#);
        assert!(matches!(result, Err(UploadError::EmptyQuiz)));
    }

    #[test]
    fn test_parse_not_json() {
        let result = parse_quiz_response("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(UploadError::Malformed(_))));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let result = parse_quiz_response(r#"{"quiz": [{"question": "Q"}]}"#);
        assert!(matches!(result, Err(UploadError::Malformed(_))));
    }

    #[test]
    fn test_parse_keeps_malformed_answer() {
        let body = r#"{"quiz": [{"question": "Q", "options": ["a", "b"], "answer": "c"}]}"#;
        let set = parse_quiz_response(body).unwrap();
        assert!(!set.get(0).unwrap().has_valid_answer());
    }
}
