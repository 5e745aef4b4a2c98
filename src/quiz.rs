use crate::logger;
use crate::models::{AnswerRecord, Question, QuestionSet};

/// Top-level view of a quiz pass.
///
/// `Empty` is terminal: a set without questions never enters `Answering`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Answering,
    Summary,
    Detail(usize),
}

/// How a single option is presented, derived from the answer and the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Selected,
    Correct,
    Wrong,
}

/// Read-only projection of one answered question for the review screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub index: usize,
    pub question: &'a Question,
    pub record: &'a AnswerRecord,
    pub options: Vec<(&'a str, OptionMark)>,
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: QuestionSet,
    pub current_index: usize,
    pub selected: Option<String>,
    pub revealed: bool,
    pub hint_visible: bool,
    pub answers: Vec<AnswerRecord>,
    pub phase: Phase,
}

impl QuizEngine {
    pub fn new(questions: QuestionSet) -> Self {
        let phase = if questions.is_empty() {
            Phase::Empty
        } else {
            Phase::Answering
        };
        Self {
            questions,
            current_index: 0,
            selected: None,
            revealed: false,
            hint_visible: false,
            answers: Vec::new(),
            phase,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Answering => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn select(&mut self, option: &str) -> bool {
        if self.phase != Phase::Answering || self.revealed {
            return false;
        }
        self.selected = Some(option.to_string());
        true
    }

    /// Selects the option at `index` of the current question.
    pub fn select_index(&mut self, index: usize) -> bool {
        let option = match self
            .current_question()
            .and_then(|q| q.options.get(index))
        {
            Some(option) => option.clone(),
            None => return false,
        };
        self.select(&option)
    }

    pub fn submit(&mut self) -> bool {
        if self.phase != Phase::Answering || self.revealed {
            return false;
        }
        let Some(selected) = self.selected.clone() else {
            return false;
        };
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };

        let is_correct = question.is_correct(&selected);
        self.answers.push(AnswerRecord {
            selected_option: Some(selected),
            is_correct,
        });
        self.revealed = true;
        true
    }

    pub fn toggle_hint(&mut self) -> bool {
        if self.phase != Phase::Answering || self.revealed {
            return false;
        }
        self.hint_visible = !self.hint_visible;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.phase != Phase::Answering || !self.revealed {
            return false;
        }
        self.selected = None;
        self.revealed = false;
        self.hint_visible = false;

        if self.is_last() {
            logger::log(&format!(
                "Quiz finished: {}/{} correct",
                self.score(),
                self.total()
            ));
            self.phase = Phase::Summary;
        } else {
            self.current_index += 1;
        }
        true
    }

    pub fn open_detail(&mut self, index: usize) -> bool {
        if self.phase != Phase::Summary || index >= self.answers.len() {
            return false;
        }
        self.phase = Phase::Detail(index);
        true
    }

    pub fn close_detail(&mut self) -> bool {
        if !matches!(self.phase, Phase::Detail(_)) {
            return false;
        }
        self.phase = Phase::Summary;
        true
    }

    /// Replays the same question set from the start.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected = None;
        self.revealed = false;
        self.hint_visible = false;
        self.answers.clear();
        self.phase = if self.questions.is_empty() {
            Phase::Empty
        } else {
            Phase::Answering
        };
    }

    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    /// Marks for the options of the question currently being answered.
    pub fn current_marks(&self) -> Vec<(&str, OptionMark)> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        question
            .options
            .iter()
            .map(|option| {
                let is_selected = self.selected.as_deref() == Some(option.as_str());
                let mark = if self.revealed {
                    classify(question, self.selected.as_deref(), option)
                } else if is_selected {
                    OptionMark::Selected
                } else {
                    OptionMark::Neutral
                };
                (option.as_str(), mark)
            })
            .collect()
    }

    pub fn detail(&self, index: usize) -> Option<DetailView<'_>> {
        let question = self.questions.get(index)?;
        let record = self.answers.get(index)?;
        let options = question
            .options
            .iter()
            .map(|option| {
                (
                    option.as_str(),
                    classify(question, record.selected_option.as_deref(), option),
                )
            })
            .collect();

        Some(DetailView {
            index,
            question,
            record,
            options,
        })
    }
}

fn classify(question: &Question, selected: Option<&str>, option: &str) -> OptionMark {
    if question.is_correct(option) {
        OptionMark::Correct
    } else if selected == Some(option) {
        OptionMark::Wrong
    } else {
        OptionMark::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic() -> Question {
        Question {
            question: "2+2?".to_string(),
            options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            answer: "4".to_string(),
            explanation: "math".to_string(),
            hint: "even".to_string(),
        }
    }

    fn capital() -> Question {
        Question {
            question: "Capital of France?".to_string(),
            options: vec!["Paris".to_string(), "Lyon".to_string()],
            answer: "Paris".to_string(),
            explanation: "It is Paris.".to_string(),
            hint: "City of light".to_string(),
        }
    }

    fn engine(questions: Vec<Question>) -> QuizEngine {
        QuizEngine::new(QuestionSet::new(questions))
    }

    #[test]
    fn test_correct_answer_reaches_summary() {
        let mut quiz = engine(vec![arithmetic()]);
        assert!(quiz.select("4"));
        assert!(quiz.submit());
        assert!(quiz.next());

        assert_eq!(quiz.phase, Phase::Summary);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.total(), 1);
    }

    #[test]
    fn test_wrong_answer_is_recorded() {
        let mut quiz = engine(vec![arithmetic()]);
        quiz.select("3");
        quiz.submit();
        quiz.next();

        assert_eq!(quiz.phase, Phase::Summary);
        assert_eq!(quiz.score(), 0);
        assert_eq!(
            quiz.answers,
            vec![AnswerRecord {
                selected_option: Some("3".to_string()),
                is_correct: false,
            }]
        );
    }

    #[test]
    fn test_empty_set_never_enters_answering() {
        let mut quiz = engine(vec![]);
        assert_eq!(quiz.phase, Phase::Empty);
        assert!(quiz.current_question().is_none());
        assert!(!quiz.select("x"));
        assert!(!quiz.submit());
        assert!(!quiz.toggle_hint());
        assert!(!quiz.next());

        quiz.restart();
        assert_eq!(quiz.phase, Phase::Empty);
    }

    #[test]
    fn test_submit_without_selection_is_rejected() {
        let mut quiz = engine(vec![arithmetic()]);
        assert!(!quiz.submit());
        assert!(!quiz.revealed);
        assert!(quiz.answers.is_empty());
    }

    #[test]
    fn test_submit_twice_appends_once() {
        let mut quiz = engine(vec![arithmetic()]);
        quiz.select("4");
        assert!(quiz.submit());
        assert!(!quiz.submit());
        assert_eq!(quiz.answers.len(), 1);
    }

    #[test]
    fn test_next_requires_reveal() {
        let mut quiz = engine(vec![arithmetic(), capital()]);
        quiz.select("4");
        assert!(!quiz.next());
        assert_eq!(quiz.current_index, 0);
        assert_eq!(quiz.selected.as_deref(), Some("4"));
    }

    #[test]
    fn test_selection_locked_after_reveal() {
        let mut quiz = engine(vec![arithmetic()]);
        quiz.select("3");
        quiz.submit();
        assert!(!quiz.select("4"));
        assert_eq!(quiz.selected.as_deref(), Some("3"));
        assert!(!quiz.answers[0].is_correct);
    }

    #[test]
    fn test_select_can_change_before_submit() {
        let mut quiz = engine(vec![arithmetic()]);
        quiz.select("3");
        quiz.select("4");
        quiz.submit();
        assert!(quiz.answers[0].is_correct);
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut quiz = engine(vec![arithmetic()]);
        assert!(!quiz.select_index(3));
        assert!(quiz.select_index(2));
        assert_eq!(quiz.selected.as_deref(), Some("5"));
    }

    #[test]
    fn test_toggle_hint_twice_restores() {
        let mut quiz = engine(vec![arithmetic()]);
        let before = quiz.hint_visible;
        quiz.toggle_hint();
        assert_ne!(quiz.hint_visible, before);
        quiz.toggle_hint();
        assert_eq!(quiz.hint_visible, before);
    }

    #[test]
    fn test_hint_suppressed_after_reveal_and_cleared_on_next() {
        let mut quiz = engine(vec![arithmetic(), capital()]);
        quiz.toggle_hint();
        quiz.select("4");
        quiz.submit();
        assert!(!quiz.toggle_hint());

        quiz.next();
        assert_eq!(quiz.current_index, 1);
        assert!(!quiz.hint_visible);
        assert!(quiz.selected.is_none());
        assert!(!quiz.revealed);
    }

    #[test]
    fn test_full_pass_answers_match_length_and_score() {
        let mut quiz = engine(vec![arithmetic(), capital(), arithmetic()]);
        for choice in ["4", "Lyon", "5"] {
            quiz.select(choice);
            quiz.submit();
            quiz.next();
        }
        assert_eq!(quiz.phase, Phase::Summary);
        assert_eq!(quiz.answers.len(), 3);
        assert_eq!(
            quiz.score(),
            quiz.answers.iter().filter(|a| a.is_correct).count()
        );
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_restart_from_every_phase() {
        let mut quiz = engine(vec![arithmetic(), capital()]);
        quiz.select("4");
        quiz.submit();
        quiz.restart();
        assert_eq!(quiz.phase, Phase::Answering);
        assert_eq!(quiz.current_index, 0);
        assert!(quiz.answers.is_empty());

        for choice in ["4", "Paris"] {
            quiz.select(choice);
            quiz.submit();
            quiz.next();
        }
        quiz.open_detail(1);
        assert_eq!(quiz.phase, Phase::Detail(1));
        quiz.restart();
        assert_eq!(quiz.phase, Phase::Answering);
        assert_eq!(quiz.current_index, 0);
        assert!(quiz.selected.is_none());
        assert!(!quiz.revealed);
        assert!(!quiz.hint_visible);
        assert!(quiz.answers.is_empty());
        assert_eq!(quiz.questions().len(), 2);
    }

    #[test]
    fn test_detail_navigation_guards() {
        let mut quiz = engine(vec![arithmetic()]);
        assert!(!quiz.open_detail(0));

        quiz.select("4");
        quiz.submit();
        quiz.next();
        assert!(!quiz.open_detail(1));
        assert!(quiz.open_detail(0));
        assert!(!quiz.open_detail(0));
        assert!(quiz.close_detail());
        assert_eq!(quiz.phase, Phase::Summary);
        assert!(!quiz.close_detail());
    }

    #[test]
    fn test_detail_projects_recorded_answer() {
        let mut quiz = engine(vec![arithmetic(), capital()]);
        quiz.select("3");
        quiz.submit();
        quiz.next();
        quiz.select("Paris");
        quiz.submit();
        quiz.next();

        let detail = quiz.detail(0).unwrap();
        assert_eq!(detail.question.question, "2+2?");
        assert_eq!(
            detail.options,
            vec![
                ("3", OptionMark::Wrong),
                ("4", OptionMark::Correct),
                ("5", OptionMark::Neutral),
            ]
        );

        let before = quiz.answers.clone();
        let detail = quiz.detail(1).unwrap();
        assert_eq!(detail.options[0], ("Paris", OptionMark::Correct));
        assert_eq!(detail.options[1], ("Lyon", OptionMark::Neutral));
        assert_eq!(quiz.answers, before);
        assert!(quiz.detail(2).is_none());
    }

    #[test]
    fn test_malformed_question_has_no_correct_option() {
        let mut q = arithmetic();
        q.answer = "four".to_string();
        let mut quiz = engine(vec![q]);
        quiz.select("4");
        quiz.submit();

        assert!(!quiz.answers[0].is_correct);
        assert!(
            quiz.current_marks()
                .iter()
                .all(|(_, mark)| *mark != OptionMark::Correct)
        );
    }

    #[test]
    fn test_current_marks_before_and_after_reveal() {
        let mut quiz = engine(vec![arithmetic()]);
        quiz.select("3");
        assert_eq!(quiz.current_marks()[0], ("3", OptionMark::Selected));
        assert_eq!(quiz.current_marks()[1], ("4", OptionMark::Neutral));

        quiz.submit();
        let marks = quiz.current_marks();
        assert_eq!(marks[0], ("3", OptionMark::Wrong));
        assert_eq!(marks[1], ("4", OptionMark::Correct));
    }

    #[test]
    fn test_same_actions_same_outcome() {
        let run = || {
            let mut quiz = engine(vec![arithmetic(), capital()]);
            for choice in ["5", "Paris"] {
                quiz.select(choice);
                quiz.submit();
                quiz.next();
            }
            (quiz.answers.clone(), quiz.score())
        };
        assert_eq!(run(), run());
    }
}
