#[cfg(test)]
mod ui_render_tests {
    use crate::app::App;
    use crate::models::{Question, QuestionSet, UploadRequest, UploadResponse};
    use crate::quiz::Phase;
    use crate::ui;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::mpsc;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for row in buffer.content.chunks(buffer.area.width as usize) {
            for cell in row {
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    fn questions() -> QuestionSet {
        QuestionSet::new(vec![
            Question {
                question: "What is 2+2?".to_string(),
                options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
                answer: "4".to_string(),
                explanation: "Basic **arithmetic**".to_string(),
                hint: "It is even".to_string(),
            },
            Question {
                question: "Capital of France?".to_string(),
                options: vec!["Paris".to_string(), "Lyon".to_string()],
                answer: "Paris".to_string(),
                explanation: "Paris is the capital".to_string(),
                hint: "City of light".to_string(),
            },
        ])
    }

    fn new_app() -> (
        App,
        tempfile::TempDir,
        mpsc::Receiver<UploadRequest>,
        mpsc::Sender<UploadResponse>,
    ) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("biology.pdf"), vec![0u8; 1_572_864]).unwrap();
        let (req_tx, req_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        (
            App::new(dir.path().to_path_buf(), req_tx, resp_rx),
            dir,
            req_rx,
            resp_tx,
        )
    }

    #[test]
    fn test_intake_shows_header_footer_and_files() {
        let (app, _dir, _rx, _tx) = new_app();
        let screen = render(&app);
        assert!(screen.contains("QuizMaster"));
        assert!(screen.contains("Use Your PDF resource to test your knowledge"));
        assert!(screen.contains("Drop your PDF here"));
        assert!(screen.contains("biology.pdf"));
        assert!(screen.contains("Supported format: PDF only"));
    }

    #[test]
    fn test_selected_file_details() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.pick_highlighted_file();
        let screen = render(&app);
        assert!(screen.contains("Your Uploaded File"));
        assert!(screen.contains("File Name: biology.pdf"));
        assert!(screen.contains("File Size: 1.50 MB"));
        assert!(screen.contains("File Type: application/pdf"));
        assert!(screen.contains("Start Quiz"));
        assert!(screen.contains("New File"));
    }

    #[test]
    fn test_dragging_overlay() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.intake.drag_enter();
        assert!(render(&app).contains("Release to drop the file"));
    }

    #[test]
    fn test_uploading_shows_preparing_toast() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.pick_highlighted_file();
        app.start_quiz();
        let screen = render(&app);
        assert!(screen.contains("Preparing your quiz..."));
        assert!(screen.contains("Generating your quiz..."));
        assert!(!screen.contains("s Start Quiz"));
    }

    #[test]
    fn test_failed_upload_toast() {
        let (mut app, _dir, rx, tx) = new_app();
        app.pick_highlighted_file();
        app.start_quiz();
        let UploadRequest::Generate { request_id, .. } = rx.recv().unwrap();
        tx.send(UploadResponse::Error {
            request_id,
            error: "boom".to_string(),
        })
        .unwrap();
        app.poll_uploads();

        let screen = render(&app);
        assert!(screen.contains("Failed to start quiz. Please try again."));
        assert!(!screen.contains("Preparing your quiz..."));
        assert!(screen.contains("Your Uploaded File"));
    }

    #[test]
    fn test_question_view_and_hint() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.hand_off(questions());
        let screen = render(&app);
        assert!(screen.contains("Question 1 of 2"));
        assert!(screen.contains("What is 2+2?"));
        assert!(screen.contains("Show Hint"));
        assert!(!screen.contains("It is even"));

        app.quiz.as_mut().unwrap().toggle_hint();
        let screen = render(&app);
        assert!(screen.contains("It is even"));
        assert!(screen.contains("Hide Hint"));
    }

    #[test]
    fn test_reveal_shows_verdict_and_explanation() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.hand_off(questions());
        let quiz = app.quiz.as_mut().unwrap();
        quiz.toggle_hint();
        quiz.select("3");
        quiz.submit();

        let screen = render(&app);
        assert!(screen.contains("Incorrect."));
        assert!(screen.contains("Basic arithmetic"));
        assert!(screen.contains("Next Question"));
        assert!(!screen.contains("It is even"));
    }

    #[test]
    fn test_last_question_offers_finish() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.hand_off(questions());
        let quiz = app.quiz.as_mut().unwrap();
        quiz.select("4");
        quiz.submit();
        quiz.next();
        quiz.select("Paris");
        quiz.submit();

        let screen = render(&app);
        assert!(screen.contains("Correct!"));
        assert!(screen.contains("Finish Quiz"));
    }

    #[test]
    fn test_summary_and_detail_views() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.hand_off(questions());
        let quiz = app.quiz.as_mut().unwrap();
        for choice in ["3", "Paris"] {
            quiz.select(choice);
            quiz.submit();
            quiz.next();
        }
        assert_eq!(quiz.phase, Phase::Summary);

        let screen = render(&app);
        assert!(screen.contains("Quiz Summary"));
        assert!(screen.contains("You scored 1 out of 2"));
        assert!(screen.contains("Restart Quiz"));

        app.quiz.as_mut().unwrap().open_detail(0);
        let screen = render(&app);
        assert!(screen.contains("Question 1 Details"));
        assert!(screen.contains("3 (Your answer)"));
        assert!(screen.contains("4 (Correct)"));
        assert!(screen.contains("It is even"));
        assert!(screen.contains("Back to Summary"));
    }

    #[test]
    fn test_empty_question_set() {
        let (mut app, _dir, _rx, _tx) = new_app();
        app.hand_off(QuestionSet::new(vec![]));
        let screen = render(&app);
        assert!(screen.contains("No quiz questions available."));
        assert!(screen.contains("Please upload a valid PDF or try again."));
    }
}
