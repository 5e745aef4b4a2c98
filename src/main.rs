use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quizmaster::{
    handle_key, handle_mouse, handle_paste, logger, spawn_upload_worker, ui, App, Config,
    QuizApiClient,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    logger::init();
    let config = Config::from_env();
    logger::log(&format!("Starting with endpoint {}", config.endpoint));

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let client = Arc::new(QuizApiClient::new(config.endpoint.clone()));
    let _worker = spawn_upload_worker(client, response_tx, request_rx)?;

    let mut app = App::new(config.pdf_dir.clone(), request_tx, response_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    }
    result
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw(f, app))?;
            needs_redraw = false;
        }

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => handle_key(app, key),
                Event::Paste(text) => handle_paste(app, &text),
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(_, _) => {}
                _ => continue,
            }
            needs_redraw = true;
        }

        if app.should_quit {
            break;
        }

        needs_redraw |= app.poll_uploads();
        needs_redraw |= app.tick(Instant::now());
    }

    Ok(())
}
