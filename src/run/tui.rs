use std::io;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::session::{display_date, Session};

pub(crate) fn as_tui(config: &Config) -> Result<()> {
    let date = display_date(Local::now().date_naive());
    let mut session = Session::start(config, date, Instant::now());

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish(&mut session, result)
}

/// End the session, cancelling a pending timer even when the loop failed.
/// The error is handed back untouched for `main` to report.
pub(crate) fn finish(session: &mut Session, result: Result<()>) -> Result<()> {
    if session.running {
        session.quit();
    }
    result
}

/// Leave raw mode and the alternate screen before the panic is reported.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

pub(crate) fn run_app<B: Backend>(terminal: &mut Terminal<B>, session: &mut Session) -> Result<()> {
    while session.running {
        session.tick(Instant::now());
        terminal.draw(|f| crate::ui::render::render(f, session))?;

        // Wake no later than the loading deadline so Ready is shown on time.
        if event::poll(session.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, session);
                }
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

pub(crate) fn handle_key(key: KeyEvent, session: &mut Session) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        session.quit();
        return;
    }

    if session.is_loading() {
        return;
    }

    if session.about_visible {
        handle_about_input(key, session);
    } else {
        handle_plan_input(key, session);
    }
}

fn handle_about_input(key: KeyEvent, session: &mut Session) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('?') => {
            session.close_about();
        }
        _ => {}
    }
}

fn handle_plan_input(key: KeyEvent, session: &mut Session) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.clear_salary();
        }
        KeyCode::Char('q') | KeyCode::Esc => session.quit(),
        KeyCode::Char('t') => session.toggle_theme(),
        KeyCode::Char('?') => session.open_about(),
        KeyCode::Char(c) => {
            session.push_salary_char(c);
        }
        KeyCode::Backspace => session.pop_salary_char(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;
