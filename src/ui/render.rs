use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::icons;
use super::screens;
use super::theme::{self, Palette};
use crate::session::Session;

/// Draw the whole screen from the current session state.
pub(crate) fn render(f: &mut Frame, session: &Session) {
    let palette = theme::palette(session.dark_theme);
    f.render_widget(Block::default().style(palette.base_style()), f.area());

    if session.is_loading() {
        screens::loading::render(f, f.area(), session);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Plan
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], session, palette);
    screens::plan::render(f, chunks[1], session);
    render_status_bar(f, chunks[2], session, palette);

    if session.about_visible {
        screens::about::render(f, f.area(), session);
    }
}

fn render_header(f: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let date = format!(" {} ", session.display_date);
    let right = format!(
        " t {}  ? about ",
        icons::theme_toggle(session.dark_theme)
    );

    let available = area.width as usize;
    let used = date.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(date, palette.header_style()),
        Span::styled(" ".repeat(pad), palette.header_style()),
        Span::styled(right, palette.header_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let (mode_label, mode_bg) = match session.input_error {
        Some(_) => (" INVALID ", palette.red),
        None => (" VALID ", palette.accent),
    };
    let mode_style = Style::default()
        .fg(palette.header_bg)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(" {} theme ", palette.name);
    let right = if session.about_visible {
        " Esc close "
    } else {
        " t theme | ? about | Ctrl-u clear | q quit "
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, palette.status_bar_style()),
        Span::styled(" ".repeat(pad), palette.status_bar_style()),
        Span::styled(right, palette.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}
