use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::session::Session;
use crate::ui::theme;
use crate::ui::util::centered_rect;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const ART: [&str; 5] = [
    " ┌──────────────┐ ",
    " │  ▄▄  ▄▄  ▄▄  │ ",
    " │  ██  ██  ██  │ ",
    " │  ██  ██  ██  │ ",
    " └──────────────┘ ",
];

pub(crate) const CAPTION: &str = "Loading your salary plan...";

pub(crate) fn render(f: &mut Frame, area: Rect, session: &Session) {
    let palette = theme::palette(session.dark_theme);
    let spinner = SPINNER[session.spinner_frame % SPINNER.len()];

    let mut lines: Vec<Line> = ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, palette.title_style())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{spinner} "), palette.title_style()),
        Span::styled(CAPTION, palette.normal_style()),
    ]));

    let popup = centered_rect(area, 40, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let body = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .style(palette.base_style()),
    );
    f.render_widget(body, popup);
}
