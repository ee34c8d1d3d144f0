use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::session::Session;
use crate::ui::theme;
use crate::ui::util::centered_rect;

pub(crate) const CREDIT: &str = "This app was developed by Nathaniel Nosa.";

pub(crate) fn render(f: &mut Frame, area: Rect, session: &Session) {
    let palette = theme::palette(session.dark_theme);

    let text = vec![
        Line::from(Span::styled(
            format!(" SalaryPlan {} ", env!("CARGO_PKG_VERSION")),
            palette.title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(CREDIT, palette.normal_style())),
        Line::from(Span::styled(
            "Percentages are fixed recommendations, not advice.",
            palette.dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Esc / Enter / x  Close ",
            Style::default().fg(palette.text_dim),
        )),
    ];

    let popup = centered_rect(area, 56, text.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let about = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" About ", palette.title_style()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.header_bg)),
    );
    f.render_widget(about, popup);
}
