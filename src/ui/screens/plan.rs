use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::plan::{format_thousands, plan_total};
use crate::session::Session;
use crate::ui::theme::{self, Palette};
use crate::ui::util::truncate;
use crate::ui::icons;

pub(crate) const TITLE: &str = "Monthly Spending Salary Plan";

const PCT_WIDTH: u16 = 16;
const AMOUNT_WIDTH: u16 = 20;

pub(crate) fn render(f: &mut Frame, area: Rect, session: &Session) {
    let palette = theme::palette(session.dark_theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Salary field
            Constraint::Length(1), // Validation hint
            Constraint::Min(5),    // Table
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(TITLE, palette.title_style()))).centered();
    f.render_widget(title, chunks[0]);

    render_salary_field(f, chunks[1], session, palette);
    render_hint(f, chunks[2], session, palette);
    render_table(f, chunks[3], session, palette);
}

fn render_salary_field(f: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let border = if session.input_error.is_some() {
        palette.error_style()
    } else {
        Style::default().fg(palette.accent)
    };

    let field = Paragraph::new(Line::from(Span::styled(
        &session.salary_input,
        palette.normal_style(),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(
                " Enter Your Monthly Salary ",
                palette.dim_style().add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(field, area);

    if !session.about_visible {
        let offset = session.salary_input.chars().count() as u16;
        let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
        f.set_cursor_position((x, area.y + 1));
    }
}

fn render_hint(f: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let line = match &session.input_error {
        Some(err) => Line::from(Span::styled(
            format!(" {err} - amounts shown for 0.00"),
            palette.error_style(),
        )),
        None => Line::from(Span::styled(
            " Type an amount; digits, '.' and ',' are accepted",
            palette.dim_style(),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_table(f: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let rows = session.rows();

    // Borders (2), column gaps (2) and the glyph with its space (3).
    let label_width = area
        .width
        .saturating_sub(PCT_WIDTH + AMOUNT_WIDTH + 7) as usize;

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                palette.alt_row_style()
            } else {
                palette.normal_style()
            };
            Row::new(vec![
                Cell::from(format!(
                    "{} {}",
                    icons::glyph(row.category.id),
                    truncate(row.category.label, label_width)
                )),
                Cell::from(
                    Line::from(format!("{}%", row.category.percentage)).alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(Span::styled(row.formatted_amount(), palette.amount_style()))
                        .alignment(Alignment::Right),
                ),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Expense Category"),
        Cell::from(Line::from("Recommended (%)").alignment(Alignment::Right)),
        Cell::from(Line::from("Amount").alignment(Alignment::Right)),
    ])
    .style(palette.header_style());

    let footer = Row::new(vec![
        Cell::from("Total"),
        Cell::from(Line::from("100%").alignment(Alignment::Right)),
        Cell::from(Line::from(format_thousands(plan_total(session.salary))).alignment(Alignment::Right)),
    ])
    .style(palette.header_style());

    let table = Table::new(
        body,
        [
            Constraint::Min(10),
            Constraint::Length(PCT_WIDTH),
            Constraint::Length(AMOUNT_WIDTH),
        ],
    )
    .header(header)
    .footer(footer)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style()),
    );
    f.render_widget(table, area);
}
