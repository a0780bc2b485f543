use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{format, Palette};
use crate::{app::App, guide::WEEKLY_SCHEDULE, persistence::StoreBackend};

pub fn render<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    let today = app.today.weekday();

    let rows: Vec<Row> = WEEKLY_SCHEDULE
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let marker = match i % 3 {
                0 => palette.alert,
                1 => palette.accent,
                _ => palette.highlight,
            };
            let row = Row::new(vec![
                Cell::from(w.day.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(w.name).style(
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(format::workout_line(w)),
                Cell::from("●").style(Style::default().fg(marker)),
            ]);
            if w.day == today {
                row.style(Style::default().bg(palette.card))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(2),
        ],
    )
    .block(palette.block("Training schedule"))
    .style(palette.base());

    f.render_widget(table, area);
}
