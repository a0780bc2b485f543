use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, format, Palette};
use crate::{
    app::{App, Overlay},
    persistence::StoreBackend,
    store::format_date,
};

pub fn render<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    let store = app.journal.store();
    let title = format!("History ({})", format::history_header(&store.summary()));
    let block = palette.block(&title);

    if store.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("No running history yet"),
            Line::from(Span::styled(
                "Start by recording a run on the Input tab",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .history_dates()
        .into_iter()
        .filter_map(|date| store.day(date).map(|day| (date, day)))
        .map(|(date, day)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format_date(date),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {} runs  {}",
                    day.sessions().len(),
                    format::km(day.cumulative_distance_km())
                )),
                Span::styled(
                    format!("  target {}", format::target(day.target_km())),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(palette.card).fg(palette.accent))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.history_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_overlay<B: StoreBackend>(
    app: &App<B>,
    overlay: Overlay,
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
) {
    match overlay {
        Overlay::DayDetail(date) => {
            let popup = centered_rect(90, 24, area);
            let title = format!("Details for {}", format_date(date));
            let mut lines = Vec::new();
            match app.journal.day(date) {
                Some(day) => {
                    lines.push(Line::from(format!(
                        "Daily target: {}",
                        format::target(day.target_km())
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("Total distance: {:.2} km", day.cumulative_distance_km()),
                        Style::default().fg(palette.accent),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!(
                            "Runs: {}  Time: {} min  Calories: {}",
                            day.sessions().len(),
                            day.total_duration_min(),
                            format::calories(day.total_calories())
                        ),
                        Style::default().fg(palette.muted),
                    )));
                    lines.push(Line::from(""));
                    for (i, session) in day.sessions().iter().enumerate() {
                        lines.push(Line::from(format::session_line(i + 1, session)));
                    }
                }
                None => lines.push(Line::from("Nothing recorded on this date.")),
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "d delete this day  esc close",
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            )));

            f.render_widget(Clear, popup);
            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(palette.block(&title)),
                popup,
            );
        }
        Overlay::ConfirmDelete(date) => {
            confirm(
                f,
                area,
                palette,
                &format!("Delete all data for {}?", format_date(date)),
            );
        }
        Overlay::ConfirmClear => {
            confirm(f, area, palette, "Delete the entire running history?");
        }
    }
}

fn confirm(f: &mut Frame, area: Rect, palette: &Palette, question: &str) {
    let popup = centered_rect(50, 5, area);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            question.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "y confirm  n cancel",
            Style::default().fg(palette.muted),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(palette.block("Confirm").border_style(Style::default().fg(palette.alert)));
    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}
