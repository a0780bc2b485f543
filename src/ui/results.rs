use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::{format, Palette};
use crate::{
    app::App,
    guide::{QUICK_TIPS, RECOVERY_FOODS},
    persistence::StoreBackend,
};

pub fn render_results<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    let block = palette.block("Results");

    let Some(session) = &app.last_session else {
        let empty = Paragraph::new("Record a run on the Input tab to see its results.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let value_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let rows = [
        ("Time", session.time_of_day.clone()),
        ("Distance", format::km(session.distance_km)),
        ("Duration", format!("{} min", session.duration_min)),
        ("Pace", format::pace(session.pace_min_per_km)),
        ("Speed", format::speed(session.speed_km_per_h)),
        ("Calories burned", format::calories(session.calories_burned)),
        ("Distance today", format::km(session.cumulative_distance_at_entry_km)),
    ]
    .into_iter()
    .map(|(label, value)| {
        Row::new(vec![
            Cell::from(label),
            Cell::from(value).style(value_style),
        ])
        .height(2)
    });

    let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(10)])
        .block(block)
        .style(palette.base());
    f.render_widget(table, area);
}

pub fn render_progress<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    let block = palette.block("Progress & nutrition");

    // Always the stored day total, never the value still sitting in the form.
    let Some(progress) = app.today_progress() else {
        let hint = Paragraph::new(vec![
            Line::from("Enter a daily distance target on the Input tab."),
            Line::from(Span::styled(
                "The target is used to track today's progress.",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(hint, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4),  // Progress figures
                Constraint::Length(1),  // Gauge
                Constraint::Length(4),  // Status
                Constraint::Min(0),     // Nutrition
            ]
            .as_ref(),
        )
        .split(inner);

    let figures: Vec<Line> = format::progress_rows(&progress)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::raw(format!("{label:<16}: ")),
                Span::styled(
                    value,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(figures), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.card))
        .ratio((progress.percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", progress.percent));
    f.render_widget(gauge, chunks[1]);

    let (headline, details) = format::progress_status(&progress);
    let color = if progress.is_achieved() {
        palette.accent
    } else {
        palette.alert
    };
    let mut status_lines = vec![Line::from(Span::styled(
        headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    status_lines.extend(details.into_iter().map(|d| {
        Line::from(Span::styled(d, Style::default().fg(color)))
    }));
    f.render_widget(
        Paragraph::new(status_lines).alignment(Alignment::Center),
        chunks[2],
    );

    let mut nutrition = Vec::new();
    if let Some(session) = &app.last_session {
        nutrition.push(Line::from(vec![
            Span::raw("Calories burned (last run): "),
            Span::styled(
                format::calories(session.calories_burned),
                Style::default()
                    .fg(palette.alert)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        nutrition.push(Line::from(""));
    }
    nutrition.push(Line::from(Span::styled(
        "Recovery foods",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for food in RECOVERY_FOODS.iter() {
        nutrition.push(Line::from(vec![
            Span::raw(format!("  {:<24}", food.name)),
            Span::styled(format!("{:<14}", food.nutrient), Style::default().fg(palette.alert)),
            Span::styled(food.note, Style::default().fg(palette.muted)),
        ]));
    }
    nutrition.push(Line::from(""));
    nutrition.push(Line::from(Span::styled(
        "Quick tips",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for tip in QUICK_TIPS {
        nutrition.push(Line::from(Span::styled(
            format!("  ✓ {tip}"),
            Style::default().fg(palette.accent),
        )));
    }
    f.render_widget(
        Paragraph::new(nutrition).wrap(Wrap { trim: false }),
        chunks[3],
    );
}
