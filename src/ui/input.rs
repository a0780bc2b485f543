use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Palette;
use crate::{
    app::{App, Form},
    persistence::StoreBackend,
};

pub fn render<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    let block = palette.block("New run");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = Form::FIELDS.iter().map(|_| Constraint::Length(4)).collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (i, field) in Form::FIELDS.iter().enumerate() {
        let focused = app.form.focused() == *field;
        let border_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };

        let mut spans = vec![Span::raw(app.form.value(*field).to_string())];
        if focused {
            spans.push(Span::styled(
                "█",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let input = Paragraph::new(Line::from(spans))
            .style(Style::default().fg(palette.fg).bg(palette.card))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(Form::label(*field))
                    .style(palette.base()),
            );
        f.render_widget(input, rows[i]);
    }
}
