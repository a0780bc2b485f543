pub mod format;
pub mod history;
pub mod input;
pub mod results;
pub mod schedule;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::{
    app::{App, Status, Tab},
    config::Theme,
    persistence::StoreBackend,
};

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub panel: Color,
    pub card: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub alert: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let (bg, panel, card, fg) = match theme {
            Theme::Dark => (
                Color::Rgb(30, 30, 46),
                Color::Rgb(45, 48, 71),
                Color::Rgb(61, 64, 91),
                Color::White,
            ),
            Theme::Light => (
                Color::Rgb(244, 244, 244),
                Color::Rgb(255, 255, 255),
                Color::Rgb(230, 230, 230),
                Color::Black,
            ),
        };
        Self {
            bg,
            panel,
            card,
            fg,
            muted: Color::Rgb(136, 136, 136),
            accent: Color::Rgb(78, 205, 196),
            alert: Color::Rgb(255, 107, 107),
            highlight: Color::Rgb(255, 209, 102),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel)
    }

    pub fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                title,
                Style::default()
                    .fg(self.highlight)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(self.base())
    }
}

pub fn draw<B: StoreBackend>(app: &App<B>, f: &mut Frame) {
    let palette = Palette::for_theme(app.theme);
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1), // Title
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Status
                Constraint::Length(1), // Key help
            ]
            .as_ref(),
        )
        .split(area);

    let title = Paragraph::new(Span::styled(
        "RUN LOG",
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .style(Style::default().bg(palette.bg));
    f.render_widget(title, chunks[0]);

    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.to_string())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).style(palette.base()))
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[1]);

    render_body(app, f, chunks[2], &palette);
    render_status(app, f, chunks[3], &palette);
    render_help(app, f, chunks[4], &palette);

    if let Some(overlay) = app.overlay {
        history::render_overlay(app, overlay, f, area, &palette);
    }
}

fn render_body<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    match app.tab {
        Tab::Input => input::render(app, f, area, palette),
        Tab::Results => results::render_results(app, f, area, palette),
        Tab::Progress => results::render_progress(app, f, area, palette),
        Tab::Schedule => schedule::render(app, f, area, palette),
        Tab::History => history::render(app, f, area, palette),
    }
}

fn render_status<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    let Some(status) = &app.status else {
        return;
    };
    let (text, color) = match status {
        Status::Info(msg) => (msg.as_str(), palette.accent),
        Status::Warning(msg) => (msg.as_str(), palette.highlight),
        Status::Error(msg) => (msg.as_str(), palette.alert),
    };
    let line = Paragraph::new(Span::styled(text, Style::default().fg(color)))
        .style(Style::default().bg(palette.bg));
    f.render_widget(line, area);
}

fn render_help<B: StoreBackend>(app: &App<B>, f: &mut Frame, area: Rect, palette: &Palette) {
    let keys = match app.tab {
        Tab::Input => "↑/↓ field  enter record  tab next tab  ctrl+t theme  esc quit",
        Tab::History => {
            "↑/↓ select  enter details  d delete day  C clear all  tab next tab  esc quit"
        }
        Tab::Results | Tab::Progress | Tab::Schedule => "tab next tab  ctrl+t theme  esc quit",
    };
    let help = Paragraph::new(Span::styled(
        keys,
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .style(Style::default().bg(palette.bg));
    f.render_widget(help, area);
}

/// A rectangle of the given size centred in `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{journal::Journal, persistence::MemoryStore, store::parse_date};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app_with_run() -> App<MemoryStore> {
        let (journal, status) = Journal::open(MemoryStore::new());
        let now = parse_date("2024-01-01")
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let mut app = App::new(journal, &status, Theme::Dark, now.date());
        app.form.set(crate::entry::EntryField::Distance, "5");
        app.form.set(crate::entry::EntryField::Duration, "30");
        app.form.set(crate::entry::EntryField::BodyWeight, "70");
        app.form.set(crate::entry::EntryField::Target, "10");
        app.submit(now);
        app
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn results_tab_shows_metrics() {
        let app = app_with_run();
        let screen = render_to_string(&app);
        assert!(screen.contains("6.00 min/km"));
        assert!(screen.contains("10.0 km/h"));
    }

    #[test]
    fn every_tab_renders() {
        let mut app = app_with_run();
        for tab in Tab::ALL {
            app.tab = tab;
            let screen = render_to_string(&app);
            assert!(screen.contains("RUN LOG"));
        }
        app.tab = Tab::Progress;
        assert!(render_to_string(&app).contains("50.0%"));
        app.tab = Tab::History;
        assert!(render_to_string(&app).contains("2024-01-01"));
    }
}
