use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{
    config::Theme,
    day::{DayRecord, Session},
    entry::{EntryField, RunEntry},
    error::StorageError,
    journal::Journal,
    persistence::{LoadStatus, StoreBackend},
    progress::DailyProgress,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Tab {
    Input,
    Results,
    Progress,
    Schedule,
    History,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Input,
        Tab::Results,
        Tab::Progress,
        Tab::Schedule,
        Tab::History,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The four text fields of the entry form, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    values: [String; 4],
    focus: usize,
}

impl Form {
    pub const FIELDS: [EntryField; 4] = [
        EntryField::Distance,
        EntryField::Duration,
        EntryField::BodyWeight,
        EntryField::Target,
    ];

    pub fn label(field: EntryField) -> &'static str {
        match field {
            EntryField::Distance => "Distance (km)",
            EntryField::Duration => "Duration (minutes)",
            EntryField::BodyWeight => "Body weight (kg)",
            EntryField::Target => "Daily distance target (km, optional)",
        }
    }

    pub fn value(&self, field: EntryField) -> &str {
        &self.values[Self::slot(field)]
    }

    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        self.values[Self::slot(field)] = value.into();
    }

    pub fn focused(&self) -> EntryField {
        Self::FIELDS[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELDS.len() - 1) % Self::FIELDS.len();
    }

    pub fn push(&mut self, c: char) {
        self.values[self.focus].push(c);
    }

    pub fn backspace(&mut self) {
        self.values[self.focus].pop();
    }

    pub fn parse(&self) -> Result<RunEntry, crate::error::ValidationError> {
        RunEntry::parse(
            self.value(EntryField::Distance),
            self.value(EntryField::Duration),
            self.value(EntryField::BodyWeight),
            self.value(EntryField::Target),
        )
    }

    /// Clear the per-run fields; weight and target are usually the same next time.
    fn reset_run_fields(&mut self) {
        self.set(EntryField::Distance, "");
        self.set(EntryField::Duration, "");
        self.focus = 0;
    }

    fn slot(field: EntryField) -> usize {
        Self::FIELDS.iter().position(|f| *f == field).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    DayDetail(NaiveDate),
    ConfirmDelete(NaiveDate),
    ConfirmClear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Warning(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    ThemeChanged(Theme),
    Quit,
}

/// Presentation state over a [`Journal`].
#[derive(Debug)]
pub struct App<B: StoreBackend> {
    pub journal: Journal<B>,
    pub tab: Tab,
    pub form: Form,
    /// Session recorded most recently in this process, if any.
    pub last_session: Option<Session>,
    pub history_cursor: usize,
    pub overlay: Option<Overlay>,
    pub status: Option<Status>,
    pub theme: Theme,
    pub today: NaiveDate,
}

impl<B: StoreBackend> App<B> {
    pub fn new(journal: Journal<B>, load_status: &LoadStatus, theme: Theme, today: NaiveDate) -> Self {
        let status = match load_status {
            LoadStatus::Recovered(e) => Some(Status::Warning(format!(
                "could not load running log, starting empty ({e})"
            ))),
            LoadStatus::Restored | LoadStatus::Fresh => None,
        };
        Self {
            journal,
            tab: Tab::Input,
            form: Form::default(),
            last_session: None,
            history_cursor: 0,
            overlay: None,
            status,
            theme,
            today,
        }
    }

    pub fn today_record(&self) -> Option<&DayRecord> {
        self.journal.day(self.today)
    }

    pub fn today_progress(&self) -> Option<DailyProgress> {
        self.today_record().and_then(DailyProgress::for_day)
    }

    pub fn history_dates(&self) -> Vec<NaiveDate> {
        self.journal.store().dates_newest_first()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.history_dates().get(self.history_cursor).copied()
    }

    /// Keep `today` current across midnight.
    pub fn on_tick(&mut self, today: NaiveDate) {
        if today != self.today {
            debug!(from = %self.today, to = %today, "date changed");
            self.today = today;
        }
    }

    /// Save on the way out. Nothing may be lost even if no run was recorded.
    pub fn shutdown(&self) -> Result<(), StorageError> {
        self.journal.save()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: NaiveDateTime) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Action::Quit,
                KeyCode::Char('t') => {
                    self.theme = self.theme.toggled();
                    return Action::ThemeChanged(self.theme);
                }
                _ => return Action::Continue,
            }
        }

        if let Some(overlay) = self.overlay {
            self.on_overlay_key(overlay, key.code);
            return Action::Continue;
        }

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            _ => match self.tab {
                Tab::Input => self.on_input_key(key.code, now),
                Tab::History => self.on_history_key(key.code),
                Tab::Results | Tab::Progress | Tab::Schedule => {}
            },
        }
        Action::Continue
    }

    /// Validate the form and record it. On failure nothing changes but the status line.
    pub fn submit(&mut self, now: NaiveDateTime) {
        let entry = match self.form.parse() {
            Ok(entry) => entry,
            Err(e) => {
                self.status = Some(Status::Error(format!("invalid input: {e}")));
                return;
            }
        };

        let recorded = self.journal.record(&entry, now);
        self.status = Some(match recorded.save {
            Ok(()) => Status::Info(format!(
                "recorded {:.2} km, {:.1} km today",
                recorded.session.distance_km, recorded.session.cumulative_distance_at_entry_km
            )),
            Err(e) => Status::Warning(format!("recorded but not saved: {e}")),
        });
        self.today = now.date();
        self.last_session = Some(recorded.session);
        self.form.reset_run_fields();
        self.tab = Tab::Results;
    }

    fn on_input_key(&mut self, code: KeyCode, now: NaiveDateTime) {
        match code {
            KeyCode::Enter => self.submit(now),
            KeyCode::Up => self.form.focus_prev(),
            KeyCode::Down => self.form.focus_next(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.push(c),
            _ => {}
        }
    }

    fn on_history_key(&mut self, code: KeyCode) {
        let len = self.journal.store().len();
        match code {
            KeyCode::Up => self.history_cursor = self.history_cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.history_cursor + 1 < len {
                    self.history_cursor += 1;
                }
            }
            KeyCode::Home => self.history_cursor = 0,
            KeyCode::End => self.history_cursor = len.saturating_sub(1),
            KeyCode::Enter => {
                self.overlay = self.selected_date().map(Overlay::DayDetail);
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.overlay = self.selected_date().map(Overlay::ConfirmDelete);
            }
            KeyCode::Char('C') => {
                if len > 0 {
                    self.overlay = Some(Overlay::ConfirmClear);
                }
            }
            _ => {}
        }
    }

    fn on_overlay_key(&mut self, overlay: Overlay, code: KeyCode) {
        match (overlay, code) {
            (_, KeyCode::Esc) => self.overlay = None,
            (Overlay::DayDetail(date), KeyCode::Char('d') | KeyCode::Delete) => {
                self.overlay = Some(Overlay::ConfirmDelete(date));
            }
            (Overlay::DayDetail(_), KeyCode::Enter | KeyCode::Char('q')) => self.overlay = None,
            (Overlay::ConfirmDelete(date), KeyCode::Char('y' | 'Y')) => {
                self.status = Some(match self.journal.delete_day(date) {
                    Ok(true) => Status::Info(format!("deleted {date}")),
                    Ok(false) => Status::Info(format!("nothing recorded on {date}")),
                    Err(e) => Status::Warning(format!("deleted {date} but not saved: {e}")),
                });
                self.overlay = None;
                self.clamp_history_cursor();
            }
            (Overlay::ConfirmClear, KeyCode::Char('y' | 'Y')) => {
                self.status = Some(match self.journal.clear_all() {
                    Ok(()) => Status::Info("all history cleared".to_string()),
                    Err(e) => Status::Warning(format!("history cleared but not saved: {e}")),
                });
                self.overlay = None;
                self.clamp_history_cursor();
            }
            (Overlay::ConfirmDelete(_) | Overlay::ConfirmClear, KeyCode::Char('n' | 'N')) => {
                self.overlay = None;
            }
            _ => {}
        }
    }

    fn clamp_history_cursor(&mut self) {
        let len = self.journal.store().len();
        if self.history_cursor >= len {
            self.history_cursor = len.saturating_sub(1);
        }
    }
}
