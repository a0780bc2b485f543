use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

use crate::{
    app::{Action, App},
    persistence::StoreBackend,
};

/// Raw input as read from the terminal, before it is given a time.
#[derive(Clone, Debug)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize,
}

/// What the app reacts to. Every key press and tick carries the wall-clock
/// time it was observed at, so a run is recorded on the date it was entered.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Key { key: KeyEvent, at: NaiveDateTime },
    Resize,
    Tick(NaiveDateTime),
}

pub trait EventSource: Send + 'static {
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError>;
}

/// Reads crossterm events on a background thread.
pub struct CrosstermEventSource {
    rx: Receiver<TermEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                // Windows reports releases too; only presses drive the form.
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(TermEvent::Key(key))
                }
                Ok(CtEvent::Resize(_, _)) => tx.send(TermEvent::Resize),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Scripted events for headless runs.
pub struct TestEventSource {
    rx: Receiver<TermEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TermEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    at: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            at: Arc::new(Mutex::new(at)),
        }
    }

    pub fn set(&self, at: NaiveDateTime) {
        *self.at.lock().unwrap_or_else(|e| e.into_inner()) = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.at.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Turns terminal input into timestamped [`AppEvent`]s, emitting a tick
/// whenever nothing arrives within `tick_rate`.
pub struct Runner<E: EventSource, C: Clock> {
    event_source: E,
    clock: C,
    tick_rate: Duration,
}

impl<E: EventSource, C: Clock> Runner<E, C> {
    pub fn new(event_source: E, clock: C, tick_rate: Duration) -> Self {
        Self {
            event_source,
            clock,
            tick_rate,
        }
    }

    pub fn step(&self) -> AppEvent {
        match self.event_source.recv_timeout(self.tick_rate) {
            Ok(TermEvent::Key(key)) => AppEvent::Key {
                key,
                at: self.clock.now(),
            },
            Ok(TermEvent::Resize) => AppEvent::Resize,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                AppEvent::Tick(self.clock.now())
            }
        }
    }
}

/// Apply one event to the app. Ticks keep the app's notion of today current.
pub fn dispatch<B: StoreBackend>(app: &mut App<B>, event: AppEvent) -> Action {
    match event {
        AppEvent::Key { key, at } => app.handle_key(key, at),
        AppEvent::Tick(now) => {
            app.on_tick(now.date());
            Action::Continue
        }
        AppEvent::Resize => Action::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Theme, journal::Journal, persistence::MemoryStore, store::parse_date};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn at(date: &str, h: u32, m: u32) -> NaiveDateTime {
        parse_date(date).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn runner(clock: ManualClock) -> (mpsc::Sender<TermEvent>, Runner<TestEventSource, ManualClock>) {
        let (tx, rx) = mpsc::channel();
        let runner = Runner::new(TestEventSource::new(rx), clock, Duration::from_millis(1));
        (tx, runner)
    }

    #[test]
    fn timeout_yields_tick_at_clock_time() {
        let clock = ManualClock::new(at("2024-01-01", 23, 59));
        let (_tx, runner) = runner(clock);
        assert_eq!(runner.step(), AppEvent::Tick(at("2024-01-01", 23, 59)));
    }

    #[test]
    fn keys_are_stamped_when_received() {
        let clock = ManualClock::new(at("2024-01-01", 6, 0));
        let (tx, runner) = runner(clock.clone());
        let key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        tx.send(TermEvent::Key(key)).unwrap();
        clock.set(at("2024-01-01", 6, 30));

        assert_eq!(
            runner.step(),
            AppEvent::Key {
                key,
                at: at("2024-01-01", 6, 30)
            }
        );
    }

    #[test]
    fn resize_passes_through() {
        let (tx, runner) = runner(ManualClock::new(at("2024-01-01", 6, 0)));
        tx.send(TermEvent::Resize).unwrap();
        assert_eq!(runner.step(), AppEvent::Resize);
    }

    #[test]
    fn dispatched_tick_rolls_app_over_midnight() {
        let (journal, status) = Journal::open(MemoryStore::new());
        let mut app = App::new(journal, &status, Theme::Dark, parse_date("2024-01-01").unwrap());
        let clock = ManualClock::new(at("2024-01-02", 0, 1));
        let (_tx, runner) = runner(clock);

        let event = runner.step();
        assert_eq!(dispatch(&mut app, event), Action::Continue);
        assert_eq!(app.today, parse_date("2024-01-02").unwrap());
    }
}
