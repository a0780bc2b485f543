// Library surface for the terminal binary and headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod day;
pub mod document;
pub mod entry;
pub mod error;
pub mod guide;
pub mod journal;
pub mod logging;
pub mod metrics;
pub mod persistence;
pub mod progress;
pub mod recorder;
pub mod runtime;
pub mod store;
pub mod ui;
