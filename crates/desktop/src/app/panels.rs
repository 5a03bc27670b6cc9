//! Panel rendering for the desktop window

mod dashboard;
mod settings;
mod top;
