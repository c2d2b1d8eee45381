//! slidekit TUI — a mouse-driven slider hosted in the terminal.
//!
//! Implements the slidekit-core collaborator traits on top of ratatui and
//! crossterm: the track is a terminal row, pointer capture is a flag that
//! routes drags from anywhere on screen, and events land in a log pane.

pub mod app;
pub mod host;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use host::TerminalHost;
pub use theme::Theme;
