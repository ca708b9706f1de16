//! Terminal user interface for the migration console.
//!
//! Ribbon toolbar, object explorer, workspace tabs, telemetry sidebar and
//! status bar, drawn with ratatui over crossterm. All state changes go
//! through the [`crate::store::Store`]; this module only keeps view-local
//! state such as focus, cursors and popups.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{Focus, Popup, RibbonTab, UiState};
