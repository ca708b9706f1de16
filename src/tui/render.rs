//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::store::Store;
use crate::workspace::WorkspaceView;

use super::state::{Popup, UiState};
use super::widgets::{
    RIBBON_HEIGHT, render_alert, render_connect_dialog, render_dead_letters, render_explorer,
    render_feed, render_help, render_monitor, render_quit_confirm, render_ribbon,
    render_settings, render_start_page, render_status_bar, render_tab_strip, render_telemetry,
    render_title,
};

const EXPLORER_WIDTH: u16 = 30;
const TELEMETRY_WIDTH: u16 = 28;

/// Main render function.
pub fn render(frame: &mut Frame, store: &Store, ui: &mut UiState) {
    let area = frame.area();

    let [title, ribbon, main, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(RIBBON_HEIGHT),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(frame, title, store);
    render_ribbon(frame, ribbon, store, ui);
    render_main(frame, main, store, ui);
    render_status_bar(frame, status, store, ui);

    // Popups last, over everything
    match &mut ui.popup {
        Popup::None => {}
        Popup::Connect { aws_enabled } => render_connect_dialog(frame, area, store, *aws_enabled),
        Popup::QuitConfirm => render_quit_confirm(frame, area, store),
        Popup::Help { scroll } => render_help(frame, area, scroll),
        Popup::Alert(message) => render_alert(frame, area, message),
    }
}

/// Explorer | workspace | telemetry sidebar.
fn render_main(frame: &mut Frame, area: Rect, store: &Store, ui: &mut UiState) {
    let view = store.active_view();
    let sidebar = store.session().connected && *view != WorkspaceView::Start;

    let [explorer, center, telemetry] = Layout::horizontal([
        Constraint::Length(EXPLORER_WIDTH),
        Constraint::Min(30),
        Constraint::Length(if sidebar { TELEMETRY_WIDTH } else { 0 }),
    ])
    .areas(area);

    render_explorer(frame, explorer, store, ui);
    render_workspace(frame, center, store, ui);
    if sidebar {
        render_telemetry(frame, telemetry, store);
    }
}

fn render_workspace(frame: &mut Frame, area: Rect, store: &Store, ui: &mut UiState) {
    let [tabs, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);
    render_tab_strip(frame, tabs, store);

    match store.active_view() {
        WorkspaceView::Start => render_start_page(frame, content, store),
        WorkspaceView::Monitor => render_monitor(frame, content, store, ui),
        WorkspaceView::Object { .. } => {
            render_feed(frame, content, store, store.tabs().active(), ui)
        }
        WorkspaceView::DeadLetters => render_dead_letters(frame, content, ui),
        WorkspaceView::Settings => render_settings(frame, content, store, ui),
    }
}
