//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::schema::NodeKind;
use crate::settings::SettingField;
use crate::store::{Action, Store};
use crate::workspace::WorkspaceView;

use super::state::{Focus, Popup, RibbonTab, UiState};

/// Lines moved by PageUp/PageDown.
const PAGE: usize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Forward to the store.
    Dispatch(Action),
}

/// Handles key input and updates UI state.
pub fn handle_key(ui: &mut UiState, store: &Store, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    ui.status_message = None;
    match ui.popup {
        Popup::None => handle_normal(ui, store, key),
        _ => handle_popup(ui, key),
    }
}

fn handle_popup(ui: &mut UiState, key: KeyEvent) -> KeyAction {
    match &mut ui.popup {
        Popup::Connect { aws_enabled } => match key.code {
            KeyCode::Enter => {
                let aws_enabled = *aws_enabled;
                ui.popup = Popup::None;
                KeyAction::Dispatch(Action::Connect { aws_enabled })
            }
            KeyCode::Char('a') | KeyCode::Char(' ') => {
                *aws_enabled = !*aws_enabled;
                KeyAction::None
            }
            KeyCode::Esc => {
                ui.popup = Popup::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        Popup::QuitConfirm => match key.code {
            KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
                ui.popup = Popup::None;
                KeyAction::Quit
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                ui.popup = Popup::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        Popup::Help { scroll } => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                ui.popup = Popup::None;
                KeyAction::None
            }
            KeyCode::Up => {
                *scroll = scroll.saturating_sub(1);
                KeyAction::None
            }
            KeyCode::Down => {
                *scroll = scroll.saturating_add(1);
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        Popup::Alert(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                ui.popup = Popup::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        Popup::None => KeyAction::None,
    }
}

fn handle_normal(ui: &mut UiState, store: &Store, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            ui.popup = Popup::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') => {
            ui.popup = Popup::Help { scroll: 0 };
            KeyAction::None
        }

        // Ribbon pages
        KeyCode::F(n @ 1..=4) => {
            ui.ribbon = RibbonTab::all()[(n - 1) as usize];
            KeyAction::None
        }

        // Session
        KeyCode::Char('c') => {
            if store.session().connected {
                KeyAction::Dispatch(Action::Disconnect)
            } else {
                ui.popup = Popup::Connect {
                    aws_enabled: store.aws_enabled(),
                };
                KeyAction::None
            }
        }
        KeyCode::Char('r') => KeyAction::Dispatch(Action::ToggleRun),
        KeyCode::Char(' ') if ui.focus == Focus::Workspace => {
            KeyAction::Dispatch(Action::ToggleRun)
        }
        KeyCode::Char('x') => KeyAction::Dispatch(Action::StartRun),
        KeyCode::Char('p') => KeyAction::Dispatch(Action::PauseRun),
        KeyCode::Char('t') => KeyAction::Dispatch(Action::SwitchTraffic),
        KeyCode::Char('L') => KeyAction::Dispatch(Action::ClearLogs),

        // Workspace tabs
        KeyCode::Tab => {
            ui.reset_scroll();
            KeyAction::Dispatch(Action::ActivateTab(store.tabs().next_name().to_string()))
        }
        KeyCode::BackTab => {
            ui.reset_scroll();
            KeyAction::Dispatch(Action::ActivateTab(store.tabs().prev_name().to_string()))
        }
        KeyCode::Char('w') => {
            let active = store.tabs().active();
            if store.tabs().is_closable(active) {
                ui.reset_scroll();
                KeyAction::Dispatch(Action::CloseTab(active.to_string()))
            } else {
                ui.status_message = Some(format!("'{}' cannot be closed", active));
                KeyAction::None
            }
        }
        KeyCode::Char('m') => open(ui, WorkspaceView::Monitor),
        KeyCode::Char('d') => open(ui, WorkspaceView::DeadLetters),
        KeyCode::Char('o') => open(ui, WorkspaceView::Settings),

        KeyCode::Char('e') => {
            ui.focus = match ui.focus {
                Focus::Workspace if store.session().connected => Focus::Explorer,
                Focus::Workspace => {
                    ui.status_message = Some("Object explorer is empty: not connected".to_string());
                    Focus::Workspace
                }
                Focus::Explorer => Focus::Workspace,
            };
            KeyAction::None
        }
        KeyCode::Esc if ui.focus == Focus::Explorer => {
            ui.focus = Focus::Workspace;
            KeyAction::None
        }

        _ => match ui.focus {
            Focus::Explorer => handle_explorer(ui, store, key),
            Focus::Workspace => handle_workspace(ui, store, key),
        },
    }
}

fn open(ui: &mut UiState, view: WorkspaceView) -> KeyAction {
    ui.reset_scroll();
    KeyAction::Dispatch(Action::OpenView(view))
}

fn handle_explorer(ui: &mut UiState, store: &Store, key: KeyEvent) -> KeyAction {
    let visible = store.schema().visible();
    if visible.is_empty() {
        return KeyAction::None;
    }
    ui.explorer_cursor = ui.explorer_cursor.min(visible.len() - 1);
    let node = visible[ui.explorer_cursor];

    match key.code {
        KeyCode::Up => {
            ui.explorer_cursor = ui.explorer_cursor.saturating_sub(1);
            KeyAction::None
        }
        KeyCode::Down => {
            ui.explorer_cursor = (ui.explorer_cursor + 1).min(visible.len() - 1);
            KeyAction::None
        }
        KeyCode::Home => {
            ui.explorer_cursor = 0;
            KeyAction::None
        }
        KeyCode::End => {
            ui.explorer_cursor = visible.len() - 1;
            KeyAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => match node.kind {
            NodeKind::Folder { .. } => KeyAction::Dispatch(Action::ToggleNode(node.id.to_string())),
            NodeKind::Table | NodeKind::View => {
                ui.reset_scroll();
                KeyAction::Dispatch(Action::OpenNode(node.id.to_string()))
            }
            NodeKind::Procedure => {
                ui.status_message = Some(format!("{}: routine preview not available", node.name));
                KeyAction::None
            }
        },
        KeyCode::Right => match node.kind {
            NodeKind::Folder { open: false } => {
                KeyAction::Dispatch(Action::ToggleNode(node.id.to_string()))
            }
            _ => KeyAction::None,
        },
        KeyCode::Left => match node.kind {
            NodeKind::Folder { open: true } => {
                KeyAction::Dispatch(Action::ToggleNode(node.id.to_string()))
            }
            _ => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

fn handle_workspace(ui: &mut UiState, store: &Store, key: KeyEvent) -> KeyAction {
    match store.active_view() {
        WorkspaceView::Monitor => {
            scroll_back(&mut ui.log_scroll, key);
            KeyAction::None
        }
        WorkspaceView::Object { .. } => {
            scroll_back(&mut ui.feed_scroll, key);
            KeyAction::None
        }
        WorkspaceView::DeadLetters => {
            select(&mut ui.dead_letter_selected, key);
            KeyAction::None
        }
        WorkspaceView::Settings => {
            let len = SettingField::ALL.len();
            match key.code {
                KeyCode::Left | KeyCode::Char('-') => {
                    let field = SettingField::ALL[ui.settings_cursor.min(len - 1)];
                    KeyAction::Dispatch(Action::EditSetting { field, step: -1 })
                }
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Enter => {
                    let field = SettingField::ALL[ui.settings_cursor.min(len - 1)];
                    KeyAction::Dispatch(Action::EditSetting { field, step: 1 })
                }
                _ => {
                    select(&mut ui.settings_cursor, key);
                    ui.settings_cursor = ui.settings_cursor.min(len - 1);
                    KeyAction::None
                }
            }
        }
        WorkspaceView::Start => match key.code {
            KeyCode::Enter if !store.session().connected => {
                ui.popup = Popup::Connect {
                    aws_enabled: store.aws_enabled(),
                };
                KeyAction::None
            }
            _ => KeyAction::None,
        },
    }
}

/// Scrolls a tail-anchored list: Up moves back in time, End returns to the tail.
fn scroll_back(offset: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Up => *offset = offset.saturating_add(1),
        KeyCode::Down => *offset = offset.saturating_sub(1),
        KeyCode::PageUp => *offset = offset.saturating_add(PAGE),
        KeyCode::PageDown => *offset = offset.saturating_sub(PAGE),
        KeyCode::End => *offset = 0,
        KeyCode::Home => *offset = usize::MAX,
        _ => {}
    }
}

/// Moves a head-anchored selection; clamped by the renderer.
fn select(selected: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Up => *selected = selected.saturating_sub(1),
        KeyCode::Down => *selected = selected.saturating_add(1),
        KeyCode::PageUp => *selected = selected.saturating_sub(PAGE),
        KeyCode::PageDown => *selected = selected.saturating_add(PAGE),
        KeyCode::Home => *selected = 0,
        KeyCode::End => *selected = usize::MAX,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use crate::config::ConsoleConfig;
    use crate::settings::Settings;
    use crate::workspace::{MONITOR_TAB, START_PAGE};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn store() -> Store {
        let config = ConsoleConfig {
            seed: Some(5),
            ..ConsoleConfig::default()
        };
        Store::new(config, Settings::default()).unwrap()
    }

    fn connected() -> Store {
        let mut s = store();
        s.dispatch(Action::Connect { aws_enabled: true }, Instant::now())
            .unwrap();
        s
    }

    #[test]
    fn test_connect_opens_dialog_when_disconnected() {
        let s = store();
        let mut ui = UiState::new();
        assert_eq!(handle_key(&mut ui, &s, key(KeyCode::Char('c'))), KeyAction::None);
        assert_eq!(ui.popup, Popup::Connect { aws_enabled: true });

        handle_key(&mut ui, &s, key(KeyCode::Char('a')));
        assert_eq!(ui.popup, Popup::Connect { aws_enabled: false });

        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Enter)),
            KeyAction::Dispatch(Action::Connect { aws_enabled: false })
        );
        assert_eq!(ui.popup, Popup::None);
    }

    #[test]
    fn test_connect_key_disconnects_when_connected() {
        let s = connected();
        let mut ui = UiState::new();
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Char('c'))),
            KeyAction::Dispatch(Action::Disconnect)
        );
    }

    #[test]
    fn test_dialog_escape_cancels() {
        let s = store();
        let mut ui = UiState::new();
        handle_key(&mut ui, &s, key(KeyCode::Char('c')));
        assert_eq!(handle_key(&mut ui, &s, key(KeyCode::Esc)), KeyAction::None);
        assert!(!ui.popup.is_open());
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let s = store();
        let mut ui = UiState::new();
        assert_eq!(handle_key(&mut ui, &s, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(ui.popup, Popup::QuitConfirm);
        assert_eq!(handle_key(&mut ui, &s, key(KeyCode::Enter)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut UiState::new(), &s, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_run_keys() {
        let s = connected();
        let mut ui = UiState::new();
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Char('r'))),
            KeyAction::Dispatch(Action::ToggleRun)
        );
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Char('x'))),
            KeyAction::Dispatch(Action::StartRun)
        );
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Char('p'))),
            KeyAction::Dispatch(Action::PauseRun)
        );
    }

    #[test]
    fn test_alert_blocks_until_dismissed() {
        let s = store();
        let mut ui = UiState::new();
        ui.popup = Popup::Alert("Please connect first!".to_string());
        assert_eq!(handle_key(&mut ui, &s, key(KeyCode::Char('r'))), KeyAction::None);
        assert!(ui.popup.is_open());
        handle_key(&mut ui, &s, key(KeyCode::Enter));
        assert!(!ui.popup.is_open());
    }

    #[test]
    fn test_tab_cycles_workspace() {
        let s = connected();
        let mut ui = UiState::new();
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Tab)),
            KeyAction::Dispatch(Action::ActivateTab(START_PAGE.to_string()))
        );
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Char('w'))),
            KeyAction::Dispatch(Action::CloseTab(MONITOR_TAB.to_string()))
        );
    }

    #[test]
    fn test_start_page_not_closable() {
        let s = store();
        let mut ui = UiState::new();
        assert_eq!(handle_key(&mut ui, &s, key(KeyCode::Char('w'))), KeyAction::None);
        assert!(ui.status_message.is_some());
    }

    #[test]
    fn test_explorer_navigation() {
        let s = connected();
        let mut ui = UiState::new();
        handle_key(&mut ui, &s, key(KeyCode::Char('e')));
        assert_eq!(ui.focus, Focus::Explorer);

        // cursor on the first root folder
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Enter)),
            KeyAction::Dispatch(Action::ToggleNode("src".to_string()))
        );

        // src, s1, t1 -> open the users table
        handle_key(&mut ui, &s, key(KeyCode::Down));
        handle_key(&mut ui, &s, key(KeyCode::Down));
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Enter)),
            KeyAction::Dispatch(Action::OpenNode("t1".to_string()))
        );

        handle_key(&mut ui, &s, key(KeyCode::Esc));
        assert_eq!(ui.focus, Focus::Workspace);
    }

    #[test]
    fn test_explorer_focus_needs_connection() {
        let s = store();
        let mut ui = UiState::new();
        handle_key(&mut ui, &s, key(KeyCode::Char('e')));
        assert_eq!(ui.focus, Focus::Workspace);
    }

    #[test]
    fn test_settings_editing() {
        let mut s = store();
        s.dispatch(Action::OpenView(WorkspaceView::Settings), Instant::now())
            .unwrap();
        let mut ui = UiState::new();
        handle_key(&mut ui, &s, key(KeyCode::Down));
        assert_eq!(ui.settings_cursor, 1);
        assert_eq!(
            handle_key(&mut ui, &s, key(KeyCode::Char('+'))),
            KeyAction::Dispatch(Action::EditSetting {
                field: SettingField::RetryCount,
                step: 1
            })
        );
        handle_key(&mut ui, &s, key(KeyCode::End));
        assert_eq!(ui.settings_cursor, SettingField::ALL.len() - 1);
    }

    #[test]
    fn test_ribbon_function_keys() {
        let s = store();
        let mut ui = UiState::new();
        handle_key(&mut ui, &s, key(KeyCode::F(2)));
        assert_eq!(ui.ribbon, RibbonTab::Migration);
        handle_key(&mut ui, &s, key(KeyCode::F(4)));
        assert_eq!(ui.ribbon, RibbonTab::View);
    }

    #[test]
    fn test_monitor_log_scroll() {
        let s = connected();
        let mut ui = UiState::new();
        handle_key(&mut ui, &s, key(KeyCode::Up));
        handle_key(&mut ui, &s, key(KeyCode::Up));
        assert_eq!(ui.log_scroll, 2);
        handle_key(&mut ui, &s, key(KeyCode::End));
        assert_eq!(ui.log_scroll, 0);
    }
}
