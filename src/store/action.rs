//! Discrete events accepted by the store.

use crate::settings::SettingField;
use crate::timer::TimerToken;
use crate::workspace::WorkspaceView;

/// User actions and timer firings, applied one at a time by [`super::Store::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Connect to all endpoints (confirmed connection dialog).
    Connect { aws_enabled: bool },
    Disconnect,
    /// Execute the pipeline. Rejected while disconnected.
    StartRun,
    PauseRun,
    /// Start or pause depending on the current state. Rejected while disconnected.
    ToggleRun,
    /// Flip the blue/green traffic route.
    SwitchTraffic,
    /// Expand or collapse an explorer folder.
    ToggleNode(String),
    /// Open the row feed tab of an explorer table or view.
    OpenNode(String),
    OpenView(WorkspaceView),
    CloseTab(String),
    ActivateTab(String),
    ClearLogs,
    EditSetting { field: SettingField, step: i32 },
    Tick(TimerToken),
}
