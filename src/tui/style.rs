//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::model::LogKind;

/// Console color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const TITLE_BG: Color = Color::Black;
    pub const STATUS_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::Gray;

    pub const CPU_COLOR: Color = Color::Blue;
    pub const MEM_COLOR: Color = Color::Magenta;
    pub const THROUGHPUT_COLOR: Color = Color::Green;
    pub const CLOUD_COLOR: Color = Color::LightRed;

    pub const ROUTE_BLUE: Color = Color::LightBlue;
    pub const ROUTE_GREEN: Color = Color::LightGreen;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Window title bar.
    pub fn title_bar() -> Style {
        Style::default()
            .fg(Theme::FG)
            .bg(Theme::TITLE_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::STATUS_BG)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::FG)
            .bg(Theme::STATUS_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Border of the focused pane.
    pub fn focused_border() -> Style {
        Style::default().fg(Theme::TAB_ACTIVE)
    }

    pub fn border() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    pub fn cpu() -> Style {
        Style::default().fg(Theme::CPU_COLOR)
    }

    pub fn mem() -> Style {
        Style::default().fg(Theme::MEM_COLOR)
    }

    pub fn throughput() -> Style {
        Style::default().fg(Theme::THROUGHPUT_COLOR)
    }

    pub fn cloud() -> Style {
        Style::default().fg(Theme::CLOUD_COLOR)
    }

    /// Pulsing "Migrating..." marker.
    pub fn running() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .bg(Theme::STATUS_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn critical() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Highlighted key in hints.
    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Log line colour by severity.
    pub fn log(kind: LogKind) -> Style {
        match kind {
            LogKind::Info => Style::default().fg(Theme::FG),
            LogKind::Warning => Style::default().fg(Color::Yellow),
            LogKind::Error => Style::default().fg(Color::Red),
            LogKind::Success => Style::default().fg(Color::Green),
        }
    }

    /// Route badge colour (blue = source, green = target).
    pub fn route(target: bool) -> Style {
        let color = if target {
            Theme::ROUTE_GREEN
        } else {
            Theme::ROUTE_BLUE
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
