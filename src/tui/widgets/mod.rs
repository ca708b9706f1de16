//! TUI widgets for the migration console.

mod alert;
mod connect_dialog;
mod dead_letters;
mod explorer;
mod feed;
mod help;
mod monitor;
mod quit_confirm;
mod ribbon;
mod settings;
mod start_page;
mod status_bar;
mod tab_strip;
mod telemetry;
mod title;

use ratatui::layout::{Constraint, Layout, Rect};

pub use alert::render_alert;
pub use connect_dialog::render_connect_dialog;
pub use dead_letters::render_dead_letters;
pub use explorer::render_explorer;
pub use feed::render_feed;
pub use help::render_help;
pub use monitor::render_monitor;
pub use quit_confirm::render_quit_confirm;
pub use ribbon::{RIBBON_HEIGHT, render_ribbon};
pub use settings::render_settings;
pub use start_page::render_start_page;
pub use status_bar::render_status_bar;
pub use tab_strip::render_tab_strip;
pub use telemetry::render_telemetry;
pub use title::render_title;

/// Returns a rect of fixed size centered within `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, rect, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);
    rect
}

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    /// Flattens a test buffer into one string per row.
    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    pub fn contains(buffer: &Buffer, needle: &str) -> bool {
        buffer_lines(buffer).iter().any(|l| l.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(40, 10, area);
        assert_eq!((r.x, r.y, r.width, r.height), (30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let r = centered_rect(40, 10, small);
        assert_eq!((r.width, r.height), (20, 5));
    }
}
