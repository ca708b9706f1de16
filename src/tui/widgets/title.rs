//! Title bar: application name, target database and wall clock.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::store::Store;
use crate::tui::style::Styles;

pub fn render_title(frame: &mut Frame, area: Rect, store: &Store) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(12)]).areas(area);

    let session = if store.session().connected {
        format!(" [{}]", store.settings().target_database)
    } else {
        String::new()
    };
    let title = Line::from(vec![
        Span::styled(" Grasya Migration Console", Styles::title_bar()),
        Span::styled(session, Styles::title_bar()),
    ]);
    frame.render_widget(Paragraph::new(title).style(Styles::title_bar()), left);

    let clock = Local::now().format("%H:%M:%S ").to_string();
    frame.render_widget(
        Paragraph::new(clock)
            .style(Styles::title_bar())
            .alignment(ratatui::layout::Alignment::Right),
        right,
    );
}
