//! Status bar component

use crate::constants::STATUS_HINT;
use crate::ui::core::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the current path, focused pane and key hints
    pub fn render(f: &mut Frame, area: Rect, path: &str, focus: Focus) {
        let focus_label = match focus {
            Focus::Drawer => "drawer",
            Focus::Page => "page",
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", path), Style::default().fg(Color::Black).bg(Color::Gray)),
            Span::styled(format!(" [{}] ", focus_label), Style::default().fg(Color::Cyan)),
            Span::styled(STATUS_HINT, Style::default().fg(Color::Gray)),
        ]);

        f.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
    }
}
