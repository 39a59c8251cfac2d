//! Scrollbar helper shared by the drawer, the page and the dialogs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Tracks scrollbar state and splits an area into content and scrollbar.
#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the scrollbar with the content length, position and viewport height.
    pub fn update_state(&mut self, total_lines: usize, position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_lines).position(position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    pub fn needs_scrollbar(total_lines: usize, available_height: usize) -> bool {
        total_lines > available_height
    }

    /// Split a bordered `rect` into content area and, if needed, a one-column
    /// scrollbar area inside the right border.
    pub fn calculate_areas(rect: Rect, total_lines: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;

        if !Self::needs_scrollbar(total_lines, available_height) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
