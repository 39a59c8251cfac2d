//! Layout management and calculations

use crate::config::DrawerVariant;
use crate::constants::{APP_BAR_HEIGHT, MAIN_AREA_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas of the shell for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// `None` while the app bar is hidden
    pub app_bar: Option<Rect>,
    /// `None` while the drawer is closed
    pub drawer: Option<Rect>,
    pub page: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into app bar, drawer, page and status line.
    ///
    /// A docked drawer takes columns away from the page; a temporary drawer
    /// floats over the left edge of the page instead.
    #[must_use]
    pub fn shell_layout(
        area: Rect,
        app_bar_visible: bool,
        drawer_open: bool,
        variant: DrawerVariant,
        drawer_width: u16,
    ) -> ShellLayout {
        let bar_height = if app_bar_visible {
            APP_BAR_HEIGHT.min(area.height.saturating_sub(1))
        } else {
            0
        };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(bar_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let app_bar = (bar_height > 0).then_some(vertical[0]);
        let body = vertical[1];
        let status = vertical[2];

        if !drawer_open {
            return ShellLayout {
                app_bar,
                drawer: None,
                page: body,
                status,
            };
        }

        let width = Self::drawer_width(body.width, drawer_width);
        if variant.is_docked() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(width), Constraint::Min(0)])
                .split(body);
            ShellLayout {
                app_bar,
                drawer: Some(horizontal[0]),
                page: horizontal[1],
                status,
            }
        } else {
            ShellLayout {
                app_bar,
                drawer: Some(Rect::new(body.x, body.y, width, body.height)),
                page: body,
                status,
            }
        }
    }

    /// Clamp the configured drawer width so the page keeps a usable width
    #[must_use]
    pub fn drawer_width(available: u16, configured: u16) -> u16 {
        let max = available.saturating_sub(MAIN_AREA_MIN_WIDTH).max(available / 2);
        configured.min(max)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate dialog dimensions based on screen size
    #[must_use]
    pub fn dialog_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 90 } else { 70 };
        let height = if screen_height < 40 { 80 } else { 70 };
        (width, height)
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
