//! Page view component.
//!
//! Renders the view bound to the current route. Views only display their
//! label, repeated enough times that the page scrolls; every change of the
//! scroll offset is reported as [`Action::PageScrolled`].

use crate::constants::{NO_ROUTE_MESSAGE, PAGE_SCROLL_STEP};
use crate::nav::RouteBinding;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct PageComponent {
    /// Label of the mounted view, `None` when no route matched
    label: Option<String>,
    path: String,
    repeat: usize,
    offset: usize,
    focused: bool,
    viewport_height: usize,
    clamped_offset: Option<usize>,
    scrollbar_helper: ScrollbarHelper,
    last_area: Option<Rect>,
}

impl PageComponent {
    pub fn new(repeat: usize) -> Self {
        Self {
            label: None,
            path: String::new(),
            repeat,
            offset: 0,
            focused: false,
            viewport_height: 0,
            clamped_offset: None,
            scrollbar_helper: ScrollbarHelper::new(),
            last_area: None,
        }
    }

    /// Mount the view for `path` and return to the top of the page
    pub fn mount(&mut self, path: &str, binding: Option<&RouteBinding>) {
        self.path = path.to_string();
        self.label = binding.map(|b| b.view.label().to_string());
        self.offset = 0;
        self.clamped_offset = None;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line_count(&self) -> usize {
        if self.label.is_some() {
            self.repeat
        } else {
            1
        }
    }

    fn max_offset(&self) -> usize {
        // Before the first render the viewport is unknown; allow the full range
        self.line_count().saturating_sub(self.viewport_height.max(1))
    }

    /// Scroll to `offset` (clamped). Emits an action only when it moved.
    pub fn scroll_to(&mut self, offset: usize) -> Action {
        let clamped = offset.min(self.max_offset());
        if clamped == self.offset {
            return Action::None;
        }
        self.offset = clamped;
        Action::PageScrolled(clamped)
    }

    pub fn scroll_by(&mut self, delta: isize) -> Action {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.scroll_to(target)
    }

    /// Resize the viewport. A taller viewport can pull the offset back, which
    /// is reported like any other scroll.
    pub fn set_viewport_height(&mut self, height: usize) -> Action {
        self.viewport_height = height;
        self.scroll_to(self.offset)
    }

    /// Offset the last render clamped to, if it moved the page
    pub fn take_clamped_offset(&mut self) -> Option<usize> {
        self.clamped_offset.take()
    }

    fn lines(&self) -> Vec<Line<'_>> {
        match &self.label {
            Some(label) => (0..self.repeat).map(|_| Line::from(label.as_str())).collect(),
            None => vec![Line::styled(
                format!("{}: {}", NO_ROUTE_MESSAGE, self.path),
                Style::default().fg(Color::DarkGray),
            )],
        }
    }
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let page = PAGE_SCROLL_STEP as isize;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(usize::MAX),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let inside = self
            .last_area
            .is_some_and(|area| LayoutManager::contains(area, mouse.column, mouse.row));
        if !inside {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = Some(rect);
        if let Action::PageScrolled(offset) = self.set_viewport_height(rect.height.saturating_sub(2) as usize) {
            self.clamped_offset = Some(offset);
        }

        let total_lines = self.line_count();
        let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_lines);

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.path.as_str())
                    .border_style(Style::default().fg(border_color)),
            )
            .alignment(Alignment::Left)
            .scroll((self.offset.min(u16::MAX as usize) as u16, 0));

        f.render_widget(paragraph, content_area);

        self.scrollbar_helper
            .update_state(total_lines, self.offset, Some(self.viewport_height));
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
