//! Top app bar: menu trigger, page title and a right-hand action badge.
//!
//! The app shell hides the bar entirely while the page is scrolling down.

use crate::constants::APP_BAR_RIGHT_ACTION;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns reserved for the menu trigger
const MENU_WIDTH: u16 = 4;

pub struct AppBarComponent {
    title: String,
    icons: IconService,
    menu_area: Option<Rect>,
}

impl AppBarComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            title: String::new(),
            icons,
            menu_area: None,
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Forget the last drawn area, used when the bar is hidden
    pub fn hide(&mut self) {
        self.menu_area = None;
    }
}

impl Component for AppBarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match (mouse.kind, self.menu_area) {
            (MouseEventKind::Down(MouseButton::Left), Some(area))
                if LayoutManager::contains(area, mouse.column, mouse.row) =>
            {
                Action::ToggleDrawer
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let bar_style = Style::default().fg(Color::White).bg(Color::Blue);
        let block = Block::default().borders(Borders::BOTTOM).style(bar_style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let right_width = APP_BAR_RIGHT_ACTION.chars().count() as u16 + 1;
        let chunks = Layout::horizontal([
            Constraint::Length(MENU_WIDTH),
            Constraint::Min(0),
            Constraint::Length(right_width),
        ])
        .split(inner);

        self.menu_area = Some(chunks[0]);

        f.render_widget(
            Paragraph::new(format!(" {}", self.icons.menu())).style(bar_style.add_modifier(Modifier::BOLD)),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(self.title.as_str()).style(bar_style.add_modifier(Modifier::BOLD)),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                APP_BAR_RIGHT_ACTION,
                Style::default().fg(Color::White).bg(Color::Magenta),
            ))),
            chunks[2],
        );
    }
}
