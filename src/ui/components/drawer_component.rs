//! Navigation drawer component.
//!
//! Shows one sub-header per navigation group and, below each open group, its
//! visible items. The drawer never mutates navigation state itself: toggling a
//! header or picking an item produces an [`Action`] that the app component
//! forwards to the navigation controller, after which the drawer is handed a
//! fresh [`RenderModel`].

use crate::config::DrawerVariant;
use crate::constants::DRAWER_TITLE;
use crate::icons::IconService;
use crate::nav::RenderModel;
use crate::ui::components::drawer_item_component::{build_rows, DrawerItem, DrawerRow};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct DrawerComponent {
    variant: DrawerVariant,
    open: bool,
    focused: bool,
    rows: Vec<DrawerRow>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    icons: IconService,
    /// Area used by the last render, for mouse hit testing
    last_area: Option<Rect>,
}

impl DrawerComponent {
    pub fn new(variant: DrawerVariant, icons: IconService) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            variant,
            open: variant == DrawerVariant::Permanent,
            focused: false,
            rows: Vec::new(),
            list_state,
            scrollbar_helper: ScrollbarHelper::new(),
            icons,
            last_area: None,
        }
    }

    /// Rebuild rows from a fresh navigation snapshot
    pub fn update_model(&mut self, model: &RenderModel) {
        self.rows = build_rows(model);
        let cursor = self.cursor().min(self.rows.len().saturating_sub(1));
        self.list_state.select(Some(cursor));
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn variant(&self) -> DrawerVariant {
        self.variant
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the drawer unless it is permanent
    pub fn close(&mut self) {
        if self.variant.can_close() {
            self.open = false;
            self.last_area = None;
        }
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn rows(&self) -> &[DrawerRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// Move the cursor by `delta` rows, wrapping around at both ends
    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let next = (self.cursor() as isize + delta).rem_euclid(len);
        self.list_state.select(Some(next as usize));
    }

    pub fn select_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.list_state.select(Some(index));
        }
    }

    /// Activate the row under the cursor
    pub fn activate_cursor(&self) -> Action {
        self.rows.get(self.cursor()).map(|row| row.activate()).unwrap_or(Action::None)
    }

    /// Whether a terminal cell lies on the drawer as last drawn
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.last_area
            .is_some_and(|area| LayoutManager::contains(area, column, row))
    }

    /// Row index under a terminal cell, if any
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_area?;
        if !LayoutManager::contains(area, column, row) || row <= area.y || row >= area.y + area.height - 1 {
            return None;
        }
        let index = self.list_state.offset() + (row - area.y - 1) as usize;
        (index < self.rows.len()).then_some(index)
    }
}

impl Component for DrawerComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::Home => {
                self.select_row(0);
                Action::None
            }
            KeyCode::End => {
                self.select_row(self.rows.len().saturating_sub(1));
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor(),
            KeyCode::Esc if self.variant.closes_on_select() => Action::CloseDrawer,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some(area) = self.last_area else {
            return Action::None;
        };
        if !LayoutManager::contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.row_at(mouse.column, mouse.row) {
                Some(index) => {
                    self.select_row(index);
                    self.activate_cursor()
                }
                None => Action::None,
            },
            MouseEventKind::ScrollUp => {
                self.move_cursor(-1);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.move_cursor(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.open {
            self.last_area = None;
            return;
        }
        self.last_area = Some(rect);

        if !self.variant.is_docked() {
            f.render_widget(Clear, rect);
        }

        let items: Vec<ListItem> = self.rows.iter().map(|row| row.render(&self.icons)).collect();
        let total_rows = items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_rows);

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(DRAWER_TITLE)
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(border_color)),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(highlight);

        f.render_stateful_widget(list, list_area, &mut self.list_state);

        let available_height = rect.height.saturating_sub(2) as usize;
        self.scrollbar_helper
            .update_state(total_rows, self.cursor(), Some(available_height));
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
