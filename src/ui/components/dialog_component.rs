//! Modal dialog component for the help and logs overlays.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
NAVDRAWER - Drawer Navigation Demo
==================================

DRAWER
------
m           Open / close the drawer
Tab         Switch focus between drawer and page
j/k, ↑/↓    Move the drawer cursor
Enter/Space Open a group or go to a page
Esc         Close a temporary drawer

PAGE
----
j/k, ↑/↓    Scroll one line
PgUp/PgDn   Scroll one screen
Home/End    Jump to top / bottom
Mouse wheel Scroll the page

The app bar hides while the page scrolls down.

GENERAL
-------
Backspace   Go back to the previous page
i           Cycle icon theme
G           Show logs
?           Toggle this help
q, Ctrl+C   Quit
";

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    logger: Logger,
    scrollbar_helper: ScrollbarHelper,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            logger,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_offset = 0;
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
    }

    fn content(&self) -> (String, Vec<Line<'static>>) {
        match self.dialog_type {
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                let lines = if logs.is_empty() {
                    vec![Line::styled("No log entries yet", Style::default().fg(Color::DarkGray))]
                } else {
                    logs.into_iter().map(Line::from).collect()
                };
                (DIALOG_TITLE_LOGS.to_string(), lines)
            }
            Some(DialogType::Help) | None => (
                "Help - Press 'Esc' or '?' to close".to_string(),
                HELP_TEXT.lines().map(|l| Line::from(l.to_string())).collect(),
            ),
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if dialog_type == DialogType::Help => Action::HideDialog,
            KeyCode::Char('G') if dialog_type == DialogType::Logs => Action::HideDialog,
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.hide();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let (width, height) = LayoutManager::dialog_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let (title, lines) = self.content();
        let total_lines = lines.len();
        let viewport = area.height.saturating_sub(2) as usize;
        self.scroll_offset = self.scroll_offset.min(total_lines.saturating_sub(viewport));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .title_style(Style::default().add_modifier(Modifier::BOLD))
                    .borders(Borders::ALL)
                    .style(Style::default().bg(Color::Black))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset.min(u16::MAX as usize) as u16, 0));
        f.render_widget(paragraph, area);

        let scrollbar_area = ScrollbarHelper::needs_scrollbar(total_lines, viewport).then(|| {
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            })
        });
        self.scrollbar_helper
            .update_state(total_lines, self.scroll_offset, Some(viewport));
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
