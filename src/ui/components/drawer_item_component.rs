//! Rows of the navigation drawer.
//!
//! The drawer is a flat list of group sub-headers, each followed by the
//! visible items of that group while the group is open.

use crate::icons::IconService;
use crate::nav::{visible_items, NavItem, RenderModel};
use crate::ui::core::Action;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Types of rows that can appear in the drawer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerRow {
    /// Group sub-header; activating it opens or closes the group
    Header { name: String, expanded: bool },
    /// Navigation item belonging to `group`
    Item { group: String, item: NavItem },
}

/// Trait for drawer rows that can be rendered and activated
pub trait DrawerItem {
    fn render<'a>(&'a self, icons: &IconService) -> ListItem<'a>;

    /// Whether activating the row has any effect
    fn is_interactive(&self) -> bool;

    /// The action produced when the row is activated
    fn activate(&self) -> Action;
}

/// Flatten a render model into drawer rows
pub fn build_rows(model: &RenderModel) -> Vec<DrawerRow> {
    let mut rows = Vec::new();
    for group in &model.groups {
        let expanded = model.is_expanded(&group.name);
        rows.push(DrawerRow::Header {
            name: group.name.clone(),
            expanded,
        });
        if expanded {
            rows.extend(visible_items(group).into_iter().map(|item| DrawerRow::Item {
                group: group.name.clone(),
                item: item.clone(),
            }));
        }
    }
    rows
}

impl DrawerItem for DrawerRow {
    fn render<'a>(&'a self, icons: &IconService) -> ListItem<'a> {
        match self {
            DrawerRow::Header { name, expanded } => {
                let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", icons.group_arrow(*expanded)), style),
                    Span::styled(name.as_str(), style),
                ]))
            }
            DrawerRow::Item { item, .. } => {
                let style = if item.disabled {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                } else if item.active {
                    Style::default()
                        .fg(Color::Yellow)
                        .bg(Color::Rgb(150, 150, 150))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{} ", icons.nav_icon(item.icon)), style),
                    Span::styled(item.label.as_str(), style),
                ]))
            }
        }
    }

    fn is_interactive(&self) -> bool {
        match self {
            DrawerRow::Header { .. } => true,
            DrawerRow::Item { item, .. } => item.is_routable(),
        }
    }

    fn activate(&self) -> Action {
        match self {
            DrawerRow::Header { name, .. } => Action::ToggleGroup(name.clone()),
            DrawerRow::Item { item, .. } if item.is_routable() => Action::Navigate(item.path.clone()),
            DrawerRow::Item { .. } => Action::None,
        }
    }
}
