//! Navigation item and group models.

use serde::{Deserialize, Serialize};

/// Opaque icon handle attached to a navigation item.
///
/// The glyph actually drawn depends on the configured icon theme, see
/// [`crate::icons::IconService::nav_icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Home,
    #[default]
    Web,
    Add,
    Remove,
    ShowChart,
}

/// A labeled, addressable entry in the drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub path: String,
    pub label: String,
    #[serde(default)]
    pub icon: NavIcon,
    /// Hidden items are neither drawn nor routed.
    #[serde(default)]
    pub hidden: bool,
    /// Disabled items are drawn but not routed and not interactive.
    #[serde(default)]
    pub disabled: bool,
    /// Derived from the current route, never set by the user.
    #[serde(skip)]
    pub active: bool,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon,
            hidden: false,
            disabled: false,
            active: false,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Whether the item is drawn at all.
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// Whether the item gets a route binding and reacts to selection.
    pub fn is_routable(&self) -> bool {
        !self.hidden && !self.disabled
    }
}

/// A named cluster of navigation items shown under one sub-header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavGroup {
    pub fn new(name: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}
