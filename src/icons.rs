//! Icon service for managing different icon themes
//!
//! Navigation items only carry an opaque [`NavIcon`] handle. This module maps
//! those handles, and the few glyphs the shell chrome needs, to concrete
//! strings for emoji, Unicode and ASCII terminals.

use crate::nav::NavIcon;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Glyphs for navigation item icons
#[derive(Debug, Clone)]
pub struct NavIcons {
    pub home: &'static str,
    pub web: &'static str,
    pub add: &'static str,
    pub remove: &'static str,
    pub show_chart: &'static str,
}

/// Shell chrome glyphs
#[derive(Debug, Clone)]
pub struct ChromeIcons {
    pub menu: &'static str,
    pub group_expanded: &'static str,
    pub group_collapsed: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub nav: NavIcons,
    pub chrome: ChromeIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                home: "🏠",
                web: "🌐",
                add: "➕",
                remove: "➖",
                show_chart: "📈",
            },
            chrome: ChromeIcons {
                menu: "🍔",
                group_expanded: "🔽",
                group_collapsed: "▶️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                home: "⌂",
                web: "◎",
                add: "+",
                remove: "−",
                show_chart: "↗",
            },
            chrome: ChromeIcons {
                menu: "☰",
                group_expanded: "▼",
                group_collapsed: "▶",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            nav: NavIcons {
                home: "H",
                web: "W",
                add: "+",
                remove: "-",
                show_chart: "~",
            },
            chrome: ChromeIcons {
                menu: "=",
                group_expanded: "v",
                group_collapsed: ">",
            },
        }
    }

    /// Glyph for a navigation item icon handle
    #[must_use]
    pub fn nav_icon(&self, icon: NavIcon) -> &'static str {
        let nav = self.icons().nav;
        match icon {
            NavIcon::Home => nav.home,
            NavIcon::Web => nav.web,
            NavIcon::Add => nav.add,
            NavIcon::Remove => nav.remove,
            NavIcon::ShowChart => nav.show_chart,
        }
    }

    #[must_use]
    pub fn menu(&self) -> &'static str {
        self.icons().chrome.menu
    }

    #[must_use]
    pub fn group_arrow(&self, expanded: bool) -> &'static str {
        let chrome = self.icons().chrome;
        if expanded {
            chrome.group_expanded
        } else {
            chrome.group_collapsed
        }
    }
}
