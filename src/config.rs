//! Configuration management for navdrawer
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DRAWER_DEFAULT_WIDTH, DRAWER_MAX_WIDTH, DRAWER_MIN_WIDTH,
    PAGE_DEFAULT_REPEAT, PAGE_MAX_REPEAT,
};
use crate::icons::IconTheme;
use crate::nav::{defaults::default_groups, NavGroup, NavigationState};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub navigation: NavigationConfig,
}

/// How the drawer sits relative to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerVariant {
    /// Overlays the page and closes after a selection
    Temporary,
    /// Docked beside the page, opened and closed by the menu trigger
    #[default]
    Persistent,
    /// Always docked
    Permanent,
}

impl DrawerVariant {
    /// Whether picking an item closes the drawer
    pub fn closes_on_select(self) -> bool {
        matches!(self, DrawerVariant::Temporary)
    }

    /// Whether the drawer takes layout space instead of floating over the page
    pub fn is_docked(self) -> bool {
        !matches!(self, DrawerVariant::Temporary)
    }

    /// Whether the menu trigger can close the drawer
    pub fn can_close(self) -> bool {
        !matches!(self, DrawerVariant::Permanent)
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Options: "temporary", "persistent", "permanent"
    pub drawer_variant: DrawerVariant,
    /// Drawer width in columns
    pub drawer_width: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Route shown on startup
    pub initial_route: String,
    /// Options: "emoji", "unicode", "ascii"
    pub icon_theme: IconTheme,
    /// How many lines of content each page shows
    pub page_repeat: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the local data directory
    pub enabled: bool,
    /// Options: "error", "warn", "info", "debug", "trace"
    pub level: String,
}

/// Navigation tree configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NavigationConfig {
    /// Custom drawer groups; empty means the built-in tree
    pub groups: Vec<NavGroup>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            drawer_variant: DrawerVariant::default(),
            drawer_width: DRAWER_DEFAULT_WIDTH,
            mouse_enabled: true,
            initial_route: "/".to_string(),
            icon_theme: IconTheme::default(),
            page_repeat: PAGE_DEFAULT_REPEAT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl NavigationConfig {
    /// Configured groups, or the built-in tree when none are configured
    pub fn groups(&self) -> Vec<NavGroup> {
        if self.groups.is_empty() {
            default_groups()
        } else {
            self.groups.clone()
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.drawer_width < DRAWER_MIN_WIDTH || self.ui.drawer_width > DRAWER_MAX_WIDTH {
            anyhow::bail!(
                "drawer_width must be between {} and {} columns, got {}",
                DRAWER_MIN_WIDTH,
                DRAWER_MAX_WIDTH,
                self.ui.drawer_width
            );
        }

        if self.ui.page_repeat == 0 || self.ui.page_repeat > PAGE_MAX_REPEAT {
            anyhow::bail!(
                "page_repeat must be between 1 and {}, got {}",
                PAGE_MAX_REPEAT,
                self.ui.page_repeat
            );
        }

        if !self.ui.initial_route.starts_with('/') {
            anyhow::bail!("initial_route must start with '/', got '{}'", self.ui.initial_route);
        }

        self.logging.level_filter()?;
        self.validate_navigation()?;

        Ok(())
    }

    /// Validate the configured navigation tree
    fn validate_navigation(&self) -> Result<()> {
        for group in &self.navigation.groups {
            for item in &group.items {
                if item.label.is_empty() {
                    anyhow::bail!("Group '{}': item label cannot be empty", group.name);
                }
                if !item.path.starts_with('/') {
                    anyhow::bail!(
                        "Group '{}': item '{}' path must start with '/', got '{}'",
                        group.name,
                        item.label,
                        item.path
                    );
                }
            }
        }

        self.navigation_state()?;
        Ok(())
    }

    /// Build the navigation store seeded from this configuration
    pub fn navigation_state(&self) -> Result<NavigationState> {
        NavigationState::new(self.navigation.groups()).context("Invalid navigation tree")
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# navdrawer Configuration File\n# Generated on {}\n#\n# Add [[navigation.groups]] tables to replace the built-in drawer tree.\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
