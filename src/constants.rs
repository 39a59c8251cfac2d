//! Constants used throughout the application
//!
//! This module centralizes UI text, layout bounds and other constant values.

// Application identity
pub const APP_NAME: &str = "navdrawer";
pub const CONFIG_FILE_NAME: &str = "navdrawer.toml";
pub const LOG_FILE_NAME: &str = "navdrawer.log";

// App bar
pub const APP_BAR_RIGHT_ACTION: &str = " LOGIN ";
/// Height of the app bar including its bottom border
pub const APP_BAR_HEIGHT: u16 = 3;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DRAWER_TITLE: &str = "Navigation";
pub const NO_ROUTE_MESSAGE: &str = "No page is mounted at this path";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const STATUS_HINT: &str = "m: drawer • Tab: focus • Enter: open • Backspace: back • ?: help • q: quit";

// UI Layout Constants
/// Minimum drawer width in columns
pub const DRAWER_MIN_WIDTH: u16 = 15;
/// Maximum drawer width in columns
pub const DRAWER_MAX_WIDTH: u16 = 50;
/// Default drawer width in columns
pub const DRAWER_DEFAULT_WIDTH: u16 = 30;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;

// Page content
/// Default number of times a page repeats its label
pub const PAGE_DEFAULT_REPEAT: usize = 100;
pub const PAGE_MAX_REPEAT: usize = 10_000;
/// Lines moved by PageUp / PageDown
pub const PAGE_SCROLL_STEP: usize = 10;
