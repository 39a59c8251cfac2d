//! navdrawer - side-navigation drawer patterns in the terminal
//!
//! This library holds a small navigation-state core and a ratatui shell built
//! on top of it. The core tracks which drawer item matches the current route,
//! which groups are open, what title the current route has and whether the
//! page is scrolling down; the shell draws an app bar, a drawer and a page
//! from that state.
//!
//! # Modules
//!
//! * [`nav`] - Navigation state, title resolution, scroll detection, routing
//! * [`config`] - Application configuration management
//! * [`cli`] - Command line arguments
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - Logging setup

/// Command line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Navigation state core, independent of any terminal
pub mod nav;

/// Terminal user interface components and rendering
pub mod ui;

pub use nav::{NavController, NavGroup, NavIcon, NavItem, NavigationState, RenderModel};
