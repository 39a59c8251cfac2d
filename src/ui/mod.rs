//! UI module for navdrawer
//!
//! This module handles the terminal shell: components, layout, event routing
//! and the render loop. Navigation state lives in [`crate::nav`]; the shell
//! only forwards events to it and draws its snapshots.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
