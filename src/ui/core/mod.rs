//! Core UI functionality for the navdrawer shell.
//!
//! This module contains the building blocks every shell component relies on:
//! the action vocabulary, the component trait and terminal event polling.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//!
//! # Architecture
//!
//! 1. **Events** are read by the [`EventHandler`] and routed to components
//! 2. **Components** turn events into [`Action`]s and draw themselves
//! 3. **Actions** flow back up to the app component, which forwards the
//!    navigation ones to the navigation controller

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
