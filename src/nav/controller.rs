//! Navigation controller.
//!
//! The single owner of the navigation state. The shell forwards exactly three
//! kinds of events here (route change, group toggle, scroll sample) and reads
//! back a [`RenderModel`] snapshot to draw from.

use super::error::NavError;
use super::item::NavGroup;
use super::scroll::ScrollDirectionDetector;
use super::state::NavigationState;
use std::collections::HashMap;

/// Read-only snapshot of everything the shell needs to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub groups: Vec<NavGroup>,
    pub expanded: HashMap<String, bool>,
    pub active_title: String,
    pub downscrolling: bool,
}

impl RenderModel {
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.get(name).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavController {
    state: NavigationState,
    detector: ScrollDirectionDetector,
    active_title: String,
    scroll_attached: bool,
}

impl NavController {
    pub fn new(state: NavigationState) -> Self {
        Self {
            state,
            detector: ScrollDirectionDetector::new(),
            active_title: String::new(),
            scroll_attached: false,
        }
    }

    pub fn from_groups(groups: Vec<NavGroup>) -> Result<Self, NavError> {
        Ok(Self::new(NavigationState::new(groups)?))
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_title(&self) -> &str {
        &self.active_title
    }

    pub fn is_downscrolling(&self) -> bool {
        self.detector.is_downscrolling()
    }

    /// Route change: refresh active flags and the title.
    pub fn on_route_change(&mut self, path: &str) {
        self.state.set_active_route(path);
        self.active_title = self.state.resolve_title(path);
        log::debug!("Route changed to '{}' (title '{}')", path, self.active_title);
    }

    /// User toggled a group sub-header.
    pub fn on_group_toggle(&mut self, name: &str) {
        self.state.toggle_group(name);
    }

    /// Scroll sample from the page. Ignored while no listener is attached.
    pub fn on_scroll(&mut self, offset: usize) -> bool {
        if !self.scroll_attached {
            log::trace!("Dropping scroll sample {} with no listener attached", offset);
            return self.detector.is_downscrolling();
        }
        self.detector.sample(offset)
    }

    /// Start accepting scroll samples. Attaching twice has no effect.
    pub fn attach_scroll_listener(&mut self) {
        if !self.scroll_attached {
            self.detector.reset();
            self.scroll_attached = true;
            log::debug!("Scroll listener attached");
        }
    }

    pub fn detach_scroll_listener(&mut self) {
        if self.scroll_attached {
            self.scroll_attached = false;
            log::debug!("Scroll listener detached");
        }
    }

    pub fn is_scroll_attached(&self) -> bool {
        self.scroll_attached
    }

    pub fn snapshot(&self) -> RenderModel {
        RenderModel {
            groups: self.state.groups().to_vec(),
            expanded: self.state.expanded().clone(),
            active_title: self.active_title.clone(),
            downscrolling: self.detector.is_downscrolling(),
        }
    }
}
