//! Route table construction and current-location tracking.
//!
//! Route registration proper belongs to the shell; this module only produces
//! the `(path, view)` bindings and remembers where the user is.

use super::state::{routable_items, NavigationState};

/// Identifies the view bound to a route. Views here just display a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewId(pub String);

impl ViewId {
    pub fn label(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pub path: String,
    pub view: ViewId,
}

/// One binding per routable item, in group-then-item order.
pub fn route_table(state: &NavigationState) -> Vec<RouteBinding> {
    routable_items(state)
        .into_iter()
        .map(|item| RouteBinding {
            path: item.path.clone(),
            view: ViewId(item.label.clone()),
        })
        .collect()
}

/// Lookup structure over the bindings produced by [`route_table`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

impl RouteTable {
    pub fn new(bindings: Vec<RouteBinding>) -> Self {
        Self { bindings }
    }

    pub fn from_state(state: &NavigationState) -> Self {
        Self::new(route_table(state))
    }

    /// First binding for `path`, or `None` when nothing is mounted there.
    pub fn resolve(&self, path: &str) -> Option<&RouteBinding> {
        self.bindings.iter().find(|binding| binding.path == path)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The current path plus the paths visited before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    current: String,
    history: Vec<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Move to `path`. Returns `false` when already there.
    pub fn navigate(&mut self, path: &str) -> bool {
        if self.current == path {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.history.push(previous);
        true
    }

    /// Return to the previous path, if any.
    pub fn back(&mut self) -> Option<&str> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
