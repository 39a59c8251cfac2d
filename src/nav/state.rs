//! Navigation state store.
//!
//! Holds the static group tree and the two kinds of mutable, derived state:
//! the per-item `active` flag (follows the current route) and the per-group
//! open flag (follows user toggles). The tree itself is never restructured
//! after construction.

use super::defaults::default_groups;
use super::error::NavError;
use super::item::{NavGroup, NavItem};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Groups in insertion order; the name is the lookup key.
    groups: Vec<NavGroup>,
    /// One flag per group, `false` meaning collapsed out of view.
    expanded: HashMap<String, bool>,
}

impl Default for NavigationState {
    fn default() -> Self {
        // The built-in tree has unique, non-empty names.
        Self::from_parts(default_groups())
    }
}

impl NavigationState {
    /// Build a store from a group tree, with every group collapsed.
    ///
    /// Group names are map keys, so an empty or repeated name is rejected.
    /// Repeated item paths are accepted; see [`Self::set_active_route`].
    pub fn new(groups: Vec<NavGroup>) -> Result<Self, NavError> {
        let mut seen = HashSet::new();
        for group in &groups {
            if group.name.trim().is_empty() {
                return Err(NavError::EmptyGroupName);
            }
            if !seen.insert(group.name.as_str()) {
                return Err(NavError::DuplicateGroup(group.name.clone()));
            }
        }
        Ok(Self::from_parts(groups))
    }

    fn from_parts(mut groups: Vec<NavGroup>) -> Self {
        for item in groups.iter_mut().flat_map(|g| g.items.iter_mut()) {
            item.active = false;
        }
        let expanded = groups.iter().map(|g| (g.name.clone(), false)).collect();
        Self { groups, expanded }
    }

    pub fn groups(&self) -> &[NavGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&NavGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Iterate every item of every group in group-then-item order.
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Open flag of a group; unknown groups read as collapsed.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.get(name).copied().unwrap_or(false)
    }

    pub fn expanded(&self) -> &HashMap<String, bool> {
        &self.expanded
    }

    /// Mark exactly the items whose path equals `path` as active.
    ///
    /// Paths are expected to be unique. When two items share a path both
    /// become active.
    pub fn set_active_route(&mut self, path: &str) {
        for item in self.groups.iter_mut().flat_map(|g| g.items.iter_mut()) {
            item.active = item.path == path;
        }
    }

    pub fn active_items(&self) -> Vec<&NavItem> {
        self.items().filter(|item| item.active).collect()
    }

    /// Flip the open flag of a group. Unknown names are ignored.
    pub fn toggle_group(&mut self, name: &str) {
        if let Err(e) = self.try_toggle_group(name) {
            log::debug!("Ignoring group toggle: {}", e);
        }
    }

    /// Flip the open flag of a group and return its new value.
    pub fn try_toggle_group(&mut self, name: &str) -> Result<bool, NavError> {
        let flag = self
            .expanded
            .get_mut(name)
            .ok_or_else(|| NavError::UnknownGroup(name.to_string()))?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Label of the first item (in group-then-item order) bound to `path`.
    ///
    /// Every item is considered, including hidden and disabled ones.
    pub fn lookup_title(&self, path: &str) -> Option<&str> {
        self.items().find(|item| item.path == path).map(|item| item.label.as_str())
    }

    /// Human readable title for `path`, falling back to the raw path.
    pub fn resolve_title(&self, path: &str) -> String {
        self.lookup_title(path).unwrap_or(path).to_string()
    }
}

/// Items of a group that are drawn, in original order.
pub fn visible_items(group: &NavGroup) -> Vec<&NavItem> {
    group.items.iter().filter(|item| item.is_visible()).collect()
}

/// Items across all groups that get a route binding, in group-then-item order.
pub fn routable_items(state: &NavigationState) -> Vec<&NavItem> {
    state.items().filter(|item| item.is_routable()).collect()
}
