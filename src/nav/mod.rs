//! Navigation state core.
//!
//! Everything the drawer shell draws is derived from the types in this module:
//! the static item tree, the per-group open flags, the active route and the
//! scroll direction. None of it depends on a terminal, so it can be driven and
//! inspected directly from tests.
//!
//! * [`item`] - navigation items, groups and icon handles
//! * [`state`] - the navigation store, title resolution and derived lists
//! * [`scroll`] - scroll direction detection
//! * [`router`] - route table construction and the current location
//! * [`controller`] - single owner of the state, fed by external events

pub mod controller;
pub mod defaults;
pub mod error;
pub mod item;
pub mod router;
pub mod scroll;
pub mod state;

pub use controller::{NavController, RenderModel};
pub use error::NavError;
pub use item::{NavGroup, NavIcon, NavItem};
pub use router::{route_table, Location, RouteBinding, RouteTable, ViewId};
pub use scroll::ScrollDirectionDetector;
pub use state::{routable_items, visible_items, NavigationState};
