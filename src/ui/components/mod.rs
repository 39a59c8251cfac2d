//! Reusable UI components

pub mod scrollbar_helper;
pub mod status_bar;

// Component architecture
pub mod app_bar_component;
pub mod dialog_component;
pub mod drawer_component;
pub mod drawer_item_component;
pub mod page_component;

// Component exports
pub use app_bar_component::AppBarComponent;
pub use dialog_component::DialogComponent;
pub use drawer_component::DrawerComponent;
pub use page_component::PageComponent;
pub use status_bar::StatusBar;
