use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use navdrawer::config::DrawerVariant;
use navdrawer::icons::IconService;
use navdrawer::logger::Logger;
use navdrawer::nav::{NavController, RouteTable};
use navdrawer::ui::components::drawer_item_component::{build_rows, DrawerItem, DrawerRow};
use navdrawer::ui::components::{DialogComponent, DrawerComponent, PageComponent};
use navdrawer::ui::core::{Action, Component, DialogType};

fn press(component: &mut impl Component, code: KeyCode) -> Action {
    component.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_rows_show_headers_for_collapsed_groups() {
    let controller = NavController::default();
    let rows = build_rows(&controller.snapshot());

    assert_eq!(rows.len(), 5);
    assert!(rows
        .iter()
        .all(|row| matches!(row, DrawerRow::Header { expanded: false, .. })));
}

#[test]
fn test_rows_list_visible_items_of_open_groups() {
    let mut controller = NavController::default();
    controller.on_group_toggle("EXAMPLE");
    let rows = build_rows(&controller.snapshot());

    let labels: Vec<&str> = rows
        .iter()
        .filter_map(|row| match row {
            DrawerRow::Item { item, .. } => Some(item.label.as_str()),
            DrawerRow::Header { .. } => None,
        })
        .collect();
    assert_eq!(labels, vec!["Home", "Page2", "Page3", "Page5"]);
    assert_eq!(rows.len(), 5 + 4);
}

#[test]
fn test_row_activation() {
    let mut controller = NavController::default();
    controller.on_group_toggle("EXAMPLE");
    let rows = build_rows(&controller.snapshot());

    assert_eq!(rows[0].activate(), Action::ToggleGroup("EXAMPLE".to_string()));
    assert_eq!(rows[1].activate(), Action::Navigate("/".to_string()));
    // Page3 is disabled
    assert!(!rows[3].is_interactive());
    assert_eq!(rows[3].activate(), Action::None);
}

#[test]
fn test_drawer_cursor_wraps() {
    let mut drawer = DrawerComponent::new(DrawerVariant::Persistent, IconService::default());
    drawer.update_model(&NavController::default().snapshot());

    assert_eq!(drawer.cursor(), 0);
    press(&mut drawer, KeyCode::Up);
    assert_eq!(drawer.cursor(), 4);
    press(&mut drawer, KeyCode::Char('j'));
    assert_eq!(drawer.cursor(), 0);
    press(&mut drawer, KeyCode::End);
    assert_eq!(drawer.cursor(), 4);

    let action = press(&mut drawer, KeyCode::Enter);
    assert_eq!(action, Action::ToggleGroup("NETWORK".to_string()));
}

#[test]
fn test_drawer_open_close_per_variant() {
    let mut persistent = DrawerComponent::new(DrawerVariant::Persistent, IconService::default());
    assert!(!persistent.is_open());
    persistent.toggle();
    assert!(persistent.is_open());
    persistent.close();
    assert!(!persistent.is_open());

    let mut permanent = DrawerComponent::new(DrawerVariant::Permanent, IconService::default());
    assert!(permanent.is_open());
    permanent.close();
    assert!(permanent.is_open());

    let mut temporary = DrawerComponent::new(DrawerVariant::Temporary, IconService::default());
    assert_eq!(press(&mut temporary, KeyCode::Esc), Action::CloseDrawer);
    assert_eq!(press(&mut persistent, KeyCode::Esc), Action::None);
}

#[test]
fn test_page_mount_and_scroll() {
    let controller = NavController::default();
    let routes = RouteTable::from_state(controller.state());
    let mut page = PageComponent::new(100);

    page.mount("/page2", routes.resolve("/page2"));
    assert_eq!(page.label(), Some("Page2"));
    assert_eq!(page.line_count(), 100);

    assert_eq!(press(&mut page, KeyCode::Char('j')), Action::PageScrolled(1));
    assert_eq!(press(&mut page, KeyCode::PageDown), Action::PageScrolled(11));
    assert_eq!(press(&mut page, KeyCode::Home), Action::PageScrolled(0));
    // Already at the top
    assert_eq!(press(&mut page, KeyCode::Up), Action::None);

    page.set_viewport_height(20);
    assert_eq!(press(&mut page, KeyCode::End), Action::PageScrolled(80));

    // A taller viewport pulls the offset back and reports it
    assert_eq!(page.set_viewport_height(30), Action::PageScrolled(70));
    assert_eq!(page.offset(), 70);
    assert_eq!(page.set_viewport_height(20), Action::None);

    page.mount("/page5", routes.resolve("/page5"));
    assert_eq!(page.offset(), 0);
}

#[test]
fn test_page_without_route() {
    let mut page = PageComponent::new(100);
    page.mount("/nowhere", None);
    assert_eq!(page.label(), None);
    assert_eq!(page.line_count(), 1);
    assert_eq!(press(&mut page, KeyCode::Char('j')), Action::None);
}

#[test]
fn test_dialog_show_and_hide() {
    let mut dialog = DialogComponent::new(Logger::new());
    assert!(!dialog.is_visible());
    assert_eq!(press(&mut dialog, KeyCode::Esc), Action::None);

    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(dialog.is_visible());
    assert_eq!(press(&mut dialog, KeyCode::Char('G')), Action::None);
    assert_eq!(press(&mut dialog, KeyCode::Char('?')), Action::HideDialog);

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}
