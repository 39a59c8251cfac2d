use crate::{click, draw, key, mounted_app, mouse, press};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use navdrawer::config::DrawerVariant;
use navdrawer::ui::core::{Component, EventType, Focus};

#[test]
fn test_init_mounts_initial_route() {
    let app = mounted_app(DrawerVariant::Persistent);

    assert_eq!(app.location().current(), "/");
    assert_eq!(app.title(), "Home");
    assert_eq!(app.page().label(), Some("Home"));
    assert!(app.controller().is_scroll_attached());
    assert!(!app.drawer().is_open());
    assert_eq!(app.focus(), Focus::Page);

    let model = app.snapshot();
    let active: Vec<&str> = model
        .groups
        .iter()
        .flat_map(|g| g.items.iter())
        .filter(|item| item.active)
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(active, vec!["Home"]);
}

#[test]
fn test_navigate_from_drawer() {
    let mut app = mounted_app(DrawerVariant::Persistent);

    press(&mut app, &[KeyCode::Char('m')]);
    assert!(app.drawer().is_open());
    assert_eq!(app.focus(), Focus::Drawer);

    // Open EXAMPLE, then pick Page2
    press(&mut app, &[KeyCode::Enter]);
    assert!(app.snapshot().is_expanded("EXAMPLE"));
    press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);

    assert_eq!(app.location().current(), "/page2");
    assert_eq!(app.title(), "Page2");
    // Persistent drawer stays open
    assert!(app.drawer().is_open());

    // Page3 is disabled and ignored
    press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.location().current(), "/page2");

    press(&mut app, &[KeyCode::Backspace]);
    assert_eq!(app.location().current(), "/");
    assert_eq!(app.title(), "Home");
}

#[test]
fn test_temporary_drawer_closes_after_selection() {
    let mut app = mounted_app(DrawerVariant::Temporary);

    press(&mut app, &[KeyCode::Char('m'), KeyCode::Enter, KeyCode::Down, KeyCode::Down]);
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(app.title(), "Page2");
    assert!(!app.drawer().is_open());
    assert_eq!(app.focus(), Focus::Page);
}

#[test]
fn test_permanent_drawer_ignores_menu_toggle() {
    let mut app = mounted_app(DrawerVariant::Permanent);
    assert!(app.drawer().is_open());
    assert_eq!(app.focus(), Focus::Drawer);

    press(&mut app, &[KeyCode::Char('m')]);
    assert!(app.drawer().is_open());
}

#[test]
fn test_page_scroll_drives_direction_signal() {
    let mut app = mounted_app(DrawerVariant::Persistent);

    press(&mut app, &[KeyCode::Char('j')]);
    assert!(app.controller().is_downscrolling());
    assert!(app.snapshot().downscrolling);

    press(&mut app, &[KeyCode::Char('k')]);
    assert!(!app.controller().is_downscrolling());
}

#[test]
fn test_route_change_resets_scroll() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    press(&mut app, &[KeyCode::PageDown]);
    assert!(app.controller().is_downscrolling());

    press(&mut app, &[KeyCode::Char('m'), KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.page().offset(), 0);
    assert!(!app.controller().is_downscrolling());
}

#[test]
fn test_dialog_captures_keys() {
    let mut app = mounted_app(DrawerVariant::Persistent);

    press(&mut app, &[KeyCode::Char('?')]);
    assert!(app.dialog().is_visible());

    // 'm' goes to the dialog, not the shell
    press(&mut app, &[KeyCode::Char('m')]);
    assert!(!app.drawer().is_open());

    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_quit_keys() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());

    let mut app = mounted_app(DrawerVariant::Persistent);
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_destroy_detaches_scroll_listener() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    app.destroy();
    assert!(!app.controller().is_scroll_attached());
}

// On an 80x24 screen the app bar spans rows 0-2 and the body starts at row 3.
// An open drawer has its top border on row 3, so its first row is on row 4.

#[test]
fn test_click_drawer_rows() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    press(&mut app, &[KeyCode::Char('m')]);
    draw(&mut app);

    click(&mut app, 5, 4);
    assert!(app.snapshot().is_expanded("EXAMPLE"));

    // Rows are now EXAMPLE, Home, Page2, ...
    click(&mut app, 5, 6);
    assert_eq!(app.location().current(), "/page2");
    assert_eq!(app.title(), "Page2");

    // The drawer border is not a row
    click(&mut app, 5, 3);
    assert_eq!(app.location().current(), "/page2");
}

#[test]
fn test_click_menu_trigger_toggles_drawer() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    draw(&mut app);

    click(&mut app, 1, 0);
    assert!(app.drawer().is_open());

    draw(&mut app);
    click(&mut app, 1, 0);
    assert!(!app.drawer().is_open());
}

#[test]
fn test_mouse_wheel_scrolls_page() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    draw(&mut app);

    mouse(&mut app, MouseEventKind::ScrollDown, 40, 10);
    assert_eq!(app.page().offset(), 3);
    assert!(app.controller().is_downscrolling());

    mouse(&mut app, MouseEventKind::ScrollUp, 40, 10);
    assert_eq!(app.page().offset(), 0);
    assert!(!app.controller().is_downscrolling());
}

#[test]
fn test_click_on_backdrop_closes_temporary_drawer() {
    let mut app = mounted_app(DrawerVariant::Temporary);
    press(&mut app, &[KeyCode::Char('m')]);
    draw(&mut app);

    // Inside the drawer the click is handled by the drawer
    click(&mut app, 5, 4);
    assert!(app.drawer().is_open());
    assert!(app.snapshot().is_expanded("EXAMPLE"));

    // The page behind does not scroll while the drawer is open
    mouse(&mut app, MouseEventKind::ScrollDown, 60, 10);
    assert_eq!(app.page().offset(), 0);

    click(&mut app, 60, 10);
    assert!(!app.drawer().is_open());
    assert_eq!(app.focus(), Focus::Page);
}

#[test]
fn test_click_beside_docked_drawer_keeps_it_open() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    press(&mut app, &[KeyCode::Char('m')]);
    draw(&mut app);

    click(&mut app, 60, 10);
    assert!(app.drawer().is_open());
}
