use navdrawer::config::DrawerVariant;
use navdrawer::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_closed_drawer_gives_page_full_width() {
    let area = Rect::new(0, 0, 100, 30);
    let layout = LayoutManager::shell_layout(area, true, false, DrawerVariant::Persistent, 30);

    assert_eq!(layout.app_bar, Some(Rect::new(0, 0, 100, 3)));
    assert_eq!(layout.drawer, None);
    assert_eq!(layout.page, Rect::new(0, 3, 100, 26));
    assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
}

#[test]
fn test_hidden_app_bar_returns_rows_to_page() {
    let area = Rect::new(0, 0, 100, 30);
    let layout = LayoutManager::shell_layout(area, false, false, DrawerVariant::Persistent, 30);

    assert_eq!(layout.app_bar, None);
    assert_eq!(layout.page, Rect::new(0, 0, 100, 29));
}

#[test]
fn test_docked_drawer_splits_body() {
    let area = Rect::new(0, 0, 100, 30);
    let layout = LayoutManager::shell_layout(area, true, true, DrawerVariant::Permanent, 30);

    assert_eq!(layout.drawer, Some(Rect::new(0, 3, 30, 26)));
    assert_eq!(layout.page, Rect::new(30, 3, 70, 26));
}

#[test]
fn test_temporary_drawer_overlays_page() {
    let area = Rect::new(0, 0, 100, 30);
    let layout = LayoutManager::shell_layout(area, true, true, DrawerVariant::Temporary, 30);

    assert_eq!(layout.drawer, Some(Rect::new(0, 3, 30, 26)));
    assert_eq!(layout.page, Rect::new(0, 3, 100, 26));
}

#[test]
fn test_drawer_width_leaves_room_for_page() {
    assert_eq!(LayoutManager::drawer_width(100, 30), 30);
    assert_eq!(LayoutManager::drawer_width(40, 30), 20);
    assert_eq!(LayoutManager::drawer_width(30, 30), 15);
}

#[test]
fn test_contains() {
    let area = Rect::new(2, 2, 4, 3);
    assert!(LayoutManager::contains(area, 2, 2));
    assert!(LayoutManager::contains(area, 5, 4));
    assert!(!LayoutManager::contains(area, 6, 4));
    assert!(!LayoutManager::contains(area, 3, 5));
}
