use crate::{draw, mounted_app, press};
use crossterm::event::KeyCode;
use navdrawer::config::DrawerVariant;

#[test]
fn test_render_shows_title_and_app_bar() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    let screen = draw(&mut app);

    assert!(screen.contains("Home"));
    assert!(screen.contains("LOGIN"));
    assert!(!screen.contains("Navigation"));
}

#[test]
fn test_render_hides_app_bar_while_scrolling_down() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    draw(&mut app);

    press(&mut app, &[KeyCode::Char('j')]);
    let screen = draw(&mut app);
    assert!(!screen.contains("LOGIN"));

    press(&mut app, &[KeyCode::Char('k')]);
    let screen = draw(&mut app);
    assert!(screen.contains("LOGIN"));
}

#[test]
fn test_render_open_drawer() {
    let mut app = mounted_app(DrawerVariant::Permanent);
    let screen = draw(&mut app);

    assert!(screen.contains("Navigation"));
    assert!(screen.contains("EXAMPLE"));
    assert!(screen.contains("NETWORK"));
}

#[test]
fn test_render_help_dialog() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    press(&mut app, &[KeyCode::Char('?')]);
    let screen = draw(&mut app);
    assert!(screen.contains("Help"));
}

#[test]
fn test_viewport_clamp_keeps_scroll_direction_in_sync() {
    let mut app = mounted_app(DrawerVariant::Persistent);
    draw(&mut app);

    // 100 lines in an 18 line viewport
    press(&mut app, &[KeyCode::End]);
    assert_eq!(app.page().offset(), 82);
    assert!(app.controller().is_downscrolling());

    // The app bar hides, the viewport grows and the offset is pulled back
    draw(&mut app);
    assert_eq!(app.page().offset(), 79);
    assert!(!app.controller().is_downscrolling());

    draw(&mut app);
    press(&mut app, &[KeyCode::Char('j')]);
    assert_eq!(app.page().offset(), 80);
    assert!(app.controller().is_downscrolling());
}
