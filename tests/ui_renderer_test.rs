use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use navdrawer::ui::core::{EventHandler, EventType};
use std::time::Duration;

#[test]
fn test_default_tick_rate() {
    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(100));
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(5)).tick_rate(),
        Duration::from_millis(5)
    );
}

#[test]
fn test_classify_keeps_key_presses_only() {
    let press = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
    assert!(matches!(EventHandler::classify(Event::Key(press)), EventType::Key(_)));

    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Char('j'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );
    assert!(matches!(EventHandler::classify(Event::Key(release)), EventType::Other));
}

#[test]
fn test_classify_resize() {
    assert!(matches!(
        EventHandler::classify(Event::Resize(80, 24)),
        EventType::Resize(80, 24)
    ));
    assert!(matches!(EventHandler::classify(Event::FocusGained), EventType::Other));
}
