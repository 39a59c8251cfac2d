use super::actions::Action;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// A piece of the shell that draws itself and turns input into [`Action`]s.
///
/// Components never touch navigation state directly. Whatever they want to
/// happen is returned as an action and applied by the app component.
pub trait Component {
    /// Called once before the first render
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    /// Apply an action; anything not consumed is handed back
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}

    /// Called once when the shell is torn down
    fn destroy(&mut self) {}
}
