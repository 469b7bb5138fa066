use super::actions::Action;
use super::context::ViewContext;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A piece of the screen. Components keep only presentation state (selection,
/// scroll offset); everything else is read from the [`ViewContext`].
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext<'_>);
}
