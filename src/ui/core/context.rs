use super::actions::Focus;
use crate::icons::IconService;
use crate::state::AppState;

/// Read-only view of the application handed to components for rendering and
/// key handling.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub state: &'a AppState,
    pub icons: &'a IconService,
    pub focus: Focus,
}

impl<'a> ViewContext<'a> {
    pub fn new(state: &'a AppState, icons: &'a IconService, focus: Focus) -> Self {
        Self { state, icons, focus }
    }

    pub fn input_focused(&self) -> bool {
        self.focus == Focus::Input
    }
}
