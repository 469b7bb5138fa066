//! New-todo input field

use crate::constants::NEW_TODO_PLACEHOLDER;
use crate::ui::components::common::create_input_paragraph;
use crate::ui::core::{Action, Component, ViewContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

#[derive(Debug, Default)]
pub struct NewTodoInput;

impl NewTodoInput {
    pub fn new() -> Self {
        Self
    }
}

impl Component for NewTodoInput {
    fn handle_key_events(&mut self, key: KeyEvent, _ctx: &ViewContext<'_>) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Action::InputChar(c)
            }
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Enter => Action::SubmitNewTodo,
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => Action::FocusList,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext<'_>) {
        let enabled = ctx.state.input_enabled();
        let title = if enabled {
            "New todo".to_string()
        } else {
            format!("{} Adding", ctx.icons.loading())
        };

        let paragraph = create_input_paragraph(
            &ctx.state.input,
            &title,
            NEW_TODO_PLACEHOLDER,
            ctx.input_focused(),
            enabled,
        );
        f.render_widget(paragraph, rect);
    }
}
