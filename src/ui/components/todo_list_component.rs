use crate::entities::TodoId;
use crate::state::{AppState, RowStatus};
use crate::ui::components::todo_item_component::TodoItem;
use crate::ui::core::{Action, Component, ViewContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

/// The list of todos under the current filter, followed by the optimistic
/// row while a creation is in flight.
pub struct TodoListComponent {
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    /// Id of the selected todo, if the visible list has one at that position
    pub fn selected_id(&self, state: &AppState) -> Option<TodoId> {
        state.filtered_todos().get(self.selected_index).map(|todo| todo.id)
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Keep the selection inside a list of `len` visible todos
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    fn update_list_state(&mut self, len: usize, list_focused: bool) {
        self.clamp_selection(len);
        if len == 0 || !list_focused {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTodo,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTodo,
            KeyCode::Char(' ') | KeyCode::Enter => match self.selected_id(ctx.state) {
                Some(id) => Action::ToggleTodo(id),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_id(ctx.state) {
                Some(id) => Action::DeleteTodo(id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext<'_>) {
        let state = ctx.state;
        let todos = state.filtered_todos();
        let list_focused = !ctx.input_focused();
        self.update_list_state(todos.len(), list_focused);

        let title = format!(" Todos ({}) ", state.filter.label());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(if list_focused { Color::Yellow } else { Color::Gray }));

        if state.loading {
            let loading = Paragraph::new(Line::from(Span::styled(
                format!("{} Loading todos...", ctx.icons.loading()),
                Style::default().fg(Color::Yellow),
            )))
            .block(block);
            f.render_widget(loading, rect);
            return;
        }

        let mut items: Vec<_> = todos
            .iter()
            .enumerate()
            .map(|(index, todo)| {
                let selected = list_focused && index == self.selected_index;
                TodoItem::new(&todo.title, todo.completed, state.row_status(todo)).render(selected, ctx.icons)
            })
            .collect();

        if let Some(draft) = &state.pending_create {
            items.push(TodoItem::new(&draft.title, draft.completed, RowStatus::Creating).render(false, ctx.icons));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
