use crate::icons::IconService;
use crate::state::RowStatus;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One row of the todo list
#[derive(Debug, Clone)]
pub struct TodoItem<'a> {
    pub title: &'a str,
    pub completed: bool,
    pub status: RowStatus,
}

impl<'a> TodoItem<'a> {
    pub fn new(title: &'a str, completed: bool, status: RowStatus) -> Self {
        Self {
            title,
            completed,
            status,
        }
    }

    pub fn render(&self, selected: bool, icons: &IconService) -> ListItem<'static> {
        let mut line_spans = Vec::new();

        let checkbox_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(format!("{} ", icons.checkbox(self.completed)), checkbox_style));

        let mut title_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.completed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        if self.completed {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        }
        line_spans.push(Span::styled(self.title.to_string(), title_style));

        // Loading marker for rows with a request in flight
        if self.status.is_loading() {
            let label = match self.status {
                RowStatus::Creating => "saving",
                RowStatus::Deleting => "deleting",
                RowStatus::Toggling => "updating",
                RowStatus::Idle => "",
            };
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                format!("{} {}", icons.loading(), label),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ));
        }

        let item = ListItem::new(Line::from(line_spans));
        if self.status.is_loading() {
            item.style(Style::default().add_modifier(Modifier::DIM))
        } else {
            item
        }
    }
}
