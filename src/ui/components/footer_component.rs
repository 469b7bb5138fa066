//! Footer with the remaining count, filter tabs and the clear-completed control

use crate::constants::{CLEAR_COMPLETED_LABEL, ITEMS_LEFT_SUFFIX};
use crate::entities::FilterStatus;
use crate::ui::core::{Action, Component, ViewContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn items_left_label(remaining: usize) -> String {
        format!("{} {}", remaining, ITEMS_LEFT_SUFFIX)
    }

    fn filter_tabs(selected: FilterStatus) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, filter) in FilterStatus::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            let style = if *filter == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{} {}", index + 1, filter.label()), style));
        }
        Line::from(spans)
    }
}

impl Component for FooterComponent {
    fn handle_key_events(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Action {
        // Filters and bulk clear only exist while the footer is shown
        if !ctx.state.show_footer() {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('l') | KeyCode::Right => Action::NextFilter,
            KeyCode::Char('h') | KeyCode::Left => Action::PreviousFilter,
            KeyCode::Char('1') => Action::SetFilter(FilterStatus::All),
            KeyCode::Char('2') => Action::SetFilter(FilterStatus::Active),
            KeyCode::Char('3') => Action::SetFilter(FilterStatus::Completed),
            KeyCode::Char('C') if ctx.state.can_clear_completed() => Action::ClearCompleted,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext<'_>) {
        let state = ctx.state;
        let [count_area, filter_area, clear_area] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(40), Constraint::Percentage(30)])
                .areas(rect);

        let count = Paragraph::new(Self::items_left_label(state.remaining_count())).style(Style::default().fg(Color::Gray));
        f.render_widget(count, count_area);

        let filters = Paragraph::new(Self::filter_tabs(state.filter)).alignment(Alignment::Center);
        f.render_widget(filters, filter_area);

        // Hidden entirely when there is nothing to clear
        if state.has_completed() {
            let (text, style) = if state.bulk_delete_in_progress {
                (
                    format!("{} {}", ctx.icons.loading(), CLEAR_COMPLETED_LABEL),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                (format!("C {}", CLEAR_COMPLETED_LABEL), Style::default().fg(Color::Red))
            };
            let clear = Paragraph::new(text).style(style).alignment(Alignment::Right);
            f.render_widget(clear, clear_area);
        }
    }
}
