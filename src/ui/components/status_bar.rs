//! Status bar component

use crate::ui::core::{Focus, ViewContext};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn status_text(ctx: &ViewContext<'_>) -> &'static str {
        let state = ctx.state;
        if state.loading {
            "Loading todos..."
        } else if state.pending_create.is_some() {
            "Adding todo..."
        } else if state.bulk_delete_in_progress {
            "Clearing completed todos..."
        } else if state.pending_delete.is_some() {
            "Deleting todo..."
        } else if state.pending_toggle.is_some() {
            "Updating todo..."
        } else {
            match ctx.focus {
                Focus::Input => "Enter: add • Tab: list • Ctrl+C: quit",
                Focus::List => "Space: toggle • d: delete • h/l: filter • C: clear completed • i: new • ?: help • q: quit",
            }
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext<'_>) {
        let state = ctx.state;
        let busy = state.loading || state.is_busy() || state.pending_toggle.is_some();

        let (text, status_color) = if busy {
            (Self::status_text(ctx).to_string(), Color::Yellow)
        } else {
            let color = if state.error.is_some() { Color::Red } else { Color::Gray };
            (format!("{} {}", ctx.icons.info(), Self::status_text(ctx)), color)
        };

        let status_bar = Paragraph::new(text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
