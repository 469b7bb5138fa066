//! Error banner

use crate::ui::core::{Action, Component, ViewContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct ErrorBanner;

impl ErrorBanner {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ErrorBanner {
    fn handle_key_events(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Action {
        match key.code {
            KeyCode::Char('x') if ctx.state.error.is_some() => Action::DismissError,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext<'_>) {
        let Some(message) = ctx.state.error_message() else {
            return;
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{} {}", ctx.icons.error(), message),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (x or Ctrl+X to dismiss)", Style::default().fg(Color::DarkGray)),
        ]);

        let banner = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Red)));
        f.render_widget(banner, rect);
    }
}
