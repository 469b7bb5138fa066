//! Modal dialogs layered over the main screen: key help and the in-memory log.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::components::common::create_dialog_block;
use crate::ui::core::{Action, Component, DialogType, ViewContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_TEXT: &str = "\
New todo input
  type        edit the title
  Backspace   delete last character
  Enter       add the todo
  Tab / Esc   move to the list

Todo list
  j / k       next / previous todo
  Space       toggle completed
  d / Del     delete todo
  h / l       previous / next filter
  1 2 3       All / Active / Completed
  C           clear completed todos
  x           dismiss error
  Ctrl+X      dismiss error from anywhere
  i / Tab     back to the input

Global
  ?           this help
  G           application logs
  T           cycle icon theme
  q / Ctrl+C  quit";

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    /// Content rows visible in the last render
    viewport_height: usize,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            viewport_height: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Largest offset that still fills the viewport
    fn max_scroll(&self) -> usize {
        self.content().0.lines().count().saturating_sub(self.viewport_height)
    }

    fn content(&self) -> (String, &'static str, Color) {
        match self.dialog_type {
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                let text = if logs.is_empty() {
                    "No log entries yet".to_string()
                } else {
                    logs.join("\n")
                };
                (text, DIALOG_TITLE_LOGS, Color::Cyan)
            }
            _ => (HELP_TEXT.to_string(), DIALOG_TITLE_HELP, Color::Blue),
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent, _ctx: &ViewContext<'_>) -> Action {
        if !self.is_visible() {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('G') => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => Action::DialogScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::DialogScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.reset_scroll();
                Action::ShowDialog(dialog_type)
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.reset_scroll();
                Action::HideDialog
            }
            Action::DialogScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
                Action::None
            }
            Action::DialogScrollDown => {
                self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
                self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, _ctx: &ViewContext<'_>) {
        if !self.is_visible() {
            return;
        }

        let dialog_area = LayoutManager::centered_rect(70, 70, rect);
        f.render_widget(Clear, dialog_area);

        let (text, title, color) = self.content();
        let block = create_dialog_block(title, color);
        let content_area = block.inner(dialog_area);

        let lines: Vec<&str> = text.lines().collect();
        let visible_height = content_area.height as usize;
        self.viewport_height = visible_height;
        // The terminal may have grown since the last scroll
        self.scroll_offset = self.scroll_offset.min(lines.len().saturating_sub(visible_height));

        let visible: Vec<&str> = lines.iter().skip(self.scroll_offset).take(visible_height).copied().collect();
        let paragraph = Paragraph::new(visible.join("\n"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(block, dialog_area);
        f.render_widget(paragraph, content_area);

        if lines.len() > visible_height {
            self.scrollbar_state = self
                .scrollbar_state
                .content_length(lines.len())
                .viewport_content_length(visible_height)
                .position(self.scroll_offset);

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .style(Style::default().fg(Color::Gray));
            f.render_stateful_widget(scrollbar, content_area, &mut self.scrollbar_state);
        }
    }
}
